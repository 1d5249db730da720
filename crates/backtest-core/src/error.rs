//! Error types for the backtester.

use thiserror::Error;

/// Top-level backtester error.
#[derive(Error, Debug)]
pub enum BacktestError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Strategy error: {0}")]
    Strategy(#[from] StrategyError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Strategy-specific errors.
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Strategy not found: {0}")]
    NotFound(String),
}

/// Bar source errors.
#[derive(Error, Debug)]
pub enum DataError {
    /// A bar was requested after the source ran out.
    #[error("No more bars available")]
    Exhausted,

    #[error("Data file not found: {0}")]
    NotFound(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for backtester operations.
pub type BacktestResult<T> = Result<T, BacktestError>;
