//! Core types and traits for the backtester.
//!
//! This crate provides the foundational building blocks including:
//! - Market data bars
//! - Trading signals
//! - The strategy contract and the bar source contract consumed by the runner

pub mod types;
pub mod traits;
pub mod error;

pub use error::{BacktestError, BacktestResult};
pub use types::*;
pub use traits::*;
