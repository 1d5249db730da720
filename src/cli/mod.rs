//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "backtest")]
#[command(author, version, about = "Replay price bars through a trading strategy")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", env = "BACKTEST_CONFIG")]
    pub config: PathBuf,

    /// Log level (overrides the configured level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a CSV file through a strategy
    Run(RunArgs),
    /// List available strategies
    Strategies,
    /// Validate configuration
    ValidateConfig,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Data file (CSV); defaults to the configured path
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Strategy to run
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Short moving average window
    #[arg(long)]
    pub short: Option<usize>,

    /// Long moving average window
    #[arg(long)]
    pub long: Option<usize>,

    /// Output format; defaults to the configured format
    #[arg(long)]
    pub output: Option<OutputFormat>,

    /// Save results to file
    #[arg(long)]
    pub save: Option<PathBuf>,
}
