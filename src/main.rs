//! Backtester CLI application.

mod cli;

use anyhow::{Context, Result};
use backtest_config::load_config_or_default;
use backtest_monitor::setup_logging;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config_or_default(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    // Setup logging
    let level = cli
        .log_level
        .map(|l| l.as_str().to_string())
        .unwrap_or_else(|| config.logging.level.clone());
    let _log_guard = setup_logging(
        &level,
        cli.json_logs || config.logging.is_json(),
        config.logging.file.as_deref(),
    )
    .context("Failed to initialise logging")?;

    // Execute command
    match cli.command {
        Commands::Run(args) => cli::commands::run::run(args, &config),
        Commands::Strategies => cli::commands::strategies::run(),
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config),
    }
}
