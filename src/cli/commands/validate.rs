//! Validate configuration command.

use anyhow::{Context, Result};
use backtest_config::{load_config, to_toml};
use std::path::Path;

pub fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {}", config_path.display());

    let config = load_config(config_path).context("Configuration error")?;
    config
        .strategy
        .sma_config()
        .validate()
        .context("Invalid strategy settings")?;

    println!("Configuration is valid!");
    println!();
    print!("{}", to_toml(&config)?);

    Ok(())
}
