//! Run command implementation.

use anyhow::{Context, Result};
use backtest_config::AppConfig;
use backtest_data::BarFeed;
use backtest_runner::{BacktestReport, BacktestRunner};
use backtest_strategies::StrategyRegistry;
use clap::ValueEnum;
use tracing::info;

use crate::cli::{OutputFormat, RunArgs};

pub fn run(args: RunArgs, config: &AppConfig) -> Result<()> {
    let mut settings = config.strategy.clone();
    if let Some(name) = args.strategy {
        settings.name = name;
    }
    if let Some(short) = args.short {
        settings.short_window = short;
    }
    if let Some(long) = args.long {
        settings.long_window = long;
    }

    // Create strategy
    let registry = StrategyRegistry::new();
    let strategy = registry
        .create(&settings.name, settings.params())
        .context("Failed to create strategy")?;

    // Load data
    let data_path = args.data.unwrap_or_else(|| config.data.path.clone());
    let mut feed = BarFeed::from_csv(&data_path)
        .with_context(|| format!("Failed to load data from {}", data_path.display()))?;
    info!(
        strategy = strategy.name(),
        bars = feed.len(),
        path = %data_path.display(),
        "starting backtest"
    );

    // Replay
    let mut runner = BacktestRunner::new(&mut feed, strategy);
    let events = runner.run().context("Backtest aborted")?;
    let report = BacktestReport::new(runner.strategy().name(), events);

    // Output results
    let format = match args.output {
        Some(format) => format,
        None => OutputFormat::from_str(&config.report.format, true)
            .map_err(anyhow::Error::msg)
            .context("Invalid report format in configuration")?,
    };
    match format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Csv => print!("{}", report.to_csv()?),
        OutputFormat::Text => {
            print!("{}", report.tape());
            print!("{}", report.summary());
        }
    }

    // Save if requested
    if let Some(save_path) = args.save.as_ref().or(config.report.save.as_ref()) {
        let contents = match format {
            OutputFormat::Csv => report.to_csv()?,
            _ => report.to_json()?,
        };
        std::fs::write(save_path, contents)
            .with_context(|| format!("Failed to write {}", save_path.display()))?;
        info!("Results saved to {}", save_path.display());
    }

    Ok(())
}
