//! List strategies command.

use anyhow::Result;
use backtest_strategies::StrategyRegistry;

pub fn run() -> Result<()> {
    let registry = StrategyRegistry::new();

    println!("Available Strategies");
    println!("----------------------------------------");
    println!();

    for info in registry.list() {
        println!("  {}", info.key);
        println!("  {}", info.description);
        println!("  defaults: {}", info.default_config);
        println!();
    }

    println!("Use --strategy <name> to select a strategy.");

    Ok(())
}
