//! Trading strategy implementations.
//!
//! Currently provides the simple moving average crossover strategy. Further
//! strategies implement `backtest_core::Strategy` and register themselves in
//! the [`StrategyRegistry`].

mod registry;
mod sma_strategy;

pub use registry::{StrategyInfo, StrategyRegistry};
pub use sma_strategy::{SmaConfig, SmaStrategy};
