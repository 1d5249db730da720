//! Bar replay loop and signal reporting.

mod runner;
mod statistics;
mod report;

pub use runner::{BacktestRunner, BarSignal};
pub use statistics::SignalStats;
pub use report::BacktestReport;
