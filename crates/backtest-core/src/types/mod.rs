//! Core data types for the backtester.

mod ohlcv;
mod signal;

pub use ohlcv::Bar;
pub use signal::{Signal, SignalType};
