//! Core traits for the backtester.

mod data_source;
mod strategy;

pub use data_source::BarSource;
pub use strategy::{Strategy, StrategyState};
