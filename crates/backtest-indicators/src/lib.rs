//! Streaming technical indicators.
//!
//! Indicators here are updated one observation at a time so strategies can
//! maintain them bar by bar without re-scanning history.

pub mod moving_average;

pub use moving_average::MovingAverageTracker;
