//! Simple Moving Average crossover strategy.
//!
//! Emits BUY while the short SMA sits above the long SMA and SELL while it
//! sits below. This is a level signal: every bar after warm-up reports the
//! current ordering of the two averages, not just the bar where they cross.

use backtest_core::{
    error::StrategyError,
    traits::{Strategy, StrategyState},
    types::{Bar, Signal},
};
use backtest_indicators::MovingAverageTracker;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for the SMA strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmaConfig {
    /// Short moving average window
    pub short_window: usize,
    /// Long moving average window
    pub long_window: usize,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self {
            short_window: 10,
            long_window: 50,
        }
    }
}

impl SmaConfig {
    /// Validate the configuration.
    ///
    /// Only zero windows are rejected. `short_window >= long_window` is
    /// allowed and simply produces a contrarian relationship.
    pub fn validate(&self) -> Result<(), StrategyError> {
        if self.short_window == 0 || self.long_window == 0 {
            return Err(StrategyError::InvalidConfig(
                "Window sizes must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// SMA crossover strategy.
pub struct SmaStrategy {
    name: String,
    config: SmaConfig,
    short_ma: MovingAverageTracker,
    long_ma: MovingAverageTracker,
    current: Signal,
    bars_processed: usize,
}

impl SmaStrategy {
    /// Create a strategy over the given short and long windows.
    pub fn new(short_window: usize, long_window: usize) -> Self {
        Self::from_config(SmaConfig {
            short_window,
            long_window,
        })
    }

    pub fn from_config(config: SmaConfig) -> Self {
        Self {
            name: format!("SMA_{}_{}", config.short_window, config.long_window),
            short_ma: MovingAverageTracker::new(config.short_window),
            long_ma: MovingAverageTracker::new(config.long_window),
            config,
            current: Signal::default(),
            bars_processed: 0,
        }
    }

    pub fn config(&self) -> &SmaConfig {
        &self.config
    }

    fn decide(&self, timestamp: &str) -> Signal {
        // Only the long tracker gates warm-up. With short <= long the short
        // tracker is full whenever the long one is.
        if !self.long_ma.is_full() {
            return Signal::hold(timestamp, Signal::INSUFFICIENT_DATA);
        }

        let short_mean = self.short_ma.mean();
        let long_mean = self.long_ma.mean();

        // Exact comparison, no tolerance band.
        if short_mean > long_mean {
            Signal::buy(timestamp)
        } else if short_mean < long_mean {
            Signal::sell(timestamp)
        } else {
            Signal::hold(timestamp, Signal::TIE)
        }
    }
}

impl Default for SmaStrategy {
    fn default() -> Self {
        Self::from_config(SmaConfig::default())
    }
}

impl Strategy for SmaStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_new_bar(&mut self, bar: &Bar) {
        self.short_ma.push(bar.close);
        self.long_ma.push(bar.close);
        self.bars_processed += 1;

        if self.bars_processed == self.config.long_window {
            debug!(strategy = %self.name, timestamp = %bar.timestamp, "warm-up complete");
        }

        self.current = self.decide(&bar.timestamp);
    }

    fn generate_signal(&self) -> Signal {
        self.current.clone()
    }

    fn reset(&mut self) {
        self.short_ma.reset();
        self.long_ma.reset();
        self.current = Signal::default();
        self.bars_processed = 0;
    }

    fn warmup_period(&self) -> usize {
        self.config.long_window
    }

    fn state(&self) -> StrategyState {
        StrategyState {
            name: self.name.clone(),
            is_warmed_up: self.long_ma.is_full(),
            bars_processed: self.bars_processed,
            indicators: [
                ("short_sma".to_string(), self.short_ma.mean()),
                ("long_sma".to_string(), self.long_ma.mean()),
            ]
            .into_iter()
            .collect(),
            custom: serde_json::json!({
                "short_window": self.config.short_window,
                "long_window": self.config.long_window,
            }),
        }
    }
}
