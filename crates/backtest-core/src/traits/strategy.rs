//! Strategy trait definitions.

use crate::types::{Bar, Signal};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// State of a strategy for monitoring and serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyState {
    /// Strategy name
    pub name: String,
    /// Whether the strategy has seen enough bars to make directional decisions
    pub is_warmed_up: bool,
    /// Number of bars processed
    pub bars_processed: usize,
    /// Current indicator values
    pub indicators: BTreeMap<String, f64>,
    /// Custom strategy-specific state
    pub custom: serde_json::Value,
}

/// Core strategy trait.
///
/// Strategies consume bars one at a time and always have a current signal.
/// The runner only ever talks to a strategy through this trait, so new
/// strategies plug in without touching the replay loop.
///
/// An instance mutates its indicators in place and must not be shared
/// between concurrent runs.
pub trait Strategy: Send + Sync {
    /// Get the human-readable name of this strategy.
    fn name(&self) -> &str;

    /// Consume one bar and update internal indicator state.
    ///
    /// Must accept any bar, including ones carrying NaN or otherwise
    /// inconsistent prices.
    fn on_new_bar(&mut self, bar: &Bar);

    /// Get the current decision, reflecting the most recent `on_new_bar`.
    ///
    /// Before any bar has been processed this is `Signal::default()`.
    /// Repeated calls without an intervening bar return the same signal.
    fn generate_signal(&self) -> Signal;

    /// Reset the strategy to its state before the first bar.
    fn reset(&mut self);

    /// Get the number of bars needed before a directional signal is possible.
    fn warmup_period(&self) -> usize;

    /// Get the current strategy state for monitoring.
    fn state(&self) -> StrategyState;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Emits BUY when a bar closes above its open, SELL otherwise.
    struct CandleStrategy {
        current: Signal,
        bars_seen: usize,
    }

    impl Strategy for CandleStrategy {
        fn name(&self) -> &str {
            "candle"
        }

        fn on_new_bar(&mut self, bar: &Bar) {
            self.bars_seen += 1;
            self.current = if bar.close > bar.open {
                Signal::buy(bar.timestamp.clone())
            } else {
                Signal::sell(bar.timestamp.clone())
            };
        }

        fn generate_signal(&self) -> Signal {
            self.current.clone()
        }

        fn reset(&mut self) {
            self.current = Signal::default();
            self.bars_seen = 0;
        }

        fn warmup_period(&self) -> usize {
            1
        }

        fn state(&self) -> StrategyState {
            StrategyState {
                name: self.name().to_string(),
                is_warmed_up: self.bars_seen >= 1,
                bars_processed: self.bars_seen,
                ..Default::default()
            }
        }
    }

    #[test]
    fn test_strategy_through_trait_object() {
        let mut strategy: Box<dyn Strategy> = Box::new(CandleStrategy {
            current: Signal::default(),
            bars_seen: 0,
        });

        assert_eq!(strategy.generate_signal(), Signal::default());

        strategy.on_new_bar(&Bar::new("t1", 1.0, 2.0, 0.5, 1.5, 10.0));
        assert!(strategy.generate_signal().is_buy());
        assert_eq!(strategy.state().bars_processed, 1);

        strategy.reset();
        assert_eq!(strategy.generate_signal(), Signal::default());
        assert!(!strategy.state().is_warmed_up);
    }
}
