//! Signal tape statistics.

use backtest_core::types::{Signal, SignalType};
use serde::{Deserialize, Serialize};

use crate::BarSignal;

/// Counts of emitted signals by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalStats {
    /// Bars processed
    pub bars_processed: usize,
    /// BUY signals
    pub buy_signals: usize,
    /// SELL signals
    pub sell_signals: usize,
    /// HOLD signals of any strength
    pub hold_signals: usize,
    /// HOLDs emitted before the strategy had enough history
    pub warmup_holds: usize,
    /// HOLDs emitted on an exact tie
    pub tie_holds: usize,
    /// Number of times the signal type changed from one bar to the next
    pub direction_changes: usize,
}

impl SignalStats {
    /// Tally a signal tape.
    pub fn from_events(events: &[BarSignal]) -> Self {
        let mut stats = Self::default();
        let mut previous: Option<SignalType> = None;

        for event in events {
            stats.record(&event.signal);

            let current = event.signal.signal_type;
            if previous.is_some_and(|p| p != current) {
                stats.direction_changes += 1;
            }
            previous = Some(current);
        }

        stats
    }

    fn record(&mut self, signal: &Signal) {
        self.bars_processed += 1;
        match signal.signal_type {
            SignalType::Buy => self.buy_signals += 1,
            SignalType::Sell => self.sell_signals += 1,
            SignalType::Hold => {
                self.hold_signals += 1;
                if signal.strength == Signal::INSUFFICIENT_DATA {
                    self.warmup_holds += 1;
                } else if signal.strength == Signal::TIE {
                    self.tie_holds += 1;
                }
            }
        }
    }

    /// Percentage of bars that produced a directional signal.
    pub fn directional_pct(&self) -> f64 {
        if self.bars_processed == 0 {
            0.0
        } else {
            (self.buy_signals + self.sell_signals) as f64 / self.bars_processed as f64 * 100.0
        }
    }
}
