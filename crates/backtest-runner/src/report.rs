//! Backtest report generation.

use backtest_core::error::{BacktestError, BacktestResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{BarSignal, SignalStats};

const RULE: &str = "----------------------------------------";

/// Complete result of one replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestReport {
    /// Strategy name
    pub strategy: String,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
    /// Signal counts
    pub stats: SignalStats,
    /// Processed bars with their signals, in replay order
    pub events: Vec<BarSignal>,
}

impl BacktestReport {
    pub fn new(strategy: impl Into<String>, events: Vec<BarSignal>) -> Self {
        Self {
            strategy: strategy.into(),
            generated_at: Utc::now(),
            stats: SignalStats::from_events(&events),
            events,
        }
    }

    /// Render the per-bar signal tape.
    pub fn tape(&self) -> String {
        let mut s = String::new();

        s.push_str(&format!("Running strategy: {}\n", self.strategy));
        s.push_str(&format!("Loaded {} bars\n", self.events.len()));
        s.push_str(RULE);
        s.push('\n');

        for event in &self.events {
            s.push_str(&format!(
                "{} | Close: {} | Signal: {:<4}\n",
                event.bar.timestamp, event.bar.close, event.signal.signal_type
            ));
        }

        s
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str(RULE);
        s.push('\n');
        s.push_str("SIGNAL SUMMARY\n");
        s.push_str(&format!("  Strategy:            {}\n", self.strategy));
        s.push_str(&format!(
            "  Bars Processed:      {}\n",
            self.stats.bars_processed
        ));
        s.push_str(&format!("  BUY:                 {}\n", self.stats.buy_signals));
        s.push_str(&format!("  SELL:                {}\n", self.stats.sell_signals));
        s.push_str(&format!(
            "  HOLD:                {} ({} warm-up, {} tie)\n",
            self.stats.hold_signals, self.stats.warmup_holds, self.stats.tie_holds
        ));
        s.push_str(&format!(
            "  Direction Changes:   {}\n",
            self.stats.direction_changes
        ));
        s.push_str(&format!(
            "  Directional Bars:    {:.2}%\n",
            self.stats.directional_pct()
        ));
        s.push_str(RULE);
        s.push('\n');

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export the signal tape to CSV.
    pub fn to_csv(&self) -> BacktestResult<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(["timestamp", "close", "signal", "strength"])
            .map_err(csv_error)?;

        for event in &self.events {
            let close = event.bar.close.to_string();
            let strength = event.signal.strength.to_string();
            writer
                .write_record([
                    event.bar.timestamp.as_str(),
                    close.as_str(),
                    event.signal.signal_type.as_str(),
                    strength.as_str(),
                ])
                .map_err(csv_error)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| BacktestError::Serialization(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| BacktestError::Serialization(e.to_string()))
    }
}

fn csv_error(err: csv::Error) -> BacktestError {
    BacktestError::Serialization(err.to_string())
}
