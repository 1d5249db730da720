//! Trading signal types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a trading decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalType {
    Buy,
    Sell,
    Hold,
}

impl SignalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalType::Buy => "BUY",
            SignalType::Sell => "SELL",
            SignalType::Hold => "HOLD",
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width specifiers like {:<4} apply
        f.pad(self.as_str())
    }
}

/// A trading decision emitted by a strategy for one bar.
///
/// `strength` is advisory and lies in `[0.0, 1.0]` by convention only;
/// nothing enforces the bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Buy, sell or hold
    pub signal_type: SignalType,
    /// Timestamp of the bar that produced the signal (empty before any bar)
    pub timestamp: String,
    /// Confidence scalar
    pub strength: f64,
}

impl Signal {
    /// Strength attached to a hold emitted during warm-up.
    pub const INSUFFICIENT_DATA: f64 = 0.0;
    /// Strength attached to a hold emitted on an exact tie.
    pub const TIE: f64 = 0.5;
    /// Strength attached to any directional decision.
    pub const DIRECTIONAL: f64 = 1.0;

    /// Create a new signal.
    pub fn new(signal_type: SignalType, timestamp: impl Into<String>, strength: f64) -> Self {
        Self {
            signal_type,
            timestamp: timestamp.into(),
            strength,
        }
    }

    pub fn buy(timestamp: impl Into<String>) -> Self {
        Self::new(SignalType::Buy, timestamp, Self::DIRECTIONAL)
    }

    pub fn sell(timestamp: impl Into<String>) -> Self {
        Self::new(SignalType::Sell, timestamp, Self::DIRECTIONAL)
    }

    pub fn hold(timestamp: impl Into<String>, strength: f64) -> Self {
        Self::new(SignalType::Hold, timestamp, strength)
    }

    pub fn is_buy(&self) -> bool {
        self.signal_type == SignalType::Buy
    }

    pub fn is_sell(&self) -> bool {
        self.signal_type == SignalType::Sell
    }

    pub fn is_hold(&self) -> bool {
        self.signal_type == SignalType::Hold
    }
}

impl Default for Signal {
    /// The signal reported before any bar has been processed.
    fn default() -> Self {
        Self::hold(String::new(), Self::INSUFFICIENT_DATA)
    }
}
