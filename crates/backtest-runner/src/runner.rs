//! Bar replay loop.

use backtest_core::error::BacktestResult;
use backtest_core::traits::{BarSource, Strategy};
use backtest_core::types::{Bar, Signal};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

/// A processed bar paired with the signal the strategy reported for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSignal {
    pub bar: Bar,
    pub signal: Signal,
}

/// Drives one strategy over a bar source.
///
/// The runner borrows the source and owns the strategy for its lifetime.
/// Replay is strictly sequential: each bar is fully processed before the
/// next one is fetched, and nothing is reordered or dropped.
pub struct BacktestRunner<'a> {
    source: &'a mut dyn BarSource,
    strategy: Box<dyn Strategy>,
}

impl<'a> BacktestRunner<'a> {
    /// Create a new runner.
    pub fn new(source: &'a mut dyn BarSource, strategy: Box<dyn Strategy>) -> Self {
        Self { source, strategy }
    }

    /// Replay every remaining bar through the strategy.
    ///
    /// Returns one [`BarSignal`] per bar, in arrival order.
    ///
    /// # Errors
    /// Any source error aborts the run and is returned unchanged; partial
    /// results are discarded. A source that reports `has_next()` but then
    /// fails to deliver surfaces as `DataError::Exhausted`.
    pub fn run(&mut self) -> BacktestResult<Vec<BarSignal>> {
        info!(strategy = self.strategy.name(), "starting replay");

        let mut events = Vec::new();

        while self.source.has_next() {
            let bar = self.source.get_next_bar()?;

            self.strategy.on_new_bar(&bar);
            let signal = self.strategy.generate_signal();

            trace!(
                timestamp = %bar.timestamp,
                close = bar.close,
                signal = %signal.signal_type,
                strength = signal.strength,
                "bar processed"
            );

            events.push(BarSignal { bar, signal });
        }

        let state = self.strategy.state();
        debug!(indicators = ?state.indicators, warmed_up = state.is_warmed_up, "final strategy state");
        info!(
            strategy = self.strategy.name(),
            bars = events.len(),
            "replay finished"
        );

        Ok(events)
    }

    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    /// Give the strategy back, e.g. to reset and reuse it.
    pub fn into_strategy(self) -> Box<dyn Strategy> {
        self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backtest_core::error::{BacktestError, DataError};
    use backtest_core::types::SignalType;
    use backtest_data::BarFeed;
    use backtest_strategies::SmaStrategy;

    fn feed(closes: &[f64]) -> BarFeed {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Bar::new(format!("2024-01-{:02}", i + 1), c, c, c, c, 100.0))
            .collect()
    }

    /// Claims one more bar than it can deliver.
    struct LyingSource {
        remaining: usize,
    }

    impl BarSource for LyingSource {
        fn has_next(&self) -> bool {
            true
        }

        fn get_next_bar(&mut self) -> Result<Bar, DataError> {
            if self.remaining == 0 {
                return Err(DataError::Exhausted);
            }
            self.remaining -= 1;
            Ok(Bar::new("t", 1.0, 1.0, 1.0, 1.0, 1.0))
        }
    }

    #[test]
    fn test_rising_scenario() {
        let mut source = feed(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let mut runner = BacktestRunner::new(&mut source, Box::new(SmaStrategy::new(2, 3)));

        let events = runner.run().unwrap();
        let signals: Vec<(SignalType, f64)> = events
            .iter()
            .map(|e| (e.signal.signal_type, e.signal.strength))
            .collect();

        assert_eq!(
            signals,
            vec![
                (SignalType::Hold, 0.0),
                (SignalType::Hold, 0.0),
                (SignalType::Buy, 1.0),
                (SignalType::Buy, 1.0),
                (SignalType::Buy, 1.0),
            ]
        );
        assert_eq!(events[2].signal.timestamp, events[2].bar.timestamp);
    }

    #[test]
    fn test_falling_scenario() {
        let mut source = feed(&[5.0, 4.0, 3.0, 2.0, 1.0]);
        let mut runner = BacktestRunner::new(&mut source, Box::new(SmaStrategy::new(2, 3)));

        let events = runner.run().unwrap();
        assert!(events[2..]
            .iter()
            .all(|e| e.signal == Signal::sell(e.bar.timestamp.clone())));
    }

    #[test]
    fn test_one_output_per_bar_in_order() {
        let closes: Vec<f64> = (0..37).map(|i| ((i * 7) % 11) as f64).collect();
        let mut source = feed(&closes);
        let expected: Vec<Bar> = source.bars().to_vec();

        let mut runner = BacktestRunner::new(&mut source, Box::new(SmaStrategy::new(3, 8)));
        let events = runner.run().unwrap();

        assert_eq!(events.len(), closes.len());
        let replayed: Vec<Bar> = events.into_iter().map(|e| e.bar).collect();
        assert_eq!(replayed, expected);
    }

    #[test]
    fn test_empty_source() {
        let mut source = BarFeed::default();
        let mut runner = BacktestRunner::new(&mut source, Box::new(SmaStrategy::new(2, 3)));

        assert!(runner.run().unwrap().is_empty());
        assert_eq!(runner.strategy().generate_signal(), Signal::default());
    }

    #[test]
    fn test_lying_source_surfaces_exhaustion() {
        let mut source = LyingSource { remaining: 2 };
        let mut runner = BacktestRunner::new(&mut source, Box::new(SmaStrategy::new(1, 1)));

        let err = runner.run().unwrap_err();
        assert!(matches!(err, BacktestError::Data(DataError::Exhausted)));
    }

    #[test]
    fn test_strategy_reuse_after_reset() {
        let mut source = feed(&[1.0, 2.0, 3.0, 4.0]);

        let first = {
            let mut runner = BacktestRunner::new(&mut source, Box::new(SmaStrategy::new(2, 3)));
            let events = runner.run().unwrap();
            let mut strategy = runner.into_strategy();
            strategy.reset();
            (events, strategy)
        };
        let (first_events, strategy) = first;

        source.reset();
        let mut runner = BacktestRunner::new(&mut source, strategy);
        let second_events = runner.run().unwrap();

        assert_eq!(first_events, second_events);
    }

    #[test]
    fn test_replay_from_csv() {
        let csv = "\
timestamp,open,high,low,close,volume
d1,5,5,5,5,10
d2,4,4,4,4,10
d3,3,3,3,3,10
d4,3,3,3,3,10
";
        let mut source = BarFeed::new(backtest_data::read_bars(csv.as_bytes()).unwrap());
        let mut runner = BacktestRunner::new(&mut source, Box::new(SmaStrategy::new(1, 2)));
        let events = runner.run().unwrap();

        let signals: Vec<Signal> = events.into_iter().map(|e| e.signal).collect();
        assert_eq!(
            signals,
            vec![
                Signal::hold("d1", 0.0),
                Signal::sell("d2"),
                Signal::sell("d3"),
                Signal::hold("d4", 0.5),
            ]
        );
    }
}
