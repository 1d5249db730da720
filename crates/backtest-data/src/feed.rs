//! In-memory bar feed.

use backtest_core::error::DataError;
use backtest_core::traits::BarSource;
use backtest_core::types::Bar;
use std::path::Path;

use crate::csv_source::load_csv;

/// Ordered, rewindable bar source over a pre-loaded sequence.
#[derive(Debug, Clone, Default)]
pub struct BarFeed {
    bars: Vec<Bar>,
    position: usize,
}

impl BarFeed {
    /// Create a feed over bars in the order given.
    pub fn new(bars: Vec<Bar>) -> Self {
        Self { bars, position: 0 }
    }

    /// Load a feed from a CSV file.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, DataError> {
        load_csv(path).map(Self::new)
    }

    /// Rewind to the first bar.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Total number of bars, consumed or not.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Index of the next bar to be delivered.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }
}

impl From<Vec<Bar>> for BarFeed {
    fn from(bars: Vec<Bar>) -> Self {
        Self::new(bars)
    }
}

impl FromIterator<Bar> for BarFeed {
    fn from_iter<T: IntoIterator<Item = Bar>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl BarSource for BarFeed {
    fn has_next(&self) -> bool {
        self.position < self.bars.len()
    }

    fn get_next_bar(&mut self) -> Result<Bar, DataError> {
        let bar = self
            .bars
            .get(self.position)
            .cloned()
            .ok_or(DataError::Exhausted)?;
        self.position += 1;
        Ok(bar)
    }
}
