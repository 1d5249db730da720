//! Bar source trait definitions.

use crate::error::DataError;
use crate::types::Bar;

/// An ordered, single-pass supply of bars.
///
/// Implementations deliver bars in nondecreasing timestamp order matching
/// the underlying data; consumers perform no sorting or deduplication.
pub trait BarSource {
    /// Check whether at least one more bar is available.
    fn has_next(&self) -> bool;

    /// Return the next bar and advance.
    ///
    /// # Errors
    /// Returns [`DataError::Exhausted`] when called while `has_next()` is false.
    fn get_next_bar(&mut self) -> Result<Bar, DataError>;
}
