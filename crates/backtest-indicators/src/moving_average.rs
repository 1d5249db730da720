//! Moving average indicators.

use std::collections::VecDeque;

/// Sliding-window simple moving average with an incremental sum.
///
/// Holds at most `window` of the most recent values. Each push adds the new
/// value to the running sum and subtracts any evicted value, so updates are
/// O(1) amortized.
///
/// The sum is rebuilt from the retained values whenever subtraction cannot
/// be trusted: the evicted value or the sum is not finite, the eviction
/// cancels most of the sum, or `window` evictions have passed since the last
/// rebuild. The mean therefore depends only on the retained values.
#[derive(Debug, Clone)]
pub struct MovingAverageTracker {
    window: usize,
    values: VecDeque<f64>,
    sum: f64,
    evictions: usize,
}

impl MovingAverageTracker {
    /// Create a tracker over the last `window` values.
    ///
    /// A window of 0 is accepted: the tracker never retains a value, always
    /// reports full, and its mean is 0.0.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            values: VecDeque::with_capacity(window.saturating_add(1)),
            sum: 0.0,
            evictions: 0,
        }
    }

    /// Append a value, evicting the oldest one once the window overflows.
    pub fn push(&mut self, price: f64) {
        self.values.push_back(price);
        self.sum += price;

        if self.values.len() > self.window {
            if let Some(oldest) = self.values.pop_front() {
                self.evictions += 1;
                let remaining = self.sum - oldest;

                if !oldest.is_finite()
                    || !remaining.is_finite()
                    || remaining.abs() < oldest.abs()
                    || self.evictions >= self.window
                {
                    self.resum();
                } else {
                    self.sum = remaining;
                }
            }
        }
    }

    fn resum(&mut self) {
        self.sum = self.values.iter().sum();
        self.evictions = 0;
    }

    /// Arithmetic mean of the retained values, or 0.0 when empty.
    ///
    /// The 0.0 is a placeholder, not an average; check `is_full` (or at least
    /// `is_empty`) before treating the result as meaningful.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            self.sum / self.values.len() as f64
        }
    }

    /// True once `window` values are retained.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.values.len() == self.window
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn window(&self) -> usize {
        self.window
    }

    /// Drop all retained values.
    pub fn reset(&mut self) {
        self.values.clear();
        self.sum = 0.0;
        self.evictions = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_tracker() {
        let tracker = MovingAverageTracker::new(3);
        assert!(tracker.is_empty());
        assert!(!tracker.is_full());
        assert_eq!(tracker.mean(), 0.0);
    }

    #[test]
    fn test_warmup_mean_uses_partial_window() {
        let mut tracker = MovingAverageTracker::new(3);
        tracker.push(1.0);
        tracker.push(2.0);

        assert_eq!(tracker.len(), 2);
        assert!(!tracker.is_full());
        assert_eq!(tracker.mean(), 1.5);
    }

    #[test]
    fn test_sliding_window() {
        let mut tracker = MovingAverageTracker::new(3);
        for price in [1.0, 2.0, 3.0, 4.0, 5.0] {
            tracker.push(price);
        }

        assert_eq!(tracker.len(), 3);
        assert!(tracker.is_full());
        assert_eq!(tracker.mean(), 4.0); // (3+4+5)/3
    }

    #[test]
    fn test_zero_window() {
        let mut tracker = MovingAverageTracker::new(0);
        assert!(tracker.is_full());

        tracker.push(42.0);
        assert!(tracker.is_empty());
        assert!(tracker.is_full());
        assert_eq!(tracker.mean(), 0.0);
    }

    #[test]
    fn test_nan_accepted() {
        let mut tracker = MovingAverageTracker::new(2);
        tracker.push(f64::NAN);
        tracker.push(1.0);
        assert!(tracker.mean().is_nan());
    }

    #[test]
    fn test_nan_leaves_window() {
        let mut tracker = MovingAverageTracker::new(2);
        for price in [f64::NAN, 1.0, 2.0] {
            tracker.push(price);
        }
        assert_eq!(tracker.mean(), 1.5);

        tracker.push(3.0);
        tracker.push(4.0);
        assert_eq!(tracker.mean(), 3.5);
    }

    #[test]
    fn test_infinity_leaves_window() {
        let mut tracker = MovingAverageTracker::new(2);
        for price in [f64::INFINITY, 1.0, 2.0, 3.0] {
            tracker.push(price);
        }
        assert_eq!(tracker.mean(), 2.5);

        let mut tracker = MovingAverageTracker::new(2);
        for price in [f64::INFINITY, f64::NEG_INFINITY, 5.0, 7.0] {
            tracker.push(price);
        }
        assert_eq!(tracker.mean(), 6.0);
    }

    #[test]
    fn test_large_value_does_not_linger() {
        let mut tracker = MovingAverageTracker::new(2);
        tracker.push(1e16);
        tracker.push(1.0);

        for _ in 0..3 {
            tracker.push(1.0);
            assert_eq!(tracker.mean(), 1.0);
        }
    }

    #[test]
    fn test_reset() {
        let mut tracker = MovingAverageTracker::new(2);
        tracker.push(10.0);
        tracker.push(20.0);
        assert!(tracker.is_full());

        tracker.reset();
        assert!(tracker.is_empty());
        assert_eq!(tracker.mean(), 0.0);

        tracker.push(4.0);
        assert_eq!(tracker.mean(), 4.0);
    }

    proptest! {
        // Integer-valued prices keep every partial sum exact, so the
        // incremental mean must match a fresh re-sum bit for bit.
        #[test]
        fn test_mean_depends_only_on_last_window(
            prices in prop::collection::vec(-1_000_000i32..1_000_000, 1..200),
            window in 1usize..20,
        ) {
            let mut tracker = MovingAverageTracker::new(window);
            for &price in &prices {
                tracker.push(price as f64);
            }

            let tail = &prices[prices.len().saturating_sub(window)..];
            let expected = tail.iter().map(|&p| p as f64).sum::<f64>() / tail.len() as f64;

            prop_assert_eq!(tracker.len(), tail.len());
            prop_assert!(tracker.len() <= window);
            prop_assert_eq!(tracker.mean(), expected);
        }

        // Fractional prices with occasional spikes. Rounding differs from a
        // fresh re-sum, but error from evicted values must not carry over.
        #[test]
        fn test_mean_tracks_fresh_sum_with_spikes(
            prices in prop::collection::vec(
                prop_oneof![
                    8 => 0.01f64..1_000.0,
                    1 => 1e12f64..1e16,
                ],
                1..200,
            ),
            window in 1usize..20,
        ) {
            let mut tracker = MovingAverageTracker::new(window);
            for &price in &prices {
                tracker.push(price);
            }

            let tail = &prices[prices.len().saturating_sub(window)..];
            let expected = tail.iter().sum::<f64>() / tail.len() as f64;

            prop_assert_eq!(tracker.len(), tail.len());
            prop_assert!(
                (tracker.mean() - expected).abs() <= expected.abs() * 1e-6,
                "mean {} expected {}",
                tracker.mean(),
                expected
            );
        }
    }
}
