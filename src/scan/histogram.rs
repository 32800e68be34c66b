//! Frequency histogram of rounded distances.

use std::collections::HashMap;

use super::sample::{DistanceSample, Precision};

/// Occurrence counts of every rounded distance seen during a scan, plus the
/// running minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceHistogram {
    precision: Precision,
    counts: HashMap<i64, usize>,
    minimum: Option<DistanceSample>,
    total: usize,
}

impl DistanceHistogram {
    /// Creates an empty histogram for samples of the given precision.
    pub fn new(precision: Precision) -> Self {
        Self {
            precision,
            counts: HashMap::new(),
            minimum: None,
            total: 0,
        }
    }

    /// Counts one sample and updates the running minimum.
    pub fn record(&mut self, sample: DistanceSample) {
        debug_assert_eq!(sample.precision(), self.precision);

        *self.counts.entry(sample.scaled()).or_insert(0) += 1;
        self.total += 1;

        if self.minimum.map_or(true, |m| sample < m) {
            self.minimum = Some(sample);
        }
    }

    /// How many times this rounded value was recorded.
    pub fn count(&self, sample: DistanceSample) -> usize {
        self.counts.get(&sample.scaled()).copied().unwrap_or(0)
    }

    /// Smallest recorded sample, if any.
    #[inline]
    pub fn minimum(&self) -> Option<DistanceSample> {
        self.minimum
    }

    /// Number of samples recorded.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct rounded values.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[inline]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// All (value, count) entries in ascending order of value.
    pub fn entries(&self) -> Vec<(DistanceSample, usize)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(&scaled, &count)| (DistanceSample::from_scaled(scaled, self.precision), count))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(d: f64) -> DistanceSample {
        DistanceSample::from_distance(d, Precision::default()).unwrap()
    }

    #[test]
    fn test_empty() {
        let h = DistanceHistogram::new(Precision::default());
        assert!(h.is_empty());
        assert_eq!(h.total(), 0);
        assert!(h.minimum().is_none());
        assert_eq!(h.count(sample(1.0)), 0);
    }

    #[test]
    fn test_counts_and_minimum() {
        let mut h = DistanceHistogram::new(Precision::default());
        for d in [2.0, 0.5, 3.0, 0.5, 2.0, 0.50001] {
            h.record(sample(d));
        }

        assert_eq!(h.total(), 6);
        assert_eq!(h.distinct(), 3);
        assert_eq!(h.minimum(), Some(sample(0.5)));
        // 0.50001 rounds to 0.5000 at four decimals
        assert_eq!(h.count(sample(0.5)), 3);
        assert_eq!(h.count(sample(2.0)), 2);
        assert_eq!(h.count(sample(3.0)), 1);
    }

    #[test]
    fn test_minimum_independent_of_insertion_order() {
        let values = [4.0, 1.5, 2.25, 1.5, 9.0];
        let mut forward = DistanceHistogram::new(Precision::default());
        let mut backward = DistanceHistogram::new(Precision::default());
        for &d in &values {
            forward.record(sample(d));
        }
        for &d in values.iter().rev() {
            backward.record(sample(d));
        }
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_entries_sorted() {
        let mut h = DistanceHistogram::new(Precision::default());
        for d in [3.0, 1.0, 2.0, 1.0] {
            h.record(sample(d));
        }
        let entries = h.entries();
        assert_eq!(
            entries,
            vec![(sample(1.0), 2), (sample(2.0), 1), (sample(3.0), 1)]
        );
    }
}
