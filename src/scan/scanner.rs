//! Pairwise minimum-distance scan.
//!
//! Every unordered pair of islands `(i, j)` with `i < j` is visited exactly
//! once, in ascending `i` then ascending `j`. Each distance is rounded to the
//! run's [`Precision`] and counted in a [`DistanceHistogram`]. The cancellation
//! token is polled before every pair; a cancelled or failed scan returns no
//! histogram at all.

use super::cancel::CancellationToken;
use super::histogram::DistanceHistogram;
use super::normalize::NormalizedSet;
use super::progress::ProgressTracker;
use super::sample::{DistanceSample, Precision};
use crate::error::ScanError;

/// Result of a scan that ran to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// Every pair was measured.
    Completed(DistanceHistogram),
    /// Fewer than two islands, so there is nothing to measure.
    NoPairs,
}

/// Number of unordered pairs among `n` items, `n * (n - 1) / 2`.
#[inline]
pub fn pair_count(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        n * (n - 1) / 2
    }
}

/// Measures every pair of islands.
///
/// `progress` receives `0` before the first pair and then each new whole
/// percentage as pairs complete, ending at `100`. It is not called at all
/// when there are no pairs.
///
/// # Errors
///
/// - [`ScanError::Cancelled`] if `cancel` is set before any pair
/// - [`ScanError::Computation`] if a distance is not a finite non-negative number
///
/// # Example
///
/// ```
/// use gapscan::polygon::Region;
/// use gapscan::scan::{scan, CancellationToken, NormalizedSet, Precision, ScanOutcome};
/// use gapscan::Point2;
///
/// let set = NormalizedSet::from(vec![
///     Region::rectangle(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)),
///     Region::rectangle(Point2::new(3.0, 0.0), Point2::new(4.0, 1.0)),
/// ]);
///
/// let outcome = scan(&set, Precision::default(), &mut |_| {}, &CancellationToken::new()).unwrap();
/// match outcome {
///     ScanOutcome::Completed(histogram) => {
///         assert_eq!(histogram.minimum().unwrap().to_string(), "2.0000");
///     }
///     ScanOutcome::NoPairs => unreachable!(),
/// }
/// ```
pub fn scan(
    set: &NormalizedSet,
    precision: Precision,
    progress: &mut dyn FnMut(u8),
    cancel: &CancellationToken,
) -> Result<ScanOutcome, ScanError> {
    let islands = set.islands();
    let n = islands.len();
    if n < 2 {
        return Ok(ScanOutcome::NoPairs);
    }

    let mut tracker = ProgressTracker::new(pair_count(n));
    let mut histogram = DistanceHistogram::new(precision);
    progress(tracker.start());

    for i in 0..n {
        for j in (i + 1)..n {
            if cancel.is_cancelled() {
                return Err(ScanError::Cancelled);
            }

            let distance = islands[i].distance_to(&islands[j]);
            let sample = DistanceSample::from_distance(distance, precision).ok_or_else(|| {
                ScanError::Computation {
                    first: i,
                    second: j,
                    reason: format!("distance {} cannot be rounded", distance),
                }
            })?;
            histogram.record(sample);

            if let Some(percent) = tracker.advance() {
                progress(percent);
            }
        }
    }

    Ok(ScanOutcome::Completed(histogram))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::{Polygon, Region};
    use crate::primitives::Point2;

    fn square(x: f64, y: f64) -> Region<f64> {
        Region::rectangle(Point2::new(x, y), Point2::new(x + 1.0, y + 1.0))
    }

    fn row(n: usize) -> NormalizedSet {
        NormalizedSet::from((0..n).map(|i| square(i as f64 * 2.0, 0.0)).collect::<Vec<_>>())
    }

    fn pads_at(xs: impl IntoIterator<Item = f64>, y: f64) -> NormalizedSet {
        NormalizedSet::from(
            xs.into_iter()
                .map(|x| Region::rectangle(Point2::new(x, y), Point2::new(x + 1.0, y + 1.0)))
                .collect::<Vec<_>>(),
        )
    }

    fn scan_at(set: &NormalizedSet, digits: u8) -> DistanceHistogram {
        let precision = Precision::new(digits).unwrap();
        histogram(scan(set, precision, &mut |_| {}, &CancellationToken::new()).unwrap())
    }

    fn run(set: &NormalizedSet, cancel: &CancellationToken) -> (Result<ScanOutcome, ScanError>, Vec<u8>) {
        let mut seen = Vec::new();
        let result = scan(set, Precision::default(), &mut |p| seen.push(p), cancel);
        (result, seen)
    }

    fn histogram(outcome: ScanOutcome) -> DistanceHistogram {
        match outcome {
            ScanOutcome::Completed(h) => h,
            ScanOutcome::NoPairs => panic!("expected pairs"),
        }
    }

    #[test]
    fn test_pair_count() {
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(2), 1);
        assert_eq!(pair_count(5), 10);
        assert_eq!(pair_count(100), 4950);
    }

    #[test]
    fn test_every_pair_visited_once() {
        for n in [2usize, 5, 100] {
            let (result, _) = run(&row(n), &CancellationToken::new());
            assert_eq!(histogram(result.unwrap()).total(), pair_count(n), "n={}", n);
        }
    }

    #[test]
    fn test_fewer_than_two_is_no_pairs() {
        for n in [0usize, 1] {
            let (result, seen) = run(&row(n), &CancellationToken::new());
            assert_eq!(result.unwrap(), ScanOutcome::NoPairs);
            assert!(seen.is_empty());
        }
    }

    #[test]
    fn test_minimum_and_frequency() {
        // Gaps of 1 between neighbours, so four pairs tie at the minimum.
        let (result, _) = run(&row(5), &CancellationToken::new());
        let h = histogram(result.unwrap());
        let min = h.minimum().unwrap();
        assert_eq!(min.to_string(), "1.0000");
        assert_eq!(h.count(min), 4);
    }

    #[test]
    fn test_order_independent() {
        let regions = vec![
            square(0.0, 0.0),
            square(1.00007, 0.0),
            square(10.0, 0.0),
            square(0.0, 4.5),
            square(6.0, 6.0),
        ];
        let forward = NormalizedSet::from(regions.clone());
        let backward = NormalizedSet::from(regions.into_iter().rev().collect::<Vec<_>>());

        let a = histogram(run(&forward, &CancellationToken::new()).0.unwrap());
        let b = histogram(run(&backward, &CancellationToken::new()).0.unwrap());
        assert_eq!(a.minimum(), b.minimum());
        assert_eq!(a.count(a.minimum().unwrap()), b.count(b.minimum().unwrap()));
        assert_eq!(a.entries(), b.entries());
    }

    #[test]
    fn test_cancel_before_first_pair() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let (result, seen) = run(&row(5), &cancel);
        assert_eq!(result, Err(ScanError::Cancelled));
        assert!(seen.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_cancel_mid_scan_discards_everything() {
        let set = row(20);
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        let mut seen = Vec::new();
        let result = scan(
            &set,
            Precision::default(),
            &mut |p| {
                seen.push(p);
                if p >= 40 {
                    trigger.cancel();
                }
            },
            &cancel,
        );
        assert_eq!(result, Err(ScanError::Cancelled));
        assert!(seen.last().copied().unwrap_or(0) < 100);
    }

    #[test]
    fn test_progress_non_decreasing_and_ends_at_100() {
        let (result, seen) = run(&row(30), &CancellationToken::new());
        assert!(result.is_ok());
        assert_eq!(seen.first(), Some(&0));
        assert_eq!(seen.last(), Some(&100));
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert!(seen.iter().all(|&p| p <= 100));
    }

    #[test]
    fn test_empty_island_is_computation_error() {
        let set = NormalizedSet::from(vec![
            square(0.0, 0.0),
            Region::from_exterior(Polygon::empty()),
        ]);
        let (result, _) = run(&set, &CancellationToken::new());
        match result {
            Err(ScanError::Computation { first, second, .. }) => {
                assert_eq!((first, second), (0, 1));
            }
            other => panic!("expected computation error, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_gaps_far_from_origin_at_eight_digits() {
        // Ten 1.0-wide pads on a 1.2 pitch leave nine 0.2 gaps.
        let set = pads_at((0..10).map(|i| 123.4 + i as f64 * 1.2), 57.3);
        let h = scan_at(&set, 8);
        let min = h.minimum().unwrap();
        assert_eq!(min.to_string(), "0.20000000");
        assert_eq!(h.count(min), 9);
    }

    #[test]
    fn test_odd_gap_far_from_origin_at_eight_digits() {
        let set = pads_at([150.0, 151.0 + 0.123_456_78, 160.0], 92.0);
        let h = scan_at(&set, 8);
        let min = h.minimum().unwrap();
        assert_eq!(min.to_string(), "0.12345678");
        assert_eq!(h.count(min), 1);
    }

    #[test]
    fn test_tiny_gaps_at_ten_digits() {
        let gap = 1.23e-8;
        let set = pads_at([42.0, 43.0 + gap, 44.0 + 2.0 * gap, 50.0], 10.0);
        let h = scan_at(&set, 10);
        let min = h.minimum().unwrap();
        assert_eq!(min.to_string(), "0.0000000123");
        assert_eq!(h.count(min), 2);
    }
}
