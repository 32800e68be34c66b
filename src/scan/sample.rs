//! Fixed-precision distance samples.
//!
//! Every measured distance is rounded to the configured number of decimals
//! before it is compared or counted, so two pairs whose true distances agree
//! to that precision always land in the same histogram bucket.
//!
//! Rounding is half away from zero on `distance * 10^digits`, and the result
//! is kept as an integer count of `10^-digits` units. Equality, ordering, and
//! formatting all work on that integer, never on the float.

use std::cmp::Ordering;
use std::fmt;

use crate::error::ConfigError;

/// Number of decimal digits kept for each distance, in `2..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Precision(u8);

impl Precision {
    /// Smallest supported digit count.
    pub const MIN: u8 = 2;
    /// Largest supported digit count.
    pub const MAX: u8 = 10;

    /// Validates a digit count.
    pub fn new(digits: u8) -> Result<Self, ConfigError> {
        if (Self::MIN..=Self::MAX).contains(&digits) {
            Ok(Self(digits))
        } else {
            Err(ConfigError::PrecisionOutOfRange(digits))
        }
    }

    #[inline]
    pub fn digits(self) -> u8 {
        self.0
    }

    /// `10^digits` as a float multiplier.
    #[inline]
    pub fn scale(self) -> f64 {
        10f64.powi(i32::from(self.0))
    }

    #[inline]
    fn integer_scale(self) -> i64 {
        10i64.pow(u32::from(self.0))
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(4)
    }
}

/// A distance rounded to a [`Precision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DistanceSample {
    scaled: i64,
    precision: Precision,
}

impl DistanceSample {
    /// Rounds a measured distance.
    ///
    /// Returns `None` for negative or non-finite input, or when the value is
    /// too large to hold at this precision.
    pub fn from_distance(distance: f64, precision: Precision) -> Option<Self> {
        if !distance.is_finite() || distance < 0.0 {
            return None;
        }

        // f64::round rounds half away from zero.
        let scaled = (distance * precision.scale()).round();
        if scaled >= i64::MAX as f64 {
            return None;
        }

        Some(Self {
            scaled: scaled as i64,
            precision,
        })
    }

    #[inline]
    pub(crate) fn from_scaled(scaled: i64, precision: Precision) -> Self {
        Self { scaled, precision }
    }

    /// The distance as a count of `10^-digits` units.
    #[inline]
    pub fn scaled(self) -> i64 {
        self.scaled
    }

    #[inline]
    pub fn precision(self) -> Precision {
        self.precision
    }

    /// The rounded distance as a float.
    #[inline]
    pub fn value(self) -> f64 {
        self.scaled as f64 / self.precision.scale()
    }
}

impl PartialOrd for DistanceSample {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DistanceSample {
    /// Samples order by rounded value. Samples of different precision are
    /// never mixed within one scan; for them the tie-break is the precision.
    fn cmp(&self, other: &Self) -> Ordering {
        self.value()
            .total_cmp(&other.value())
            .then(self.scaled.cmp(&other.scaled))
            .then(self.precision.cmp(&other.precision))
    }
}

impl fmt::Display for DistanceSample {
    /// Formats with exactly `digits` decimals, e.g. `1.0001` at precision 4.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = self.precision.integer_scale();
        write!(
            f,
            "{}.{:0width$}",
            self.scaled / scale,
            self.scaled % scale,
            width = usize::from(self.precision.digits())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(digits: u8) -> Precision {
        Precision::new(digits).unwrap()
    }

    #[test]
    fn test_precision_range() {
        assert!(Precision::new(1).is_err());
        assert!(Precision::new(2).is_ok());
        assert!(Precision::new(10).is_ok());
        assert_eq!(Precision::new(11), Err(ConfigError::PrecisionOutOfRange(11)));
        assert_eq!(Precision::default().digits(), 4);
    }

    #[test]
    fn test_rounds_to_nearest() {
        let s = DistanceSample::from_distance(1.23456, p(4)).unwrap();
        assert_eq!(s.scaled(), 12346);
        assert_eq!(s.to_string(), "1.2346");

        let s = DistanceSample::from_distance(1.23454, p(4)).unwrap();
        assert_eq!(s.to_string(), "1.2345");
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // 0.125 and 2.5 are exact in binary, so these are true ties.
        assert_eq!(DistanceSample::from_distance(0.125, p(2)).unwrap().to_string(), "0.13");
        assert_eq!(DistanceSample::from_distance(2.5e-3, p(2)).unwrap().scaled(), 0);
        assert_eq!(DistanceSample::from_distance(0.375, p(2)).unwrap().to_string(), "0.38");
    }

    #[test]
    fn test_formatting_pads_decimals() {
        let s = DistanceSample::from_distance(2.0, p(6)).unwrap();
        assert_eq!(s.to_string(), "2.000000");

        let s = DistanceSample::from_distance(0.05, p(3)).unwrap();
        assert_eq!(s.to_string(), "0.050");

        let s = DistanceSample::from_distance(12.3, p(10)).unwrap();
        assert_eq!(s.to_string(), "12.3000000000");
    }

    #[test]
    fn test_rounding_is_idempotent() {
        for digits in Precision::MIN..=Precision::MAX {
            for &d in &[0.0, 0.1, 0.2, 1.00007, 3.14159265358979, 25.4, 1234.5678901] {
                let once = DistanceSample::from_distance(d, p(digits)).unwrap();
                let twice = DistanceSample::from_distance(once.value(), p(digits)).unwrap();
                assert_eq!(once, twice, "digits={} d={}", digits, d);
            }
        }
    }

    #[test]
    fn test_equal_distances_give_equal_samples() {
        let a = DistanceSample::from_distance(0.30000000000000004, p(4)).unwrap();
        let b = DistanceSample::from_distance(0.1 + 0.2, p(4)).unwrap();
        let c = DistanceSample::from_distance(0.3, p(4)).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(DistanceSample::from_distance(f64::NAN, p(4)).is_none());
        assert!(DistanceSample::from_distance(f64::INFINITY, p(4)).is_none());
        assert!(DistanceSample::from_distance(-1.0, p(4)).is_none());
        assert!(DistanceSample::from_distance(1e300, p(4)).is_none());
    }

    #[test]
    fn test_ordering() {
        let small = DistanceSample::from_distance(0.5, p(3)).unwrap();
        let large = DistanceSample::from_distance(0.75, p(3)).unwrap();
        assert!(small < large);
        assert_eq!(small.min(large), small);
    }
}
