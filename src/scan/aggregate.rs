//! Minimum and frequency extraction.

use std::fmt;

use super::histogram::DistanceHistogram;
use super::sample::DistanceSample;
use crate::config::Units;

/// The smallest clearance found and how many pairs share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimumDistance {
    pub value: DistanceSample,
    pub frequency: usize,
    pub units: Units,
}

impl MinimumDistance {
    /// The distance formatted at the scan precision, e.g. `"0.2000"`.
    pub fn value_string(&self) -> String {
        self.value.to_string()
    }

    pub fn frequency_string(&self) -> String {
        self.frequency.to_string()
    }
}

impl fmt::Display for MinimumDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (frequency {})",
            self.value, self.units, self.frequency
        )
    }
}

/// Reads the minimum and its count out of a finished histogram.
///
/// Returns `None` for an empty histogram.
pub fn aggregate(histogram: &DistanceHistogram, units: Units) -> Option<MinimumDistance> {
    let value = histogram.minimum()?;
    Some(MinimumDistance {
        value,
        frequency: histogram.count(value),
        units,
    })
}
