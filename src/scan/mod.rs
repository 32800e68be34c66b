//! The minimum-clearance engine.
//!
//! [`normalize`] merges raw features into disjoint islands, [`scan`] measures
//! every pair of islands into a [`DistanceHistogram`], and [`aggregate`]
//! reads off the minimum and its frequency.
//!
//! # Example
//!
//! ```
//! use gapscan::config::Units;
//! use gapscan::polygon::Region;
//! use gapscan::scan::{aggregate, normalize, scan, CancellationToken, Precision, ScanOutcome};
//! use gapscan::source::Feature;
//! use gapscan::Point2;
//!
//! let features: Vec<Feature> = [0.0, 1.5, 5.0]
//!     .iter()
//!     .map(|&x| Feature::new("D11", Region::rectangle(Point2::new(x, 0.0), Point2::new(x + 1.0, 1.0))))
//!     .collect();
//!
//! let set = normalize(&features).unwrap();
//! let precision = Precision::new(3).unwrap();
//! if let ScanOutcome::Completed(histogram) =
//!     scan(&set, precision, &mut |_| {}, &CancellationToken::new()).unwrap()
//! {
//!     let min = aggregate(&histogram, Units::Millimetres).unwrap();
//!     assert_eq!(min.value_string(), "0.500");
//!     assert_eq!(min.frequency, 1);
//! }
//! ```

mod aggregate;
mod cancel;
mod histogram;
mod normalize;
mod progress;
mod sample;
mod scanner;

pub use aggregate::{aggregate, MinimumDistance};
pub use cancel::CancellationToken;
pub use histogram::DistanceHistogram;
pub use normalize::{normalize, Island, NormalizedSet};
pub use progress::ProgressTracker;
pub use sample::{DistanceSample, Precision};
pub use scanner::{pair_count, scan, ScanOutcome};
