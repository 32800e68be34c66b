//! gapscan - Minimum clearance between copper features
//!
//! Finds the smallest gap between any two separate copper shapes on a layer,
//! and how many pairs share it. The smallest gap bounds the largest tool that
//! can still isolate every feature.
//!
//! Raw shapes are pulled from a source's aperture table, merged into disjoint
//! islands by a zero-distance self-union, and every pair of islands is
//! measured at a fixed decimal precision. A [`job::ScanJob`] runs the whole
//! pipeline as one cancellable unit with progress and status reporting.

pub mod bounds;
pub mod config;
pub mod error;
pub mod job;
pub mod polygon;
pub mod primitives;
pub mod scan;
pub mod source;
pub mod tolerance;

pub use config::{ScanConfig, Units};
pub use error::{ConfigError, ScanError};
pub use job::{ScanJob, ScanObserver, ScanReport, ScanResult};
pub use primitives::{Point2, Segment2, Vec2};
pub use scan::{CancellationToken, DistanceSample, MinimumDistance, Precision};
pub use tolerance::{orient2d, Orientation};
