//! Polygon rings, regions with holes, and the operations the clearance scan needs.
//!
//! This module provides:
//! - Area and point containment for rings and regions
//! - Region validation (simple rings, real area, holes inside the exterior)
//! - Self-union of a region set into disjoint islands
//! - Nearest-point distance between two regions
//!
//! # Example
//!
//! ```
//! use gapscan::polygon::{region_distance, union_all, Region};
//! use gapscan::Point2;
//!
//! // Two overlapping pads and one pad off to the side
//! let pads = vec![
//!     Region::rectangle(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0)),
//!     Region::rectangle(Point2::new(1.0, 1.0), Point2::new(3.0, 3.0)),
//!     Region::rectangle(Point2::new(5.0, 0.0), Point2::new(6.0, 1.0)),
//! ];
//!
//! let islands = union_all(&pads).unwrap();
//! assert_eq!(islands.len(), 2);
//!
//! let gap = region_distance(&islands[0], &islands[1]);
//! assert!((gap - 2.0).abs() < 1e-6);
//! ```

mod core;
mod distance;
mod region;
mod union;
mod validate;

pub use core::{polygon_area, polygon_contains, polygon_signed_area, Polygon};
pub use distance::region_distance;
pub use region::Region;
pub use union::union_all;
pub use validate::{has_self_intersection, is_valid, rings_cross, validate, ValidationResult};
