//! Polygon validation.
//!
//! A region is valid when every ring is a simple closed curve with real area,
//! the rings do not cross each other, and every hole sits inside the exterior.
//!
//! # Example
//!
//! ```
//! use gapscan::{Point2, polygon::{Polygon, Region, is_valid}};
//!
//! // A figure-8 ring crosses itself
//! let figure8 = Region::from_exterior(Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(0.0, 2.0),
//! ]));
//! assert!(!is_valid(&figure8, 1e-12));
//!
//! let square = Region::rectangle(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
//! assert!(is_valid(&square, 1e-12));
//! ```

use super::core::Polygon;
use super::region::Region;
use crate::primitives::Point2;
use num_traits::Float;

/// Result of region validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the region is valid (no issues found).
    pub is_valid: bool,
    /// Some ring has fewer than 3 vertices.
    pub is_degenerate: bool,
    /// Some coordinate is NaN or infinite.
    pub has_non_finite: bool,
    /// The net area is not above the tolerance.
    pub has_zero_area: bool,
    /// Some ring crosses itself.
    pub has_self_intersections: bool,
    /// Two different rings cross each other.
    pub has_ring_crossings: bool,
    /// Some hole lies outside the exterior.
    pub has_stray_holes: bool,
}

/// Checks if a ring has any self-intersections.
///
/// Returns true if any non-adjacent edges cross each other.
pub fn has_self_intersection<F: Float>(ring: &Polygon<F>) -> bool {
    let n = ring.vertices.len();
    if n < 4 {
        return false; // Need at least 4 vertices for self-intersection
    }

    for i in 0..n {
        let a1 = ring.vertices[i];
        let a2 = ring.vertices[(i + 1) % n];

        for j in (i + 2)..n {
            let j_next = (j + 1) % n;
            if j_next == i {
                continue;
            }

            if segments_properly_intersect(a1, a2, ring.vertices[j], ring.vertices[j_next]) {
                return true;
            }
        }
    }

    false
}

/// Checks whether any edge of `a` properly crosses an edge of `b`.
pub fn rings_cross<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> bool {
    a.edges().any(|ea| {
        b.edges()
            .any(|eb| segments_properly_intersect(ea.start, ea.end, eb.start, eb.end))
    })
}

/// Validates a region and returns detailed information about any issues.
pub fn validate<F: Float>(region: &Region<F>, tolerance: F) -> ValidationResult {
    let is_degenerate = region.rings().any(|r| r.len() < 3);
    let has_non_finite = !region.is_finite();

    // Area and crossing tests are meaningless on broken coordinates.
    if is_degenerate || has_non_finite {
        return ValidationResult {
            is_valid: false,
            is_degenerate,
            has_non_finite,
            has_zero_area: true,
            has_self_intersections: false,
            has_ring_crossings: false,
            has_stray_holes: false,
        };
    }

    let has_zero_area = region.area() <= tolerance;
    let has_self_intersections = region.rings().any(has_self_intersection);

    let rings: Vec<&Polygon<F>> = region.rings().collect();
    let has_ring_crossings = (0..rings.len())
        .any(|i| ((i + 1)..rings.len()).any(|j| rings_cross(rings[i], rings[j])));

    let has_stray_holes = region
        .holes
        .iter()
        .any(|h| !h.vertices.iter().any(|&v| region.exterior.contains(v)));

    let is_valid =
        !has_zero_area && !has_self_intersections && !has_ring_crossings && !has_stray_holes;

    ValidationResult {
        is_valid,
        is_degenerate,
        has_non_finite,
        has_zero_area,
        has_self_intersections,
        has_ring_crossings,
        has_stray_holes,
    }
}

/// Checks if a region is valid (no self-intersections, degeneracies, etc.).
pub fn is_valid<F: Float>(region: &Region<F>, tolerance: F) -> bool {
    validate(region, tolerance).is_valid
}

/// Checks if two segments properly intersect (cross each other).
fn segments_properly_intersect<F: Float>(
    a1: Point2<F>,
    a2: Point2<F>,
    b1: Point2<F>,
    b2: Point2<F>,
) -> bool {
    let d1 = (b2 - b1).cross(a1 - b1);
    let d2 = (b2 - b1).cross(a2 - b1);
    let d3 = (a2 - a1).cross(b1 - a1);
    let d4 = (a2 - a1).cross(b2 - a1);

    // Proper intersection requires opposite signs
    d1 * d2 < F::zero() && d3 * d4 < F::zero()
}
