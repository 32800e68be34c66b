//! Shape-to-shape distance.

use super::region::Region;
use num_traits::Float;

/// Minimum Euclidean distance between two regions.
///
/// This is the nearest-point distance over the filled areas, not a centroid
/// distance: zero when the regions overlap or touch, otherwise the smallest
/// edge-to-edge gap between any ring of `a` and any ring of `b`. A region
/// sitting inside a hole of the other is measured to that hole's boundary.
///
/// # Example
///
/// ```
/// use gapscan::polygon::{region_distance, Region};
/// use gapscan::Point2;
///
/// let a = Region::rectangle(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
/// let b = Region::rectangle(Point2::new(4.0, 5.0), Point2::new(6.0, 6.0));
/// assert_eq!(region_distance(&a, &b), 5.0);
/// ```
pub fn region_distance<F: Float>(a: &Region<F>, b: &Region<F>) -> F {
    let (bb_a, bb_b) = match (a.bounding_box(), b.bounding_box()) {
        (Some(bb_a), Some(bb_b)) => (bb_a, bb_b),
        _ => return F::infinity(),
    };

    // Containment is only possible when the boxes overlap.
    if bb_a.intersects(bb_b) && (overlaps_interior(a, b) || overlaps_interior(b, a)) {
        return F::zero();
    }

    let mut best = F::infinity();
    for ea in a.edges() {
        for eb in b.edges() {
            let d = ea.distance_to_segment(eb);
            if d < best {
                best = d;
                if best <= F::zero() {
                    return best;
                }
            }
        }
    }

    best
}

/// Tests whether some vertex of `inner` lies in the filled part of `outer`.
fn overlaps_interior<F: Float>(inner: &Region<F>, outer: &Region<F>) -> bool {
    inner
        .exterior
        .vertices
        .iter()
        .any(|&v| outer.contains(v))
}
