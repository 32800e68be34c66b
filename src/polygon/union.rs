//! Self-union of a polygon set.
//!
//! Every ring of every input region is fed into one overlay pass with a
//! non-zero fill rule, which merges overlapping or edge-touching regions into
//! single regions and splits the result into disjoint regions. The scan uses it
//! to build the merged outline of each copper island.
//!
//! The overlay itself is done by `i_overlay`, which snaps coordinates to an
//! integer grid internally. Output coordinates are therefore only as fine as
//! that grid, and clearances must not be measured on them.

use super::core::Polygon;
use super::region::Region;
use crate::error::ScanError;
use crate::primitives::Point2;
use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;

type Contour = Vec<[f64; 2]>;

/// Unions all regions into a set of pairwise disjoint regions.
///
/// Empty input yields an empty output. The order of the output is the
/// overlay's and carries no meaning.
///
/// # Errors
///
/// Returns [`ScanError::Geometry`] if any input coordinate is not finite or
/// the overlay produces a ring that cannot be a valid region boundary.
///
/// # Example
///
/// ```
/// use gapscan::polygon::{union_all, Region};
/// use gapscan::Point2;
///
/// let a = Region::rectangle(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0));
/// let b = Region::rectangle(Point2::new(1.0, 1.0), Point2::new(3.0, 3.0));
/// let far = Region::rectangle(Point2::new(10.0, 0.0), Point2::new(11.0, 1.0));
///
/// let merged = union_all(&[a, b, far]).unwrap();
/// assert_eq!(merged.len(), 2);
/// ```
pub fn union_all(regions: &[Region<f64>]) -> Result<Vec<Region<f64>>, ScanError> {
    if regions.is_empty() {
        return Ok(Vec::new());
    }

    let mut subject: Vec<Contour> = Vec::with_capacity(regions.len());
    for (index, region) in regions.iter().enumerate() {
        if !region.is_finite() {
            return Err(ScanError::Geometry(format!(
                "feature {} has a non-finite coordinate",
                index
            )));
        }
        let oriented = region.oriented();
        subject.extend(oriented.rings().map(to_contour));
    }

    let clip: Vec<Contour> = Vec::new();
    let shapes = subject.overlay(&clip, OverlayRule::Union, FillRule::NonZero);

    shapes
        .into_iter()
        .enumerate()
        .map(|(index, shape)| shape_to_region(index, shape))
        .collect()
}

fn to_contour(ring: &Polygon<f64>) -> Contour {
    ring.vertices.iter().map(|&p| p.into()).collect()
}

fn to_ring(contour: Contour) -> Polygon<f64> {
    Polygon::new(contour.into_iter().map(Point2::from).collect())
}

/// Converts one overlay shape (outer contour followed by holes) to a region.
fn shape_to_region(index: usize, shape: Vec<Contour>) -> Result<Region<f64>, ScanError> {
    let mut contours = shape.into_iter();
    let exterior = contours
        .next()
        .map(to_ring)
        .ok_or_else(|| ScanError::Geometry(format!("union shape {} has no contour", index)))?;

    let region = Region::new(exterior, contours.map(to_ring).collect());

    if region.rings().any(|r| r.len() < 3) {
        return Err(ScanError::Geometry(format!(
            "union shape {} has a ring with fewer than 3 vertices",
            index
        )));
    }
    if !region.is_finite() {
        return Err(ScanError::Geometry(format!(
            "union shape {} has a non-finite coordinate",
            index
        )));
    }

    Ok(region)
}
