//! Polygons with holes.

use super::core::Polygon;
use crate::bounds::Aabb2;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// One connected area of copper: an exterior ring minus zero or more holes.
///
/// Gerber solids and the islands produced by normalization both take this
/// shape. Ring orientation is not significant; [`Region::oriented`] gives the
/// canonical CCW exterior / CW holes form when it matters.
#[derive(Debug, Clone, PartialEq)]
pub struct Region<F> {
    /// Outer boundary.
    pub exterior: Polygon<F>,
    /// Cut-outs inside the exterior.
    pub holes: Vec<Polygon<F>>,
}

impl<F: Float> Region<F> {
    /// Creates a region from an exterior ring and its holes.
    #[inline]
    pub fn new(exterior: Polygon<F>, holes: Vec<Polygon<F>>) -> Self {
        Self { exterior, holes }
    }

    /// Creates a region without holes.
    #[inline]
    pub fn from_exterior(exterior: Polygon<F>) -> Self {
        Self::new(exterior, Vec::new())
    }

    /// Creates an axis-aligned rectangular region.
    #[inline]
    pub fn rectangle(min: Point2<F>, max: Point2<F>) -> Self {
        Self::from_exterior(Polygon::rectangle(min, max))
    }

    /// Net area: exterior area minus hole areas.
    pub fn area(&self) -> F {
        self.holes
            .iter()
            .fold(self.exterior.area(), |acc, hole| acc - hole.area())
    }

    /// Tests if a point lies in the filled part of the region.
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.exterior.contains(point) && !self.holes.iter().any(|h| h.contains(point))
    }

    /// Bounding box of the exterior ring.
    #[inline]
    pub fn bounding_box(&self) -> Option<Aabb2<F>> {
        self.exterior.bounding_box()
    }

    /// Iterates over the exterior ring followed by every hole.
    pub fn rings(&self) -> impl Iterator<Item = &Polygon<F>> + '_ {
        std::iter::once(&self.exterior).chain(self.holes.iter())
    }

    /// Iterates over the edges of every ring.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        self.rings().flat_map(|ring| ring.edges())
    }

    pub fn is_finite(&self) -> bool {
        self.rings().all(Polygon::is_finite)
    }

    /// Returns a copy with a CCW exterior and CW holes.
    pub fn oriented(&self) -> Self {
        let mut exterior = self.exterior.clone();
        exterior.ensure_ccw();
        let holes = self
            .holes
            .iter()
            .map(|h| {
                let mut hole = h.clone();
                hole.ensure_cw();
                hole
            })
            .collect();
        Self { exterior, holes }
    }
}

impl<F: Float> From<Polygon<F>> for Region<F> {
    fn from(exterior: Polygon<F>) -> Self {
        Self::from_exterior(exterior)
    }
}
