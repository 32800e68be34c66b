//! Axis-aligned bounding box.

use crate::primitives::Point2;
use num_traits::Float;

/// Extent of a ring or region along both axes.
///
/// Used to rule out overlap between two islands before the more expensive
/// point-in-region tests run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    pub min: Point2<F>,
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Does not check that `min <= max`.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Tightest box around `points`, or `None` when there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), Self::grow))
    }

    /// This box enlarged to cover `p`.
    #[inline]
    pub fn grow(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// `true` when the boxes share at least one point, edges included.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        !(other.min.x > self.max.x
            || self.min.x > other.max.x
            || other.min.y > self.max.y
            || self.min.y > other.max.y)
    }
}
