//! 2D line segment type.

use super::{Point2, Vec2};
use crate::tolerance::{orient2d, Orientation};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Polygon edges are handed around as segments, so this is where the
/// edge-to-edge clearance between two copper islands is measured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the point at parameter `t` along the segment.
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Computes the closest point on the segment to the given point.
    ///
    /// Returns a tuple of (closest_point, parameter_t) where t is in [0, 1].
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();

        // Degenerate segment (start == end)
        if len_sq <= F::epsilon() {
            return (self.start, F::zero());
        }

        let t = (p - self.start).dot(v) / len_sq;
        let t_clamped = t.max(F::zero()).min(F::one());

        (self.point_at(t_clamped), t_clamped)
    }

    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance_squared(closest)
    }

    /// Returns `true` if the two closed segments share at least one point.
    ///
    /// Uses exact orientation signs, so touching endpoints and collinear
    /// overlaps both count.
    pub fn intersects(self, other: Self) -> bool {
        let zero = F::zero();
        let o1 = orient2d(self.start, self.end, other.start, zero);
        let o2 = orient2d(self.start, self.end, other.end, zero);
        let o3 = orient2d(other.start, other.end, self.start, zero);
        let o4 = orient2d(other.start, other.end, self.end, zero);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        (o1 == Orientation::Collinear && self.spans(other.start))
            || (o2 == Orientation::Collinear && self.spans(other.end))
            || (o3 == Orientation::Collinear && other.spans(self.start))
            || (o4 == Orientation::Collinear && other.spans(self.end))
    }

    /// Minimum Euclidean distance between any point of `self` and any point of `other`.
    ///
    /// Zero when the segments touch or cross. Otherwise the minimum is always
    /// attained at an endpoint of one of the two segments.
    pub fn distance_to_segment(self, other: Self) -> F {
        if self.intersects(other) {
            return F::zero();
        }

        self.distance_squared_to_point(other.start)
            .min(self.distance_squared_to_point(other.end))
            .min(other.distance_squared_to_point(self.start))
            .min(other.distance_squared_to_point(self.end))
            .sqrt()
    }

    /// For a point already known to be collinear, tests whether it lies
    /// within the segment's extent.
    #[inline]
    fn spans(self, p: Point2<F>) -> bool {
        p.x >= self.start.x.min(self.end.x)
            && p.x <= self.start.x.max(self.end.x)
            && p.y >= self.start.y.min(self.end.y)
            && p.y <= self.start.y.max(self.end.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment2<f64> {
        Segment2::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    #[test]
    fn test_closest_point_on_segment() {
        let s = seg(0.0, 0.0, 10.0, 0.0);

        let (closest1, t1) = s.closest_point(Point2::new(5.0, 5.0));
        assert_relative_eq!(closest1.x, 5.0, epsilon = 1e-10);
        assert_relative_eq!(closest1.y, 0.0, epsilon = 1e-10);
        assert_relative_eq!(t1, 0.5, epsilon = 1e-10);

        // Beyond start
        let (closest2, t2) = s.closest_point(Point2::new(-5.0, 0.0));
        assert_relative_eq!(closest2.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(t2, 0.0, epsilon = 1e-10);

        // Beyond end
        let (closest3, t3) = s.closest_point(Point2::new(15.0, 0.0));
        assert_relative_eq!(closest3.x, 10.0, epsilon = 1e-10);
        assert_relative_eq!(t3, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_distance_squared_to_point() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert_relative_eq!(s.distance_squared_to_point(Point2::new(5.0, 3.0)), 9.0, epsilon = 1e-10);
        assert_relative_eq!(s.distance_squared_to_point(Point2::new(13.0, 4.0)), 25.0, epsilon = 1e-10);
    }

    #[test]
    fn test_degenerate_closest_point() {
        let s = seg(5.0, 5.0, 5.0, 5.0);
        let (closest, t) = s.closest_point(Point2::new(0.0, 0.0));
        assert_eq!(closest, Point2::new(5.0, 5.0));
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_intersects_crossing() {
        let a = seg(0.0, 0.0, 2.0, 2.0);
        let b = seg(0.0, 2.0, 2.0, 0.0);
        assert!(a.intersects(b));
        assert_eq!(a.distance_to_segment(b), 0.0);
    }

    #[test]
    fn test_intersects_touching_endpoint() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(1.0, 0.0, 1.0, 1.0);
        assert!(a.intersects(b));
    }

    #[test]
    fn test_intersects_collinear_overlap() {
        let a = seg(0.0, 0.0, 2.0, 0.0);
        let b = seg(1.0, 0.0, 3.0, 0.0);
        assert!(a.intersects(b));

        let c = seg(2.5, 0.0, 3.0, 0.0);
        assert!(!a.intersects(c));
        assert_relative_eq!(a.distance_to_segment(c), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_parallel_segments() {
        let a = seg(0.0, 0.0, 4.0, 0.0);
        let b = seg(1.0, 0.75, 3.0, 0.75);
        assert_relative_eq!(a.distance_to_segment(b), 0.75, epsilon = 1e-12);
        assert_relative_eq!(b.distance_to_segment(a), 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_skew_segments() {
        // Closest approach is corner (1, 1) to corner (4, 5)
        let a = seg(0.0, 0.0, 1.0, 1.0);
        let b = seg(4.0, 5.0, 6.0, 9.0);
        assert_relative_eq!(a.distance_to_segment(b), 5.0, epsilon = 1e-12);
    }
}
