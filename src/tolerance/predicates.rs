//! Orientation predicate.

use crate::primitives::Point2;
use num_traits::Float;

/// Turn direction of the path `a -> b -> c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Left turn.
    CounterClockwise,
    /// Right turn.
    Clockwise,
    /// No turn, within tolerance.
    Collinear,
}

/// Classifies the turn at `b` on the path `a -> b -> c`.
///
/// Works on twice the signed triangle area, `(b - a) x (c - a)`. Values whose
/// magnitude does not exceed `eps` are reported as collinear. With `eps = 0`
/// the result is the exact floating-point sign, which is what the segment
/// crossing tests use.
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let twice_area = (b - a).cross(c - a);

    if twice_area.abs() <= eps {
        Orientation::Collinear
    } else if twice_area > F::zero() {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}
