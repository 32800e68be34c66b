//! 2D displacement vector.

use num_traits::Float;
use std::ops::Mul;

/// The offset from one point to another.
///
/// Only produced by subtracting points; it exists so that dot and cross
/// products read naturally in the segment and ring code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Perp-dot product. Positive when `other` turns counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, k: F) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products() {
        let east: Vec2<f64> = Vec2::new(2.0, 0.0);
        let north = Vec2::new(0.0, 3.0);
        assert_eq!(east.dot(north), 0.0);
        assert_eq!(east.cross(north), 6.0);
        assert_eq!(north.cross(east), -6.0);
        assert_eq!(Vec2::new(3.0, 4.0).magnitude_squared(), 25.0);
    }

    #[test]
    fn test_scale() {
        assert_eq!(Vec2::new(1.5, -2.0) * 2.0, Vec2::new(3.0, -4.0));
    }
}
