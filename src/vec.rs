//! Planar vector math: Cartesian positions and polar (angle, length) impulses.
//!
//! Angles follow the screen convention used throughout the crate: angle 0
//! points "up" (towards decreasing y) and angles grow clockwise.

use crate::float::Float;
use core::ops::{Add, Sub};

/// 2D position or displacement in screen coordinates (y grows downwards).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Length (magnitude).
    pub fn length(self) -> F {
        F::hypot(self.x, self.y)
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

/// Polar vector: a heading and a (signed) magnitude.
///
/// Used for point velocities and spring impulses. A negative length points
/// the opposite way, which is how an impulse is cancelled.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polar<F: Float> {
    pub angle: F,
    pub length: F,
}

impl<F: Float> Polar<F> {
    pub fn new(angle: F, length: F) -> Self { Polar { angle, length } }

    /// Screen-space displacement this vector produces over one tick.
    pub fn to_displacement(self) -> Vec2<F> {
        Vec2::new(self.angle.sin() * self.length, -(self.angle.cos() * self.length))
    }
}

/// Sum two polar vectors.
///
/// Both are resolved into (sin, cos) components, summed, and converted back
/// with `atan2` so that the result keeps the "0 = up, clockwise" convention.
/// The returned length is never negative.
pub fn add_vectors<F: Float>(a: Polar<F>, b: Polar<F>) -> Polar<F> {
    let x = a.angle.sin() * a.length + b.angle.sin() * b.length;
    let y = a.angle.cos() * a.length + b.angle.cos() * b.length;

    Polar {
        angle: F::half_pi() - F::atan2(y, x),
        length: F::hypot(x, y),
    }
}

/// Euclidean distance between two positions.
pub fn distance<F: Float>(a: Vec2<F>, b: Vec2<F>) -> F {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn single_vector_keeps_its_heading() {
        let v = Polar::new(0.7f64, 3.0);
        let sum = add_vectors(v, Polar::new(0.0, 0.0));
        assert_abs_diff_eq!(sum.angle, 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(sum.length, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn opposite_vectors_cancel() {
        let a = Polar::new(0.0f64, 2.0);
        let b = Polar::new(core::f64::consts::PI, 2.0);
        assert_abs_diff_eq!(add_vectors(a, b).length, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn perpendicular_vectors_sum() {
        // up + right = up-right at 45 degrees clockwise
        let up = Polar::new(0.0f64, 1.0);
        let right = Polar::new(core::f64::consts::FRAC_PI_2, 1.0);
        let sum = add_vectors(up, right);
        assert_abs_diff_eq!(sum.angle, core::f64::consts::FRAC_PI_4, epsilon = 1e-12);
        assert_abs_diff_eq!(sum.length, core::f64::consts::SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn zero_heading_moves_up_the_screen() {
        let d = Polar::new(0.0f64, 2.0).to_displacement();
        assert_abs_diff_eq!(d.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d.y, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(3.0f32, 4.0);
        assert_abs_diff_eq!(distance(a, b), 5.0, epsilon = 1e-6);
    }
}
