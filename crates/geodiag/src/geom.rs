//! Vector helpers and the affine map used by the graph mapper.
//!
//! - Angles are radians, measured from the positive x-axis, anticlockwise.
//! - `Affine2`: `x ↦ M x + t` with an explicit inverse.

use nalgebra::{Matrix2, Vector2};

/// Below this length a direction vector is treated as zero (angle undefined).
pub const EPS_LEN: f64 = 1e-12;

/// Angle of `v` from the positive x-axis in `(-π, π]`. The zero vector maps to 0.
#[inline]
pub fn angle_of(v: Vector2<f64>) -> f64 {
    v.y.atan2(v.x)
}

/// Vector of length `length` at `angle` from the positive x-axis.
#[inline]
pub fn from_polar(length: f64, angle: f64) -> Vector2<f64> {
    Vector2::new(length * angle.cos(), length * angle.sin())
}

/// Signed angle from `a` to `b` in `(-π, π]`, anticlockwise positive.
///
/// Uses `atan2(a × b, a · b)` so both sign and quadrant survive; degenerate
/// inputs (either vector zero) give 0.
#[inline]
pub fn signed_angle(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let cross = a.x * b.y - a.y * b.x;
    let dot = a.dot(&b);
    cross.atan2(dot)
}

#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (b - a).norm()
}

/// Replace a non-finite value by `fallback`.
#[inline]
pub fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        fallback
    }
}

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }
    /// Axis-aligned scale followed by a translation.
    #[inline]
    pub fn scale_translate(sx: f64, sy: f64, t: Vector2<f64>) -> Self {
        Self {
            m: Matrix2::new(sx, 0.0, 0.0, sy),
            t,
        }
    }
    #[inline]
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.m * p + self.t
    }
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn signed_angle_quadrants() {
        let x = vector![1.0, 0.0];
        assert!((signed_angle(x, vector![0.0, 1.0]) - FRAC_PI_2).abs() < 1e-12);
        assert!((signed_angle(x, vector![0.0, -1.0]) + FRAC_PI_2).abs() < 1e-12);
        assert!((signed_angle(x, vector![-1.0, 0.0]) - PI).abs() < 1e-12);
        // -135°: the sign is lost by acos(dot).
        assert!((signed_angle(x, vector![-1.0, -1.0]) + 3.0 * PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn zero_vectors_are_finite() {
        let z = Vector2::zeros();
        assert_eq!(angle_of(z), 0.0);
        assert_eq!(signed_angle(z, vector![1.0, 2.0]), 0.0);
        assert_eq!(from_polar(0.0, 1.3), Vector2::zeros());
    }

    #[test]
    fn affine_inverse_roundtrips() {
        let f = Affine2::scale_translate(40.0, -40.0, vector![20.0, 380.0]);
        let inv = f.inverse().unwrap();
        let p = vector![5.0, 4.0];
        assert!((inv.apply(f.apply(p)) - p).norm() < 1e-12);
        assert!(Affine2::scale_translate(0.0, 1.0, Vector2::zeros())
            .inverse()
            .is_none());
    }
}
