//! Points: labeled points and anonymous helper points.
//!
//! A point is referenced by `PointId`, an index into the owning `Scene`.
//! Lines and annotations never hold a location directly, so moving a point
//! is seen by every structure that references it.

use nalgebra::Vector2;

use crate::geom;

/// Default label offset along x (SVG `dx`).
pub const DEFAULT_OFFSET_X: &str = ".2em";
/// Default label offset along y (SVG `dy`).
pub const DEFAULT_OFFSET_Y: &str = "-.2em";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

/// A location with an optional text label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledPoint {
    pub location: Vector2<f64>,
    pub text: Option<String>,
    pub offset_x: String,
    pub offset_y: String,
}

impl LabeledPoint {
    /// Point at `(x, y)` with the default label offsets.
    pub fn new(x: f64, y: f64, text: Option<&str>) -> Self {
        Self {
            location: Vector2::new(x, y),
            text: text.map(str::to_owned),
            offset_x: DEFAULT_OFFSET_X.to_owned(),
            offset_y: DEFAULT_OFFSET_Y.to_owned(),
        }
    }

    /// Point at `length` along `angle` from the origin.
    pub fn from_polar(length: f64, angle: f64, text: Option<&str>) -> Self {
        let v = geom::from_polar(length, angle);
        Self::new(v.x, v.y, text)
    }

    pub fn with_offsets(mut self, dx: impl Into<String>, dy: impl Into<String>) -> Self {
        self.offset_x = dx.into();
        self.offset_y = dy.into();
        self
    }
}

/// Arena record behind a `PointId`.
#[derive(Clone, Debug, PartialEq)]
pub enum PointRecord {
    Labeled(LabeledPoint),
    /// Helper location that is never drawn, e.g. a reference ray for an angle.
    Anonymous { location: Vector2<f64> },
}

impl PointRecord {
    #[inline]
    pub fn location(&self) -> Vector2<f64> {
        match self {
            PointRecord::Labeled(p) => p.location,
            PointRecord::Anonymous { location } => *location,
        }
    }
    #[inline]
    pub fn set_location(&mut self, v: Vector2<f64>) {
        match self {
            PointRecord::Labeled(p) => p.location = v,
            PointRecord::Anonymous { location } => *location = v,
        }
    }
    pub fn text(&self) -> Option<&str> {
        match self {
            PointRecord::Labeled(p) => p.text.as_deref(),
            PointRecord::Anonymous { .. } => None,
        }
    }
    /// Label offsets; anonymous points fall back to the defaults.
    pub fn offsets(&self) -> (&str, &str) {
        match self {
            PointRecord::Labeled(p) => (&p.offset_x, &p.offset_y),
            PointRecord::Anonymous { .. } => (DEFAULT_OFFSET_X, DEFAULT_OFFSET_Y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn from_polar_places_point_on_ray() {
        let p = LabeledPoint::from_polar(2.0, FRAC_PI_2, Some("p"));
        assert!((p.location - Vector2::new(0.0, 2.0)).norm() < 1e-12);
        assert_eq!(p.text.as_deref(), Some("p"));
        assert_eq!(p.offset_x, DEFAULT_OFFSET_X);
        assert_eq!(p.offset_y, DEFAULT_OFFSET_Y);
    }

    #[test]
    fn anonymous_points_use_default_offsets() {
        let rec = PointRecord::Anonymous {
            location: Vector2::new(1.0, 1.0),
        };
        assert_eq!(rec.text(), None);
        assert_eq!(rec.offsets(), (DEFAULT_OFFSET_X, DEFAULT_OFFSET_Y));
    }
}
