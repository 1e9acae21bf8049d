//! Angle annotations derived from three arena points.
//!
//! Nothing here is cached: every call reads the current point locations, so
//! the values follow a line while it is being dragged.

use crate::error::Result;
use crate::geom;
use crate::point::{LabeledPoint, PointId};
use crate::scene::Scene;

/// Distance of the label from the origin, in logical units.
pub const LABEL_RADIUS: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AngleId(pub usize);

/// Angle at `origin` from the ray towards `start` to the ray towards `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AngleAnnotation {
    pub origin: PointId,
    pub start: PointId,
    pub end: PointId,
}

impl AngleAnnotation {
    pub fn new(origin: PointId, start: PointId, end: PointId) -> Self {
        Self { origin, start, end }
    }

    /// Signed angle in `(-π, π]`, anticlockwise positive.
    pub fn angle(&self, scene: &Scene) -> Result<f64> {
        let o = scene.location(self.origin)?;
        let oa = scene.location(self.start)? - o;
        let oc = scene.location(self.end)? - o;
        Ok(geom::signed_angle(oa, oc))
    }

    /// Direction of the start ray from the positive x-axis.
    pub fn angle_start(&self, scene: &Scene) -> Result<f64> {
        let o = scene.location(self.origin)?;
        Ok(geom::angle_of(scene.location(self.start)? - o))
    }

    /// Label on the bisector of the angle, text in whole degrees.
    pub fn label(&self, scene: &Scene) -> Result<LabeledPoint> {
        let angle = geom::finite_or(self.angle(scene)?, 0.0);
        let start = geom::finite_or(self.angle_start(scene)?, 0.0);
        let o = scene.location(self.origin)?;
        let p = o + geom::from_polar(LABEL_RADIUS, start + angle / 2.0);
        Ok(LabeledPoint::new(p.x, p.y, Some(degrees_text(angle).as_str())).with_offsets("0", "0"))
    }
}

/// `angle` (radians) as rounded degrees with a degree sign.
pub fn degrees_text(angle: f64) -> String {
    let deg = geom::finite_or(angle.to_degrees().round(), 0.0);
    // Avoid "-0°" for tiny negative angles.
    let deg = if deg == 0.0 { 0.0 } else { deg };
    format!("{deg:.0}°")
}
