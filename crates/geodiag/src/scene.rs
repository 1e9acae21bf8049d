//! Arena holding every point, line and angle annotation of one diagram.

use nalgebra::Vector2;

use crate::angle::{AngleAnnotation, AngleId};
use crate::error::{DiagramError, Result};
use crate::line::{Line, LineId};
use crate::point::{LabeledPoint, PointId, PointRecord};

/// Diagram model. Entities are only ever added; ids stay valid for the
/// lifetime of the scene.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    points: Vec<PointRecord>,
    lines: Vec<Line>,
    angles: Vec<AngleAnnotation>,
}

impl Scene {
    pub fn add_point(&mut self, p: LabeledPoint) -> PointId {
        self.points.push(PointRecord::Labeled(p));
        PointId(self.points.len() - 1)
    }

    /// Unlabeled helper point at `location`.
    pub fn add_anonymous(&mut self, location: Vector2<f64>) -> PointId {
        self.points.push(PointRecord::Anonymous { location });
        PointId(self.points.len() - 1)
    }

    pub fn add_line(&mut self, line: Line) -> Result<LineId> {
        self.point(line.start)?;
        self.point(line.end)?;
        self.lines.push(line);
        Ok(LineId(self.lines.len() - 1))
    }

    pub fn add_angle(&mut self, ann: AngleAnnotation) -> Result<AngleId> {
        for id in [ann.origin, ann.start, ann.end] {
            self.point(id)?;
        }
        self.angles.push(ann);
        Ok(AngleId(self.angles.len() - 1))
    }

    pub fn point(&self, id: PointId) -> Result<&PointRecord> {
        self.points.get(id.0).ok_or(DiagramError::UnknownPoint(id))
    }

    pub fn line(&self, id: LineId) -> Result<&Line> {
        self.lines.get(id.0).ok_or(DiagramError::UnknownLine(id))
    }

    pub fn angle(&self, id: AngleId) -> Result<&AngleAnnotation> {
        self.angles.get(id.0).ok_or(DiagramError::UnknownAngle(id))
    }

    #[inline]
    pub fn location(&self, id: PointId) -> Result<Vector2<f64>> {
        self.point(id).map(PointRecord::location)
    }

    pub fn set_location(&mut self, id: PointId, v: Vector2<f64>) -> Result<()> {
        let rec = self
            .points
            .get_mut(id.0)
            .ok_or(DiagramError::UnknownPoint(id))?;
        rec.set_location(v);
        Ok(())
    }

    pub fn point_ids(&self) -> impl Iterator<Item = PointId> + '_ {
        (0..self.points.len()).map(PointId)
    }

    /// Ids of labeled points only (anonymous helpers are never drawn).
    pub fn labeled_point_ids(&self) -> Vec<PointId> {
        self.point_ids()
            .filter(|id| matches!(self.points[id.0], PointRecord::Labeled(_)))
            .collect()
    }
}
