//! A graph together with the scene drawn on it.

use nalgebra::Vector2;

use crate::draw::LINE_SEL;
use crate::error::{DiagramError, Result};
use crate::graph::Graph;
use crate::line::LineId;
use crate::rotate::{self, DragEvent};
use crate::scene::Scene;
use crate::svg::DatumKey;

/// Pixel distance within which a pointer press grabs a line.
pub const PICK_TOLERANCE: f64 = 6.0;

#[derive(Debug)]
pub struct Diagram {
    pub graph: Graph,
    pub scene: Scene,
}

impl Diagram {
    pub fn new(graph: Graph, scene: Scene) -> Self {
        Self { graph, scene }
    }

    /// Lines that currently carry a rotation handler, in document order.
    pub fn rotatable_lines(&self) -> Vec<LineId> {
        self.graph
            .surface()
            .select(LINE_SEL)
            .filter(|el| el.handler().is_some())
            .filter_map(|el| match el.key() {
                DatumKey::Line(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn dispatch(&mut self, line: LineId, event: DragEvent) -> Result<()> {
        rotate::dispatch_drag(&mut self.graph, &mut self.scene, line, event)
    }

    /// Press at `px`: starts a drag on the rotatable line under the pointer.
    ///
    /// `Ok(None)` when no rotatable line is within reach.
    pub fn press(&mut self, px: Vector2<f64>) -> Result<Option<LineId>> {
        let Some(line) = rotate::pick_rotatable(&self.graph, px, PICK_TOLERANCE) else {
            return Ok(None);
        };
        self.dispatch(line, DragEvent::Start(px))?;
        Ok(Some(line))
    }

    /// Drag `line` through the logical positions in `path`.
    pub fn drag_to(&mut self, line: LineId, path: &[Vector2<f64>]) -> Result<()> {
        let px: Vec<_> = path.iter().map(|&p| self.graph.to_pixel(p)).collect();
        rotate::simulate_drag(&mut self.graph, &mut self.scene, line, &px)
    }

    /// Drag the first rotatable line through `path`.
    pub fn drag_first_to(&mut self, path: &[Vector2<f64>]) -> Result<LineId> {
        let line = self
            .rotatable_lines()
            .into_iter()
            .next()
            .ok_or(DiagramError::NotRotatable(LineId(0)))?;
        self.drag_to(line, path)?;
        Ok(line)
    }

    pub fn to_svg(&self) -> String {
        self.graph.to_svg()
    }
}
