//! Drag-to-rotate interaction for rotatable lines.
//!
//! A `RotationHandler` lives on the SVG element of a rotatable line. Pointer
//! events are fed to it through `dispatch_drag`; a move rotates the line's
//! end around its start, keeping the length captured at drag start, then
//! runs the redraw callbacks in registration order.

use std::fmt;
use std::rc::Rc;

use nalgebra::Vector2;

use crate::draw::LINE_SEL;
use crate::error::{DiagramError, Result};
use crate::geom::{self, EPS_LEN};
use crate::graph::Graph;
use crate::line::LineId;
use crate::scene::Scene;
use crate::svg::DatumKey;

/// Redraw hook run after every endpoint change.
pub type Callback = Rc<dyn Fn(&mut Graph, &Scene) -> Result<()>>;

/// Wrap a closure as a `Callback`.
pub fn callback<F>(f: F) -> Callback
where
    F: Fn(&mut Graph, &Scene) -> Result<()> + 'static,
{
    Rc::new(f)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Idle,
    /// `length` is the line length at drag start.
    Dragging { length: f64 },
}

/// Pointer gesture event in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    Start(Vector2<f64>),
    Move(Vector2<f64>),
    End(Vector2<f64>),
}

#[derive(Clone)]
pub struct RotationHandler {
    line: LineId,
    state: DragState,
    callbacks: Vec<Callback>,
}

impl fmt::Debug for RotationHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotationHandler")
            .field("line", &self.line)
            .field("state", &self.state)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

impl RotationHandler {
    pub fn new(line: LineId, callbacks: Vec<Callback>) -> Self {
        Self {
            line,
            state: DragState::Idle,
            callbacks,
        }
    }

    #[inline]
    pub fn line(&self) -> LineId {
        self.line
    }
    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }
    #[inline]
    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }

    pub(crate) fn set_callbacks(&mut self, callbacks: Vec<Callback>) {
        self.callbacks = callbacks;
    }

    fn handle(&mut self, graph: &mut Graph, scene: &mut Scene, event: DragEvent) -> Result<()> {
        let line = scene.line(self.line)?.clone();
        let key = DatumKey::Line(self.line);
        match (event, self.state) {
            (DragEvent::Start(_), _) => {
                let length = geom::distance(scene.location(line.start)?, scene.location(line.end)?);
                self.state = DragState::Dragging {
                    length: geom::finite_or(length, 0.0),
                };
                if let Some(el) = graph.surface_mut().find_mut(LINE_SEL, key) {
                    el.set_style("cursor", Some("grabbing"));
                }
                tracing::debug!(line = self.line.0, length, "drag start");
            }
            (DragEvent::Move(px), DragState::Dragging { length }) => {
                let start = scene.location(line.start)?;
                let grip = graph.from_pixel(px);
                let Some(end) = rotated_end(start, grip, length) else {
                    tracing::debug!(line = self.line.0, "grip on pivot, endpoint unchanged");
                    return Ok(());
                };
                scene.set_location(line.end, end)?;
                let p = graph.to_pixel(end);
                if let Some(el) = graph.surface_mut().find_mut(LINE_SEL, key) {
                    el.set_num("x2", p.x).set_num("y2", p.y);
                }
                tracing::debug!(line = self.line.0, x = end.x, y = end.y, "drag move");
                for (i, cb) in self.callbacks.iter().enumerate() {
                    if let Err(err) = cb(&mut *graph, &*scene) {
                        tracing::warn!(line = self.line.0, callback = i, %err, "redraw callback failed");
                    }
                }
            }
            (DragEvent::Move(_), DragState::Idle) => {
                tracing::debug!(line = self.line.0, "move without drag start ignored");
            }
            (DragEvent::End(_), _) => {
                self.state = DragState::Idle;
                if let Some(el) = graph.surface_mut().find_mut(LINE_SEL, key) {
                    el.set_style("cursor", None);
                }
                tracing::debug!(line = self.line.0, "drag end");
            }
        }
        Ok(())
    }
}

/// New end location for a line pivoting at `start` towards `grip`.
///
/// `None` when `grip` coincides with `start` (direction undefined).
pub fn rotated_end(start: Vector2<f64>, grip: Vector2<f64>, length: f64) -> Option<Vector2<f64>> {
    let rel = grip - start;
    let norm = rel.norm();
    if !(norm.is_finite() && norm > EPS_LEN) {
        return None;
    }
    Some(start + geom::from_polar(length, geom::angle_of(rel)))
}

/// Feed one pointer event to the rotation handler of `line`.
pub fn dispatch_drag(
    graph: &mut Graph,
    scene: &mut Scene,
    line: LineId,
    event: DragEvent,
) -> Result<()> {
    let key = DatumKey::Line(line);
    let mut handler = graph
        .surface_mut()
        .find_mut(LINE_SEL, key)
        .and_then(|el| el.take_handler())
        .ok_or(DiagramError::NotRotatable(line))?;

    let res = handler.handle(graph, scene, event);

    // Callbacks may have redrawn the lines; keep the gesture state but pick
    // up callbacks bound by a newer draw.
    if let Some(el) = graph.surface_mut().find_mut(LINE_SEL, key) {
        if el.has_class("rotatable") {
            if let Some(fresh) = el.take_handler() {
                handler.callbacks = fresh.callbacks;
            }
            el.set_handler(Some(handler));
        }
    }
    res
}

/// Full gesture: start at the line's current end, one move per pixel
/// position, end at the last position.
pub fn simulate_drag(
    graph: &mut Graph,
    scene: &mut Scene,
    line: LineId,
    path: &[Vector2<f64>],
) -> Result<()> {
    let end = scene.location(scene.line(line)?.end)?;
    let from = graph.to_pixel(end);
    dispatch_drag(graph, scene, line, DragEvent::Start(from))?;
    for &px in path {
        dispatch_drag(graph, scene, line, DragEvent::Move(px))?;
    }
    let last = path.last().copied().unwrap_or(from);
    dispatch_drag(graph, scene, line, DragEvent::End(last))
}

/// Topmost rotatable line whose drawn segment passes within `tolerance`
/// pixels of `px`.
pub fn pick_rotatable(graph: &Graph, px: Vector2<f64>, tolerance: f64) -> Option<LineId> {
    graph
        .surface()
        .elements()
        .iter()
        .rev()
        .filter(|el| el.selector() == LINE_SEL && el.handler().is_some())
        .find_map(|el| {
            let a = Vector2::new(el.num("x1")?, el.num("y1")?);
            let b = Vector2::new(el.num("x2")?, el.num("y2")?);
            match el.key() {
                DatumKey::Line(id) if segment_distance(px, a, b) <= tolerance => Some(id),
                _ => None,
            }
        })
}

fn segment_distance(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 <= EPS_LEN {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}
