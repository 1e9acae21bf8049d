//! Interactive geometry diagrams rendered to SVG.
//!
//! Labeled points, lines (optionally rotatable about their start) and angle
//! annotations live in a `Scene` arena and are projected onto a `Graph`,
//! which maps logical plot coordinates to pixels and owns a retained SVG
//! `Surface`. Draw calls join data to elements by identity, so redraws are
//! idempotent. Dragging a rotatable line rotates its end point while keeping
//! its length, then runs redraw callbacks in registration order.
//!
//! Everything is single-threaded and synchronous.

pub mod angle;
pub mod demos;
pub mod diagram;
pub mod draw;
pub mod error;
pub mod geom;
pub mod graph;
pub mod line;
pub mod page;
pub mod point;
pub mod rotate;
pub mod scene;
pub mod scene_file;
pub mod svg;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{DiagramError, Result};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{AngleAnnotation, AngleId};
    pub use crate::demos::{tutorial_page, Example};
    pub use crate::diagram::Diagram;
    pub use crate::draw::{draw_angles, draw_lines, draw_points};
    pub use crate::error::{DiagramError, Result};
    pub use crate::graph::{Graph, GraphCfg};
    pub use crate::line::{Line, LineId};
    pub use crate::page::Page;
    pub use crate::point::{LabeledPoint, PointId};
    pub use crate::rotate::{callback, dispatch_drag, simulate_drag, Callback, DragEvent, DragState};
    pub use crate::scene::Scene;
    pub use crate::scene_file::SceneFile;
    pub use nalgebra::{vector, Vector2 as Vec2};
}
