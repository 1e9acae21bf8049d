//! JSON scene description for custom diagrams.
//!
//! ```json
//! {
//!   "graph": { "width": 640, "height": 400 },
//!   "points": [ { "name": "b", "x": 5, "y": 4, "text": "b" },
//!               { "name": "c", "x": 4, "y": 7.5, "text": "c" } ],
//!   "helpers": [ { "name": "bx", "from": "b", "dx": 1, "dy": 0 } ],
//!   "lines": [ { "start": "b", "end": "c", "rotatable": true } ],
//!   "angles": [ { "origin": "b", "start": "bx", "end": "c" } ]
//! }
//! ```
//!
//! Built diagrams are wired like the annotated tutorial block: lines first,
//! then points, then angles; rotations redraw points and angles.

use std::collections::HashMap;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::angle::AngleAnnotation;
use crate::diagram::Diagram;
use crate::draw::{draw_angles, draw_lines, draw_points};
use crate::error::{DiagramError, Result};
use crate::graph::{Graph, GraphCfg};
use crate::line::Line;
use crate::point::{LabeledPoint, PointId};
use crate::rotate::callback;
use crate::scene::Scene;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneFile {
    #[serde(default)]
    pub graph: GraphCfg,
    pub points: Vec<PointDef>,
    #[serde(default)]
    pub helpers: Vec<HelperDef>,
    #[serde(default)]
    pub lines: Vec<LineDef>,
    #[serde(default)]
    pub angles: Vec<AngleDef>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointDef {
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub dx: Option<String>,
    #[serde(default)]
    pub dy: Option<String>,
}

/// Unlabeled point at an offset from a named point.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HelperDef {
    pub name: String,
    pub from: String,
    pub dx: f64,
    pub dy: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineDef {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub rotatable: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AngleDef {
    pub origin: String,
    pub start: String,
    pub end: String,
}

/// Point names to arena ids.
#[derive(Clone, Debug, Default)]
pub struct Names(HashMap<String, PointId>);

impl Names {
    fn insert(&mut self, name: &str, id: PointId) -> Result<()> {
        if self.0.insert(name.to_owned(), id).is_some() {
            return Err(DiagramError::DuplicateName(name.to_owned()));
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<PointId> {
        self.0
            .get(name)
            .copied()
            .ok_or_else(|| DiagramError::UnknownName(name.to_owned()))
    }
}

impl SceneFile {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Build and draw the diagram.
    pub fn build(&self) -> Result<(Diagram, Names)> {
        let mut graph = Graph::with_cfg(self.graph)?;
        let mut scene = Scene::default();
        let mut names = Names::default();

        let mut labeled = Vec::with_capacity(self.points.len());
        for p in &self.points {
            let mut point = LabeledPoint::new(p.x, p.y, p.text.as_deref());
            if let Some(dx) = &p.dx {
                point.offset_x = dx.clone();
            }
            if let Some(dy) = &p.dy {
                point.offset_y = dy.clone();
            }
            let id = scene.add_point(point);
            names.insert(&p.name, id)?;
            labeled.push(id);
        }
        for h in &self.helpers {
            let base = scene.location(names.get(&h.from)?)?;
            let id = scene.add_anonymous(base + Vector2::new(h.dx, h.dy));
            names.insert(&h.name, id)?;
        }
        let mut lines = Vec::with_capacity(self.lines.len());
        for l in &self.lines {
            let mut line = Line::new(names.get(&l.start)?, names.get(&l.end)?).rotatable(l.rotatable);
            line.classes = l.classes.clone();
            lines.push(scene.add_line(line)?);
        }
        let mut angles = Vec::with_capacity(self.angles.len());
        for a in &self.angles {
            let ann = AngleAnnotation::new(
                names.get(&a.origin)?,
                names.get(&a.start)?,
                names.get(&a.end)?,
            );
            angles.push(scene.add_angle(ann)?);
        }

        let redraw_points = {
            let labeled = labeled.clone();
            callback(move |g, s| draw_points(g, s, &labeled))
        };
        let redraw_angles = {
            let angles = angles.clone();
            callback(move |g, s| draw_angles(g, s, &angles))
        };
        draw_lines(
            &mut graph,
            &scene,
            &lines,
            &[redraw_points.clone(), redraw_angles.clone()],
        )?;
        redraw_points(&mut graph, &scene)?;
        redraw_angles(&mut graph, &scene)?;
        tracing::debug!(
            points = labeled.len(),
            lines = lines.len(),
            angles = angles.len(),
            "scene file built"
        );
        Ok((Diagram::new(graph, scene), names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{ANGLE_TEXT_SEL, POINT_SEL};
    use nalgebra::vector;

    const TUTORIAL: &str = r#"{
        "points": [ { "name": "b", "x": 5, "y": 4, "text": "b" },
                    { "name": "c", "x": 4, "y": 7.5, "text": "c", "dx": "0" } ],
        "helpers": [ { "name": "bx", "from": "b", "dx": 1, "dy": 0 } ],
        "lines": [ { "start": "b", "end": "c", "rotatable": true, "classes": ["thick"] } ],
        "angles": [ { "origin": "b", "start": "bx", "end": "c" } ]
    }"#;

    #[test]
    fn builds_annotated_scene() {
        let file = SceneFile::from_json(TUTORIAL).unwrap();
        let (mut d, names) = file.build().unwrap();
        assert_eq!(d.graph.cfg().width, 640.0);
        assert_eq!(d.graph.surface().select(POINT_SEL).count(), 2);
        assert_eq!(d.rotatable_lines().len(), 1);
        let c = names.get("c").unwrap();
        assert_eq!(d.scene.point(c).unwrap().offsets(), ("0", "-.2em"));

        d.drag_first_to(&[vector![9.0, 4.0]]).unwrap();
        let text = d.graph.surface().select(ANGLE_TEXT_SEL).next().unwrap();
        assert_eq!(text.text(), Some("0°"));
    }

    #[test]
    fn unknown_names_are_reported() {
        let json = r#"{ "points": [ { "name": "a", "x": 0, "y": 0 } ],
                        "lines": [ { "start": "a", "end": "z" } ] }"#;
        let err = SceneFile::from_json(json).unwrap().build().unwrap_err();
        assert!(matches!(err, DiagramError::UnknownName(n) if n == "z"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let json = r#"{ "points": [ { "name": "a", "x": 0, "y": 0 },
                                    { "name": "a", "x": 1, "y": 0 } ] }"#;
        let err = SceneFile::from_json(json).unwrap().build().unwrap_err();
        assert!(matches!(err, DiagramError::DuplicateName(_)));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            SceneFile::from_json(r#"{ "points": 3 }"#),
            Err(DiagramError::SceneFile(_))
        ));
        assert!(SceneFile::from_json(r#"{ "points": [], "extra": 1 }"#).is_err());
    }
}
