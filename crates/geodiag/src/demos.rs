//! The tutorial's example blocks.
//!
//! Every block uses a 640 × 400 graph with `b = (5, 4)` and `c = (4, 7.5)`.
//! Points are drawn after lines so the markers sit on top.

use std::fmt;
use std::str::FromStr;

use nalgebra::vector;

use crate::angle::AngleAnnotation;
use crate::diagram::Diagram;
use crate::draw::{draw_angles, draw_lines, draw_points};
use crate::error::Result;
use crate::graph::Graph;
use crate::line::Line;
use crate::page::Page;
use crate::point::LabeledPoint;
use crate::rotate::callback;
use crate::scene::Scene;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Example {
    /// Rotatable line with live angle annotation, shown at the top of the page.
    Intro,
    /// Two labeled points, nothing else.
    Plot,
    /// Rotatable line whose points are not redrawn (labels lag behind).
    Rotation,
    /// Rotatable line that redraws its points after each move.
    Fixed,
    /// Rotatable line with points and angle annotation kept in sync.
    Annotated,
}

impl Example {
    pub const ALL: [Example; 5] = [
        Example::Intro,
        Example::Plot,
        Example::Rotation,
        Example::Fixed,
        Example::Annotated,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Example::Intro => "intro",
            Example::Plot => "plot",
            Example::Rotation => "rotation",
            Example::Fixed => "fixed",
            Example::Annotated => "annotated",
        }
    }

    /// Page element the block is mounted into.
    pub fn mount_id(self) -> &'static str {
        match self {
            Example::Intro => "example",
            Example::Plot => "example_02",
            Example::Rotation => "example_03",
            Example::Fixed => "example_04",
            Example::Annotated => "example_05",
        }
    }

    pub fn build(self) -> Result<Diagram> {
        let mut graph = Graph::new(640.0, 400.0);
        let mut scene = Scene::default();
        let b = scene.add_point(LabeledPoint::new(5.0, 4.0, Some("b")));
        let c = scene.add_point(LabeledPoint::new(4.0, 7.5, Some("c")));

        match self {
            Example::Plot => {
                draw_points(&mut graph, &scene, &[b, c])?;
            }
            Example::Rotation => {
                let bc = scene.add_line(Line::new(b, c).rotatable(true))?;
                draw_lines(&mut graph, &scene, &[bc], &[])?;
                draw_points(&mut graph, &scene, &[b, c])?;
            }
            Example::Fixed => {
                let bc = scene.add_line(Line::new(b, c).rotatable(true))?;
                let points = callback(move |g, s| draw_points(g, s, &[b, c]));
                draw_lines(&mut graph, &scene, &[bc], &[points.clone()])?;
                points(&mut graph, &scene)?;
            }
            Example::Intro | Example::Annotated => {
                let bx = scene.add_anonymous(scene.location(b)? + vector![1.0, 0.0]);
                let cbx = scene.add_angle(AngleAnnotation::new(b, bx, c))?;
                let bc = scene.add_line(Line::new(b, c).rotatable(true))?;
                let points = callback(move |g, s| draw_points(g, s, &[b, c]));
                let angles = callback(move |g, s| draw_angles(g, s, &[cbx]));
                draw_lines(&mut graph, &scene, &[bc], &[points.clone(), angles.clone()])?;
                points(&mut graph, &scene)?;
                angles(&mut graph, &scene)?;
            }
        }
        tracing::debug!(example = self.name(), elements = graph.surface().len(), "built");
        Ok(Diagram::new(graph, scene))
    }
}

impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Example {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Example::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Example::ALL.iter().map(|e| e.name()).collect();
                format!("unknown example `{s}` (expected one of: {})", names.join(", "))
            })
    }
}

/// Render every example block into the tutorial page.
pub fn tutorial_page() -> Result<Page> {
    let mut page = Page::tutorial();
    for ex in Example::ALL {
        let diagram = ex.build()?;
        page.mount(ex.mount_id(), &diagram.to_svg())?;
    }
    Ok(page)
}
