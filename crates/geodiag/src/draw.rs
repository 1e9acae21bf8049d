//! Renderer: projects points, lines and angle annotations onto a graph.
//!
//! Every draw joins its data to the surface by identity, so calling it again
//! with the same data updates elements in place. Values are computed before
//! the join; a failed draw leaves the previous visuals untouched.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector2;

use crate::angle::{degrees_text, AngleId};
use crate::error::Result;
use crate::geom::finite_or;
use crate::graph::Graph;
use crate::line::LineId;
use crate::point::PointId;
use crate::rotate::{Callback, RotationHandler};
use crate::scene::Scene;
use crate::svg::{annular_sector, ArcSpec, DatumKey, Selector};

pub const GRID_SEL: Selector = Selector::new("line", "grid");
pub const AXIS_SEL: Selector = Selector::new("line", "axis");
pub const POINT_SEL: Selector = Selector::new("circle", "point");
pub const LABEL_SEL: Selector = Selector::new("text", "label");
pub const LINE_SEL: Selector = Selector::new("line", "line");
pub const ARC_SEL: Selector = Selector::new("path", "angle-arc");
pub const ANGLE_TEXT_SEL: Selector = Selector::new("text", "angle");

/// Point marker radius, in logical units.
pub const POINT_RADIUS: f64 = 0.1;
/// Angle arc radius, in logical units.
pub const ARC_RADIUS: f64 = 1.5;
/// Angle text radius, in logical units.
pub const ANGLE_TEXT_RADIUS: f64 = 0.85;

const MAX_GRID_LINES: usize = 1000;

/// Markers and labels for `points`.
pub fn draw_points(graph: &mut Graph, scene: &Scene, points: &[PointId]) -> Result<()> {
    struct Row<'a> {
        px: Vector2<f64>,
        text: &'a str,
        dx: &'a str,
        dy: &'a str,
    }
    let rows = points
        .iter()
        .map(|&id| {
            let rec = scene.point(id)?;
            let (dx, dy) = rec.offsets();
            Ok(Row {
                px: graph.to_pixel(rec.location()),
                text: rec.text().unwrap_or(""),
                dx,
                dy,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let keys: Vec<DatumKey> = points.iter().map(|&id| DatumKey::Point(id)).collect();
    let r = POINT_RADIUS * graph.resolution();

    let surface = graph.surface_mut();
    for (i, row) in surface.join(POINT_SEL, &keys).into_iter().zip(&rows) {
        surface
            .element_mut(i)
            .set_num("cx", row.px.x)
            .set_num("cy", row.px.y)
            .set_num("r", r)
            .set_attr("fill", "#000000");
    }
    for (i, row) in surface.join(LABEL_SEL, &keys).into_iter().zip(&rows) {
        surface
            .element_mut(i)
            .set_num("x", row.px.x)
            .set_num("y", row.px.y)
            .set_attr("dx", row.dx)
            .set_attr("dy", row.dy)
            .set_text(Some(row.text));
    }
    Ok(())
}

/// Segments for `lines`; rotatable ones get a rotation handler that runs
/// `callbacks` after each endpoint change.
pub fn draw_lines(
    graph: &mut Graph,
    scene: &Scene,
    lines: &[LineId],
    callbacks: &[Callback],
) -> Result<()> {
    let rows = lines
        .iter()
        .map(|&id| {
            let line = scene.line(id)?;
            let p1 = graph.to_pixel(scene.location(line.start)?);
            let p2 = graph.to_pixel(scene.location(line.end)?);
            Ok((id, line, p1, p2))
        })
        .collect::<Result<Vec<_>>>()?;
    let keys: Vec<DatumKey> = lines.iter().map(|&id| DatumKey::Line(id)).collect();

    let surface = graph.surface_mut();
    for (i, (id, line, p1, p2)) in surface.join(LINE_SEL, &keys).into_iter().zip(rows) {
        let el = surface.element_mut(i);
        el.classed("rotatable", line.rotatable);
        for class in &line.classes {
            el.classed(class, true);
        }
        if line.rotatable {
            let reuse = el.handler().is_some_and(|h| h.line() == id);
            if reuse {
                if let Some(h) = el.handler_mut() {
                    h.set_callbacks(callbacks.to_vec());
                }
            } else {
                el.set_handler(Some(RotationHandler::new(id, callbacks.to_vec())));
            }
        } else {
            el.set_handler(None);
        }
        el.set_num("x1", p1.x)
            .set_num("y1", p1.y)
            .set_num("x2", p2.x)
            .set_num("y2", p2.y);
    }
    Ok(())
}

/// Arc and degree text for each annotation.
///
/// Arc angles use the arc generator's convention (0 at 12 o'clock,
/// clockwise): the sector runs from `angle_start + π/2` to `-angle + π/2`.
/// The text sits at pixel angle `-(angle - angle_start) / 2`.
pub fn draw_angles(graph: &mut Graph, scene: &Scene, angles: &[AngleId]) -> Result<()> {
    struct Row {
        origin: Vector2<f64>,
        angle: f64,
        start: f64,
        text: String,
    }
    let rows = angles
        .iter()
        .map(|&id| {
            let ann = scene.angle(id)?;
            let angle = finite_or(ann.angle(scene)?, 0.0);
            Ok(Row {
                origin: graph.to_pixel(scene.location(ann.origin)?),
                angle,
                start: finite_or(ann.angle_start(scene)?, 0.0),
                text: degrees_text(angle),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let keys: Vec<DatumKey> = angles.iter().map(|&id| DatumKey::Angle(id)).collect();
    let res = graph.resolution();

    let surface = graph.surface_mut();
    for (i, row) in surface.join(ARC_SEL, &keys).into_iter().zip(&rows) {
        let d = annular_sector(&ArcSpec {
            inner_radius: ARC_RADIUS * res,
            outer_radius: ARC_RADIUS * res + 1.0,
            start_angle: row.start + FRAC_PI_2,
            end_angle: -row.angle + FRAC_PI_2,
        });
        let transform = format!(
            "translate({},{})",
            crate::svg::fmt_num(row.origin.x),
            crate::svg::fmt_num(row.origin.y)
        );
        surface
            .element_mut(i)
            .set_attr("transform", transform)
            .set_attr("d", d);
    }
    let r = ANGLE_TEXT_RADIUS * res;
    for (i, row) in surface.join(ANGLE_TEXT_SEL, &keys).into_iter().zip(&rows) {
        let mid = -(row.angle - row.start) / 2.0;
        surface
            .element_mut(i)
            .set_num("x", r * mid.cos() + row.origin.x)
            .set_num("y", r * mid.sin() + row.origin.y)
            .set_text(Some(row.text.as_str()));
    }
    Ok(())
}

/// Unit grid over the plot area plus the two axes.
pub fn draw_grid(graph: &mut Graph) {
    let ext = graph.extent();
    let count = |v: f64| {
        if v.is_finite() && v >= 0.0 {
            (v.floor() as usize).min(MAX_GRID_LINES)
        } else {
            0
        }
    };
    let (nx, ny) = (count(ext.x), count(ext.y));
    let mut segments = Vec::with_capacity(nx + ny + 2);
    for i in 0..=nx {
        let x = i as f64;
        segments.push((Vector2::new(x, 0.0), Vector2::new(x, ext.y)));
    }
    for j in 0..=ny {
        let y = j as f64;
        segments.push((Vector2::new(0.0, y), Vector2::new(ext.x, y)));
    }
    let px: Vec<_> = segments
        .iter()
        .map(|&(a, b)| (graph.to_pixel(a), graph.to_pixel(b)))
        .collect();
    let axes = [
        (graph.to_pixel(Vector2::zeros()), graph.to_pixel(Vector2::new(ext.x, 0.0))),
        (graph.to_pixel(Vector2::zeros()), graph.to_pixel(Vector2::new(0.0, ext.y))),
    ];

    let surface = graph.surface_mut();
    let keys: Vec<DatumKey> = (0..px.len()).map(DatumKey::Grid).collect();
    for (i, (a, b)) in surface.join(GRID_SEL, &keys).into_iter().zip(px) {
        set_segment(surface.element_mut(i), a, b);
    }
    let keys = [DatumKey::Grid(0), DatumKey::Grid(1)];
    for (i, (a, b)) in surface.join(AXIS_SEL, &keys).into_iter().zip(axes) {
        set_segment(surface.element_mut(i), a, b);
    }
}

fn set_segment(el: &mut crate::svg::Element, a: Vector2<f64>, b: Vector2<f64>) {
    el.set_num("x1", a.x)
        .set_num("y1", a.y)
        .set_num("x2", b.x)
        .set_num("y2", b.y);
}

#[cfg(test)]
mod tests;
