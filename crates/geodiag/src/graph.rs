//! Graph: logical ↔ pixel mapping plus the surface it draws on.
//!
//! Logical coordinates have y up with the origin at the bottom-left corner
//! of the plot area; pixel coordinates have y down with the origin at the
//! top-left corner of the SVG.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::draw;
use crate::error::{DiagramError, Result};
use crate::geom::Affine2;
use crate::svg::Surface;

/// Graph geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphCfg {
    pub width: f64,
    pub height: f64,
    /// Pixels per logical unit.
    pub resolution: f64,
    /// Pixel gap between the SVG border and the plot area.
    pub margin: f64,
}

impl Default for GraphCfg {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 400.0,
            resolution: 40.0,
            margin: 20.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Graph {
    cfg: GraphCfg,
    to_px: Affine2,
    from_px: Affine2,
    surface: Surface,
}

impl Graph {
    /// `width × height` pixel graph with the default resolution and margin.
    pub fn new(width: f64, height: f64) -> Self {
        let cfg = GraphCfg {
            width,
            height,
            ..GraphCfg::default()
        };
        let to_px = pixel_map(&cfg);
        // The default resolution is non-zero, so the scale is always invertible.
        let from_px = to_px.inverse().unwrap_or_else(Affine2::identity);
        Self::assemble(cfg, to_px, from_px)
    }

    pub fn with_cfg(cfg: GraphCfg) -> Result<Self> {
        if !cfg.resolution.is_finite() {
            return Err(DiagramError::NotInvertible);
        }
        let to_px = pixel_map(&cfg);
        let from_px = to_px.inverse().ok_or(DiagramError::NotInvertible)?;
        Ok(Self::assemble(cfg, to_px, from_px))
    }

    fn assemble(cfg: GraphCfg, to_px: Affine2, from_px: Affine2) -> Self {
        let mut graph = Self {
            cfg,
            to_px,
            from_px,
            surface: Surface::default(),
        };
        draw::draw_grid(&mut graph);
        graph
    }

    #[inline]
    pub fn cfg(&self) -> &GraphCfg {
        &self.cfg
    }
    #[inline]
    pub fn resolution(&self) -> f64 {
        self.cfg.resolution
    }

    /// Logical size of the plot area.
    pub fn extent(&self) -> Vector2<f64> {
        Vector2::new(
            (self.cfg.width - 2.0 * self.cfg.margin) / self.cfg.resolution,
            (self.cfg.height - 2.0 * self.cfg.margin) / self.cfg.resolution,
        )
    }

    #[inline]
    pub fn to_pixel(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.to_px.apply(p)
    }
    #[inline]
    pub fn from_pixel(&self, px: Vector2<f64>) -> Vector2<f64> {
        self.from_px.apply(px)
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn to_svg(&self) -> String {
        self.surface.write_svg(self.cfg.width, self.cfg.height)
    }
}

fn pixel_map(cfg: &GraphCfg) -> Affine2 {
    Affine2::scale_translate(
        cfg.resolution,
        -cfg.resolution,
        Vector2::new(cfg.margin, cfg.height - cfg.margin),
    )
}
