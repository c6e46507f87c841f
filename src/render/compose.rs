//! Two-pass composition of the chart path and its overlays.
//!
//! The static pass draws the full path with the background overlays above it at the size
//! of the whole drawing area. The animated pass draws the gradient path and the foreground
//! overlays, both clipped to the same reveal width.

use crate::foundation::core::{BezPath, DrawingArea};
use crate::layers::classify::LayerGroups;
use crate::layers::overlay::Overlay;
use crate::render::plan::{
    CompositePlan, DrawOp, Glow, Layer, LayerPainter, LayerRole, Paint, Pass, PathContext,
    path_x_extent,
};
use crate::reveal::options::RevealOptions;
use crate::style::color::ColorDef;

const INACTIVE_STROKE_OPACITY: f64 = 0.2;

/// Builds [`CompositePlan`]s from resolved styling.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositeRenderer {
    color: ColorDef,
    stroke_color: ColorDef,
    inactive_color: Option<ColorDef>,
    stroke_width: f64,
    gradient: (ColorDef, ColorDef),
    glow: Option<ColorDef>,
    show_inactive_path: bool,
    is_transition_enabled: bool,
}

impl CompositeRenderer {
    /// Resolve styling from options, with path overrides applied.
    pub fn new(options: &RevealOptions) -> Self {
        Self {
            color: options.color,
            stroke_color: options.stroke_color(),
            inactive_color: options.inactive_stroke_color(),
            stroke_width: options.stroke_width(),
            gradient: options.gradient_stops(),
            glow: options.glow,
            show_inactive_path: options.show_inactive_path,
            is_transition_enabled: options.is_transition_enabled(),
        }
    }

    /// Compose both passes for one frame. `reveal_width` is floored at zero.
    pub fn compose(
        &self,
        path: &BezPath,
        groups: &LayerGroups,
        area: DrawingArea,
        reveal_width: f64,
    ) -> CompositePlan {
        let reveal_width = reveal_width.max(0.0);
        CompositePlan {
            area,
            reveal_width,
            static_pass: self.static_pass(path, &groups.background, area),
            animated_pass: self.animated_pass(path, &groups.foreground, area, reveal_width),
        }
    }

    /// Context published to the static pass. Overlays see the base color; path overrides
    /// only restyle the stroke.
    pub fn static_context(&self) -> PathContext {
        PathContext {
            color: self.color,
            is_inactive: self.show_inactive_path,
            is_transition_enabled: self.is_transition_enabled,
        }
    }

    /// Context published to the animated pass. Never inactive.
    pub fn animated_context(&self) -> PathContext {
        PathContext {
            is_inactive: false,
            ..self.static_context()
        }
    }

    /// Full-width path plus background overlays, unclipped.
    pub fn static_pass(&self, path: &BezPath, background: &[Overlay], area: DrawingArea) -> Pass {
        let context = self.static_context();
        let stroke = if context.is_inactive {
            self.inactive_color
                .unwrap_or_else(|| self.stroke_color.with_opacity(INACTIVE_STROKE_OPACITY))
        } else {
            self.stroke_color
        };

        let path_layer = Layer {
            role: LayerRole::StaticPath,
            clip_width: None,
            ops: vec![DrawOp::StrokePath {
                path: path.clone(),
                paint: Paint::Solid(stroke),
                width: self.stroke_width,
            }],
        };
        let overlays = Layer {
            role: LayerRole::Background,
            clip_width: None,
            ops: paint_overlays(background, path, area, &context),
        };

        Pass {
            context,
            layers: vec![path_layer, overlays],
            glow: None,
        }
    }

    /// Gradient path plus foreground overlays, both clipped to `reveal_width`.
    pub fn animated_pass(
        &self,
        path: &BezPath,
        foreground: &[Overlay],
        area: DrawingArea,
        reveal_width: f64,
    ) -> Pass {
        let context = self.animated_context();
        let clip = Some(reveal_width.max(0.0));
        let (x0, x1) = path_x_extent(path, area);
        let (start, end) = self.gradient;

        let path_layer = Layer {
            role: LayerRole::GradientPath,
            clip_width: clip,
            ops: vec![DrawOp::StrokePath {
                path: path.clone(),
                paint: Paint::LinearX { start, end, x0, x1 },
                width: self.stroke_width,
            }],
        };
        let overlays = Layer {
            role: LayerRole::Foreground,
            clip_width: clip,
            ops: paint_overlays(foreground, path, area, &context),
        };

        Pass {
            context,
            layers: vec![path_layer, overlays],
            glow: self.glow.map(Glow::tinted),
        }
    }
}

fn paint_overlays(
    overlays: &[Overlay],
    path: &BezPath,
    area: DrawingArea,
    ctx: &PathContext,
) -> Vec<DrawOp> {
    let mut painter = LayerPainter::new(area, path.clone());
    for overlay in overlays {
        overlay.paint(&mut painter, ctx);
    }
    painter.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
