//! Minimal built-in overlays.

use crate::foundation::core::Point;
use crate::layers::overlay::{Overlay, OverlayKind, OverlayWidget};
use crate::render::plan::{LayerPainter, PathContext};
use crate::style::color::ColorDef;

const INACTIVE_OPACITY: f64 = 0.2;

fn context_color(ctx: &PathContext, color: Option<ColorDef>) -> ColorDef {
    let c = color.unwrap_or(ctx.color);
    if ctx.is_inactive {
        c.with_opacity(INACTIVE_OPACITY)
    } else {
        c
    }
}

/// Filled circle at a fixed point, tagged [`OverlayKind::Dot`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    /// Center in drawing-area coordinates.
    pub at: Point,
    /// Radius in pixels.
    pub radius: f64,
    /// Fill color; the pass color when `None`.
    pub color: Option<ColorDef>,
}

impl Dot {
    /// Dot of radius 4 in the pass color.
    pub fn new(at: Point) -> Self {
        Self {
            at,
            radius: 4.0,
            color: None,
        }
    }

    /// Wrap as a tagged overlay.
    pub fn overlay(self) -> Overlay {
        Overlay::new(OverlayKind::Dot, self)
    }
}

impl OverlayWidget for Dot {
    fn paint(&self, painter: &mut LayerPainter, ctx: &PathContext) {
        painter.fill_circle(self.at, self.radius, context_color(ctx, self.color));
    }
}

/// Full-width horizontal reference line, tagged [`OverlayKind::HorizontalLine`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalLine {
    /// Vertical position in drawing-area coordinates.
    pub y: f64,
    /// Stroke thickness.
    pub width: f64,
    /// Stroke color; the pass color when `None`.
    pub color: Option<ColorDef>,
}

impl HorizontalLine {
    /// One-pixel line in the pass color.
    pub fn new(y: f64) -> Self {
        Self {
            y,
            width: 1.0,
            color: None,
        }
    }

    /// Wrap as a tagged overlay.
    pub fn overlay(self) -> Overlay {
        Overlay::new(OverlayKind::HorizontalLine, self)
    }
}

impl OverlayWidget for HorizontalLine {
    fn paint(&self, painter: &mut LayerPainter, ctx: &PathContext) {
        let w = painter.area().width;
        painter.stroke_line(
            Point::new(0.0, self.y),
            Point::new(w, self.y),
            context_color(ctx, self.color),
            self.width,
        );
    }
}
