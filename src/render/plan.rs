//! Backend-agnostic description of one composed frame.
//!
//! A [`CompositePlan`] holds two passes drawn back to front. Each [`Pass`] stacks
//! [`Layer`]s, and every layer carries its own optional clip width so a backend can apply
//! clipping without knowing which layer it is drawing.

use kurbo::Shape as _;

use crate::foundation::core::{BezPath, DrawingArea, Point};
use crate::style::color::ColorDef;

/// Fill or stroke paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// Single color.
    Solid(ColorDef),
    /// Two-stop horizontal gradient from `x0` to `x1`, clamped outside.
    LinearX {
        /// Color at `x0`.
        start: ColorDef,
        /// Color at `x1`.
        end: ColorDef,
        /// Gradient start column.
        x0: f64,
        /// Gradient end column.
        x1: f64,
    },
}

/// One drawing primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Stroke `path` with round caps and joins.
    StrokePath {
        /// Geometry in drawing-area coordinates.
        path: BezPath,
        /// Stroke paint.
        paint: Paint,
        /// Stroke thickness.
        width: f64,
    },
    /// Fill `path` using the non-zero rule.
    FillPath {
        /// Geometry in drawing-area coordinates.
        path: BezPath,
        /// Fill paint.
        paint: Paint,
    },
}

impl DrawOp {
    /// Paint of either primitive.
    pub fn paint(&self) -> Paint {
        match self {
            Self::StrokePath { paint, .. } | Self::FillPath { paint, .. } => *paint,
        }
    }
}

/// Values published to overlays drawn inside one pass.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PathContext {
    /// Base stroke color of the chart path.
    pub color: ColorDef,
    /// Overlays should use their inactive treatment.
    pub is_inactive: bool,
    /// The path primitive animates its own geometry changes.
    pub is_transition_enabled: bool,
}

/// What a layer holds, for diagnostics and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum LayerRole {
    /// Full-width path in the plain or inactive color.
    StaticPath,
    /// Background overlay group.
    Background,
    /// Gradient-stroked path.
    GradientPath,
    /// Foreground overlay group.
    Foreground,
}

/// Ordered draw ops sharing one clip.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    /// Contents of this layer.
    pub role: LayerRole,
    /// Visible horizontal extent from `x = 0`; `None` draws unclipped.
    pub clip_width: Option<f64>,
    /// Draw ops, back to front.
    pub ops: Vec<DrawOp>,
}

/// Blurred tint drawn beneath a pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    /// Shadow tint.
    pub color: ColorDef,
    /// Shadow opacity.
    pub opacity: f32,
    /// Blur radius in pixels.
    pub radius_px: u32,
}

impl Glow {
    /// Glow with the standard wrapper parameters.
    pub fn tinted(color: ColorDef) -> Self {
        Self {
            color,
            opacity: 0.7,
            radius_px: 5,
        }
    }
}

/// One stacked visual pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Pass {
    /// Context the overlays in this pass were painted with.
    pub context: PathContext,
    /// Layers, back to front.
    pub layers: Vec<Layer>,
    /// Optional glow beneath the whole pass.
    pub glow: Option<Glow>,
}

impl Pass {
    /// Layer with the given role, if present.
    pub fn layer(&self, role: LayerRole) -> Option<&Layer> {
        self.layers.iter().find(|l| l.role == role)
    }
}

/// Everything a backend needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositePlan {
    /// Drawing area both passes cover.
    pub area: DrawingArea,
    /// Reveal width shared by every clipped layer of the animated pass.
    pub reveal_width: f64,
    /// Non-animated pass: static path plus background overlays.
    pub static_pass: Pass,
    /// Animated pass: gradient path plus foreground overlays.
    pub animated_pass: Pass,
}

impl CompositePlan {
    /// Passes in drawing order.
    pub fn passes(&self) -> [&Pass; 2] {
        [&self.static_pass, &self.animated_pass]
    }
}

/// Recorder handed to overlay widgets.
#[derive(Debug)]
pub struct LayerPainter {
    area: DrawingArea,
    path: BezPath,
    ops: Vec<DrawOp>,
}

impl LayerPainter {
    /// Painter for a layer covering `area` above the line `path`.
    pub fn new(area: DrawingArea, path: BezPath) -> Self {
        Self {
            area,
            path,
            ops: Vec::new(),
        }
    }

    /// Drawing area of the chart.
    pub fn area(&self) -> DrawingArea {
        self.area
    }

    /// Line geometry of the chart.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Horizontal bounds of the line geometry as `(min_x, max_x)`, or the whole area when
    /// the path is empty.
    pub fn path_x_extent(&self) -> (f64, f64) {
        path_x_extent(&self.path, self.area)
    }

    /// Record a stroke.
    pub fn stroke_path(&mut self, path: BezPath, paint: Paint, width: f64) {
        self.ops.push(DrawOp::StrokePath { path, paint, width });
    }

    /// Record a fill.
    pub fn fill_path(&mut self, path: BezPath, paint: Paint) {
        self.ops.push(DrawOp::FillPath { path, paint });
    }

    /// Record a filled circle.
    pub fn fill_circle(&mut self, center: Point, radius: f64, color: ColorDef) {
        let circle = kurbo::Circle::new(center, radius.max(0.0));
        self.fill_path(circle.to_path(0.1), Paint::Solid(color));
    }

    /// Record a straight stroke from `a` to `b`.
    pub fn stroke_line(&mut self, a: Point, b: Point, color: ColorDef, width: f64) {
        let mut path = BezPath::new();
        path.move_to(a);
        path.line_to(b);
        self.stroke_path(path, Paint::Solid(color), width);
    }

    /// Recorded ops.
    pub fn finish(self) -> Vec<DrawOp> {
        self.ops
    }
}

pub(crate) fn path_x_extent(path: &BezPath, area: DrawingArea) -> (f64, f64) {
    if path.elements().is_empty() {
        return (0.0, area.width.max(0.0));
    }
    let bbox = path.bounding_box();
    (bbox.x0, bbox.x1)
}
