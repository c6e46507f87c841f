//! Animated reveal for chart line paths.
//!
//! A chart path is drawn twice: a static pass with the full line and its background
//! overlays, and an animated pass with a gradient stroke and foreground overlays clipped
//! to a reveal width. The reveal width follows the user's scrub position while scrubbing
//! and otherwise rests just past the end of the line, optionally sweeping in from zero
//! the first time the chart is shown.
//!
//! - Configure a [`RevealOptions`]
//! - Create a [`RevealSession`] and call [`RevealSession::frame`] once per frame
//! - Rasterize the resulting [`CompositePlan`] with a [`CpuBackend`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod layers;
/// Frame composition and CPU rasterization.
pub mod render;
pub(crate) mod reveal;
/// Per-frame session API.
pub mod session;
pub(crate) mod style;

pub use crate::animation::ease::Ease;
pub use crate::animation::timing::{TimingConfig, TimingProps, Tween, TweenStep};
pub use crate::foundation::core::{
    Affine, BezPath, Canvas, DrawingArea, Fps, Point, Rect, Rgba8Premul, Vec2,
};
pub use crate::foundation::error::{RevealError, RevealResult};
pub use crate::layers::classify::{LayerCache, LayerGroups, classify, flatten};
pub use crate::layers::overlay::{Child, Children, KindSet, Overlay, OverlayKind, OverlayWidget};
pub use crate::layers::widgets::{Dot, HorizontalLine};
pub use crate::render::compose::CompositeRenderer;
pub use crate::render::cpu::CpuBackend;
pub use crate::render::plan::{
    CompositePlan, DrawOp, Glow, Layer, LayerPainter, LayerRole, Paint, Pass, PathContext,
};
pub use crate::render::{FrameRGBA, RenderSettings};
pub use crate::reveal::activity::ActivitySignal;
pub use crate::reveal::controller::{RevealController, RevealFrame, RevealState, RevealTarget};
pub use crate::reveal::options::{AnimateOnMount, PathProps, RevealOptions};
pub use crate::session::{FrameInput, RevealSession, SessionFrame};
pub use crate::style::color::ColorDef;
