//! Per-frame driver tying the reveal controller, the overlay classifier and the composer
//! together.

use crate::foundation::core::{BezPath, DrawingArea};
use crate::foundation::error::RevealResult;
use crate::layers::classify::LayerCache;
use crate::layers::overlay::{Children, KindSet};
use crate::render::compose::CompositeRenderer;
use crate::render::plan::CompositePlan;
use crate::reveal::activity::ActivitySignal;
use crate::reveal::controller::{RevealController, RevealFrame};
use crate::reveal::options::RevealOptions;

/// Inputs for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    /// Shared scrub state.
    pub activity: ActivitySignal,
    /// Drawing area for this frame.
    pub area: DrawingArea,
    /// Line geometry in drawing-area coordinates.
    pub path: &'a BezPath,
    /// Overlay children of the chart path.
    pub children: &'a Children,
    /// Time elapsed since the previous frame.
    pub dt_ms: f64,
}

/// Output of one [`RevealSession::frame`].
#[derive(Clone, Debug)]
pub struct SessionFrame {
    /// Reveal snapshot after this frame.
    pub reveal: RevealFrame,
    /// Composition ready for a backend.
    pub plan: CompositePlan,
}

/// One mounted chart path.
#[derive(Debug)]
pub struct RevealSession {
    options: RevealOptions,
    controller: RevealController,
    renderer: CompositeRenderer,
    layers: LayerCache,
    frames: u64,
}

impl RevealSession {
    /// Validate `options` and start a fresh session.
    pub fn new(options: RevealOptions) -> RevealResult<Self> {
        options.validate()?;
        Ok(Self {
            controller: RevealController::new(&options),
            renderer: CompositeRenderer::new(&options),
            layers: LayerCache::default(),
            frames: 0,
            options,
        })
    }

    /// Classify overlays with custom kind sets instead of the defaults.
    pub fn with_kind_sets(mut self, background: KindSet, foreground: KindSet) -> Self {
        self.layers = LayerCache::new(background, foreground);
        self
    }

    /// Swap options without resetting session state.
    pub fn set_options(&mut self, options: RevealOptions) -> RevealResult<()> {
        options.validate()?;
        self.controller.reconfigure(&options);
        self.renderer = CompositeRenderer::new(&options);
        self.options = options;
        Ok(())
    }

    /// Options in effect.
    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Underlying controller.
    pub fn controller(&self) -> &RevealController {
        &self.controller
    }

    /// Mutable access to the controller, e.g. to report a commit manually.
    pub fn controller_mut(&mut self) -> &mut RevealController {
        &mut self.controller
    }

    /// Number of frames produced so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Step the reveal and compose one frame. The first frame commits the mount.
    #[tracing::instrument(level = "debug", skip_all, fields(frame = self.frames))]
    pub fn frame(&mut self, input: FrameInput<'_>) -> SessionFrame {
        let mut reveal = self.controller.step(input.activity, input.area, input.dt_ms);
        let groups = self.layers.groups(input.children);
        let plan = self
            .renderer
            .compose(input.path, &groups, input.area, reveal.width);

        if self.frames == 0 {
            self.controller.commit_mount();
            reveal.state = self.controller.state();
        }
        self.frames += 1;

        SessionFrame { reveal, plan }
    }
}
