//! Reveal-width state machine.
//!
//! Two drivers compete for one animated dimension: live scrub tracking (instant) and the
//! one-shot mount reveal (eased). [`RevealController::target`] decides which one wins for
//! the current inputs; [`RevealController::step`] drives the animated width toward it,
//! redirecting any in-flight tween at the frame boundary.

use crate::animation::timing::{TimingConfig, Tween, TweenStep};
use crate::foundation::core::DrawingArea;
use crate::reveal::activity::ActivitySignal;
use crate::reveal::options::RevealOptions;

/// Session flags owned by one controller. Each flips `false -> true` at most once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RevealState {
    /// The first frame has been committed.
    pub has_mounted: bool,
    /// The mount-config tween has completed (or was interrupted).
    pub has_completed_mount_animation: bool,
}

/// Width the reveal is heading to and how it gets there.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RevealTarget {
    /// Target width, never negative.
    pub width: f64,
    /// Timing of the tween toward `width`.
    pub timing: TimingConfig,
    /// `true` when `timing` was chosen from the mount config.
    pub uses_mount_config: bool,
}

/// Snapshot produced by one [`RevealController::step`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RevealFrame {
    /// Animated clip width for this frame, never negative.
    pub width: f64,
    /// Target computed from this frame's inputs.
    pub target: RevealTarget,
    /// Session flags after this frame.
    pub state: RevealState,
}

/// Per-chart-path reveal controller.
#[derive(Clone, Debug)]
pub struct RevealController {
    mount_reveal: bool,
    width_offset: f64,
    standard: TimingConfig,
    mount: TimingConfig,
    state: RevealState,
    tween: Option<Tween>,
    request: Option<RevealTarget>,
    run_uses_mount_config: bool,
}

impl RevealController {
    /// Create a controller with fresh session state.
    pub fn new(options: &RevealOptions) -> Self {
        Self {
            mount_reveal: options.mount_reveal(),
            width_offset: options.width_offset,
            standard: options.standard_timing(),
            mount: options.mount_timing(),
            state: RevealState::default(),
            tween: None,
            request: None,
            run_uses_mount_config: false,
        }
    }

    /// Apply changed options. Session state and the running tween are kept; the next
    /// [`step`](Self::step) picks up the new values.
    pub fn reconfigure(&mut self, options: &RevealOptions) {
        self.mount_reveal = options.mount_reveal();
        self.width_offset = options.width_offset;
        self.standard = options.standard_timing();
        self.mount = options.mount_timing();
    }

    /// Current session flags.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Compute the reveal target for the given inputs without touching any state.
    pub fn target(&self, activity: ActivitySignal, area: DrawingArea) -> RevealTarget {
        let unmounted_width = if self.mount_reveal && !self.state.has_mounted {
            0.0
        } else {
            area.path_width
        };

        let uses_mount_config = self.mount_reveal && !self.state.has_completed_mount_animation;
        let mut timing = if uses_mount_config {
            self.mount
        } else {
            self.standard
        };
        if activity.is_active {
            timing = timing.instant();
        }

        let width = if activity.is_active {
            activity.current_scrub_position
        } else {
            unmounted_width + self.width_offset
        };

        RevealTarget {
            width: floor_width(width),
            timing,
            uses_mount_config,
        }
    }

    /// Record the first render commit. Later calls are no-ops.
    pub fn commit_mount(&mut self) {
        if self.state.has_mounted {
            return;
        }
        self.state.has_mounted = true;
        tracing::debug!("reveal committed first frame");
    }

    /// Mark the mount reveal as done. Later calls are no-ops.
    pub fn complete_mount_animation(&mut self) {
        if self.state.has_completed_mount_animation {
            return;
        }
        self.state.has_completed_mount_animation = true;
        tracing::debug!("mount reveal animation completed");
    }

    /// Animated width right now, never negative.
    pub fn width(&self) -> f64 {
        self.tween.map_or(0.0, |tw| floor_width(tw.value()))
    }

    /// Advance the running tween by `dt_ms`, then re-evaluate the target for `activity`
    /// and `area` and redirect the tween if it changed.
    pub fn step(
        &mut self,
        activity: ActivitySignal,
        area: DrawingArea,
        dt_ms: f64,
    ) -> RevealFrame {
        self.advance(dt_ms);
        let target = self.evaluate(activity, area);
        let width = self.width();
        tracing::trace!(width, target = target.width, "reveal frame");
        RevealFrame {
            width,
            target,
            state: self.state,
        }
    }

    /// Advance the running tween without re-evaluating inputs.
    pub fn advance(&mut self, dt_ms: f64) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        if tween.advance(dt_ms) == TweenStep::Completed {
            self.finish_run();
        }
    }

    /// Re-evaluate the target and start a new tween when it differs from the current
    /// request. The first evaluation places the width at its target directly.
    pub fn evaluate(&mut self, activity: ActivitySignal, area: DrawingArea) -> RevealTarget {
        let target = self.target(activity, area);

        let current = self.tween;
        match current {
            None => {
                self.tween = Some(Tween::settled(target.width));
                self.run_uses_mount_config = false;
            }
            Some(current) => {
                let settled_at_target = current.is_finished() && current.target() == target.width;
                if self.request != Some(target) && !settled_at_target {
                    if !current.is_finished() {
                        tracing::debug!(
                            from = current.target(),
                            to = target.width,
                            "redirecting in-flight reveal tween"
                        );
                        self.finish_run();
                    }
                    let next = Tween::start(current.value(), target.width, target.timing);
                    self.tween = Some(next);
                    self.run_uses_mount_config = target.uses_mount_config;
                    if next.is_finished() {
                        self.finish_run();
                    }
                }
            }
        }

        self.request = Some(target);
        target
    }

    // Completion hook for the current run, also invoked when a run is interrupted.
    fn finish_run(&mut self) {
        if self.run_uses_mount_config {
            self.complete_mount_animation();
        }
    }
}

fn floor_width(width: f64) -> f64 {
    // f64::max drops NaN in favor of the other operand.
    width.max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/controller.rs"]
mod tests;
