use crate::animation::ease::Ease;

/// Transition parameters other than duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingProps {
    /// Curve applied to tween progress.
    pub ease: Ease,
}

/// Fully resolved transition timing for one tween.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimingConfig {
    /// Duration in milliseconds; `0` means jump straight to the target.
    pub duration_ms: f64,
    /// Curve applied to tween progress.
    pub ease: Ease,
}

impl TimingConfig {
    /// Combine a duration with the remaining timing props.
    pub fn new(duration_ms: f64, props: TimingProps) -> Self {
        Self {
            duration_ms,
            ease: props.ease,
        }
    }

    /// Same curve, zero duration.
    pub fn instant(self) -> Self {
        Self {
            duration_ms: 0.0,
            ..self
        }
    }

    /// Return `true` when a tween with this config completes on start.
    pub fn is_instant(self) -> bool {
        self.duration_ms.is_nan() || self.duration_ms <= 0.0
    }
}

/// Outcome of advancing a [`Tween`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenStep {
    /// Still interpolating.
    Running,
    /// Reached the target during this step. Reported exactly once per tween.
    Completed,
    /// Already finished before this step.
    Idle,
}

/// Scalar interpolation driven by elapsed frame time.
///
/// A tween never blocks: callers advance it once per frame and may replace it with a new
/// one at any frame boundary, starting from [`Tween::value`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    config: TimingConfig,
    elapsed_ms: f64,
    finished: bool,
}

impl Tween {
    /// A finished tween resting at `value`.
    pub fn settled(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            config: TimingConfig::new(0.0, TimingProps::default()),
            elapsed_ms: 0.0,
            finished: true,
        }
    }

    /// Start interpolating from `from` to `to`. Instant configs finish immediately.
    pub fn start(from: f64, to: f64, config: TimingConfig) -> Self {
        Self {
            from,
            to,
            config,
            elapsed_ms: 0.0,
            finished: config.is_instant(),
        }
    }

    /// Current interpolated value.
    pub fn value(&self) -> f64 {
        if self.finished {
            return self.to;
        }
        let t = self.elapsed_ms / self.config.duration_ms;
        let te = self.config.ease.apply(t);
        self.from + (self.to - self.from) * te
    }

    /// Advance by `dt_ms` of frame time.
    pub fn advance(&mut self, dt_ms: f64) -> TweenStep {
        if self.finished {
            return TweenStep::Idle;
        }
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.elapsed_ms += dt_ms;
        }
        if self.elapsed_ms >= self.config.duration_ms {
            self.finished = true;
            return TweenStep::Completed;
        }
        TweenStep::Running
    }

    /// Value the tween is heading to.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Timing the tween was started with.
    pub fn config(&self) -> TimingConfig {
        self.config
    }

    /// Return `true` once the target has been reached.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
