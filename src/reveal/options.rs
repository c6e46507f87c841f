use crate::animation::timing::{TimingConfig, TimingProps};
use crate::foundation::error::{RevealError, RevealResult};
use crate::style::color::ColorDef;

/// Which layer, if any, reveals progressively on first display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimateOnMount {
    /// Reveal the gradient stroke and foreground overlays from zero width.
    Foreground,
}

/// Overrides merged over the wrapper's own path settings for both passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PathProps {
    /// Stroke color override.
    pub color: Option<ColorDef>,
    /// Inactive stroke color override.
    pub inactive_color: Option<ColorDef>,
    /// Stroke thickness override.
    pub width: Option<f64>,
    /// Whether the path primitive animates its own geometry changes. Defaults to `true`.
    pub is_transition_enabled: Option<bool>,
}

/// Construction options for a revealed chart path. Every field is optional in JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Stroke color of the static path.
    pub color: ColorDef,
    /// Static stroke color used while the inactive treatment is shown.
    pub inactive_color: Option<ColorDef>,
    /// Gradient stops for the animated stroke; the first two are used.
    pub gradient_colors: Vec<ColorDef>,
    /// Glow tint applied around the animated layer.
    pub glow: Option<ColorDef>,
    /// Stroke thickness.
    pub width: f64,
    /// Padding added to the resting reveal width.
    pub width_offset: f64,
    /// Render the static pass in its inactive treatment.
    pub show_inactive_path: bool,
    /// Progressive reveal on first display.
    pub animate_on_mount: Option<AnimateOnMount>,
    /// Duration of ordinary transitions.
    pub animation_duration_ms: f64,
    /// Curve of ordinary transitions.
    pub animation_props: TimingProps,
    /// Duration of the mount reveal; falls back to `animation_duration_ms`.
    pub mount_animation_duration_ms: Option<f64>,
    /// Curve of the mount reveal; falls back to `animation_props`.
    pub mount_animation_props: Option<TimingProps>,
    /// Pass-through overrides for the path primitive.
    pub path_props: PathProps,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            color: ColorDef::BLACK,
            inactive_color: None,
            gradient_colors: vec![
                ColorDef::rgba(123.0 / 255.0, 97.0 / 255.0, 1.0, 1.0),
                ColorDef::rgba(2.0 / 255.0, 209.0 / 255.0, 191.0 / 255.0, 189.0 / 255.0),
            ],
            glow: None,
            width: 3.0,
            width_offset: 20.0,
            show_inactive_path: true,
            animate_on_mount: None,
            animation_duration_ms: 300.0,
            animation_props: TimingProps::default(),
            mount_animation_duration_ms: None,
            mount_animation_props: None,
            path_props: PathProps::default(),
        }
    }
}

impl RevealOptions {
    /// Parse JSON options and validate them.
    pub fn from_json_str(s: &str) -> RevealResult<Self> {
        let opts: Self = serde_json::from_str(s)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Reject values the controller and renderer cannot work with.
    pub fn validate(&self) -> RevealResult<()> {
        fn finite(v: f64, what: &str) -> RevealResult<()> {
            if !v.is_finite() {
                return Err(RevealError::validation(format!("{what} must be finite")));
            }
            Ok(())
        }
        fn duration(v: f64, what: &str) -> RevealResult<()> {
            finite(v, what)?;
            if v < 0.0 {
                return Err(RevealError::validation(format!("{what} must be >= 0")));
            }
            Ok(())
        }

        finite(self.width, "width")?;
        if self.width < 0.0 {
            return Err(RevealError::validation("width must be >= 0"));
        }
        finite(self.width_offset, "width_offset")?;
        duration(self.animation_duration_ms, "animation_duration_ms")?;
        if let Some(ms) = self.mount_animation_duration_ms {
            duration(ms, "mount_animation_duration_ms")?;
        }
        if let Some(w) = self.path_props.width {
            finite(w, "path_props.width")?;
            if w < 0.0 {
                return Err(RevealError::validation("path_props.width must be >= 0"));
            }
        }
        if self.gradient_colors.len() < 2 {
            return Err(RevealError::validation(
                "gradient_colors must contain at least two colors",
            ));
        }
        Ok(())
    }

    /// `true` when the mount reveal was requested.
    pub fn mount_reveal(&self) -> bool {
        self.animate_on_mount == Some(AnimateOnMount::Foreground)
    }

    /// Timing of ordinary transitions.
    pub fn standard_timing(&self) -> TimingConfig {
        TimingConfig::new(self.animation_duration_ms, self.animation_props)
    }

    /// Timing of the mount reveal.
    pub fn mount_timing(&self) -> TimingConfig {
        TimingConfig::new(
            self.mount_animation_duration_ms
                .unwrap_or(self.animation_duration_ms),
            self.mount_animation_props.unwrap_or(self.animation_props),
        )
    }

    /// Stroke color after path overrides.
    pub fn stroke_color(&self) -> ColorDef {
        self.path_props.color.unwrap_or(self.color)
    }

    /// Inactive stroke color after path overrides.
    pub fn inactive_stroke_color(&self) -> Option<ColorDef> {
        self.path_props.inactive_color.or(self.inactive_color)
    }

    /// Stroke thickness after path overrides.
    pub fn stroke_width(&self) -> f64 {
        self.path_props.width.unwrap_or(self.width)
    }

    /// Transition flag published to overlays.
    pub fn is_transition_enabled(&self) -> bool {
        self.path_props.is_transition_enabled.unwrap_or(true)
    }

    /// First and second gradient stops. Falls back to the stroke color when missing.
    pub fn gradient_stops(&self) -> (ColorDef, ColorDef) {
        let start = self.gradient_colors.first().copied().unwrap_or(self.color);
        let end = self.gradient_colors.get(1).copied().unwrap_or(start);
        (start, end)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/options.rs"]
mod tests;
