/// Scrub state shared by the whole chart and owned by the chart's interaction layer.
///
/// Read-only from the reveal side; the controller never writes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ActivitySignal {
    /// Horizontal pointer position in path coordinates. May be negative.
    pub current_scrub_position: f64,
    /// `true` while the user is actively scrubbing.
    pub is_active: bool,
}

impl ActivitySignal {
    /// No interaction in progress.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Active scrub at `position`.
    pub fn scrubbing(position: f64) -> Self {
        Self {
            current_scrub_position: position,
            is_active: true,
        }
    }
}
