/// Result alias used across the crate's fallible edges.
pub type RevealResult<T> = Result<T, RevealError>;

/// Errors surfaced by option validation, option parsing and rasterization.
///
/// The reveal decision, layer classification and plan composition never fail.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Options or inputs failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Options could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// The CPU backend could not produce a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped external error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RevealError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`RevealError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

impl From<serde_json::Error> for RevealError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
