/// Convenience result type used across scrollscape.
pub type ScrollscapeResult<T> = Result<T, ScrollscapeError>;

/// Error taxonomy for construction and configuration APIs.
///
/// Per-frame operations never return errors; only building tracks, parsing paths and loading
/// configuration can fail.
#[derive(thiserror::Error, Debug)]
pub enum ScrollscapeError {
    /// Input violates a documented invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// SVG path data could not be parsed.
    #[error("path error at byte {offset}: {message}")]
    Path {
        /// Byte offset of the offending input.
        offset: usize,
        /// Human-readable reason.
        message: String,
    },

    /// Stage configuration is inconsistent.
    #[error("config error: {0}")]
    Config(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollscapeError {
    /// Build a [`ScrollscapeError::Validation`] error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollscapeError::Path`] error.
    pub fn path(offset: usize, msg: impl Into<String>) -> Self {
        Self::Path {
            offset,
            message: msg.into(),
        }
    }

    /// Build a [`ScrollscapeError::Config`] error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScrollscapeError::Serde`] error.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScrollscapeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
