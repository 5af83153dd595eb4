/// Convenience result type used across Inkmorph.
pub type InkmorphResult<T> = Result<T, InkmorphError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum InkmorphError {
    /// Invalid caller-provided data (bitmaps, buffers, configuration).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while extracting pixel samples from bitmaps.
    #[error("sampling error: {0}")]
    Sampling(String),

    /// Errors while advancing or constructing the animation state.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while drawing onto a caller-supplied frame.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InkmorphError {
    /// Build a [`InkmorphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`InkmorphError::Sampling`] value.
    pub fn sampling(msg: impl Into<String>) -> Self {
        Self::Sampling(msg.into())
    }

    /// Build a [`InkmorphError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`InkmorphError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
