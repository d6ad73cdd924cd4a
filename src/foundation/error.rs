/// Convenience result type used across stripbooth.
pub type StripResult<T> = Result<T, StripError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum StripError {
    /// Frame count outside the supported {2, 3, 4} set.
    ///
    /// Raised by the aspect-ratio lookup. Valid counts are a caller contract;
    /// this variant exists so an upstream bug fails the render instead of
    /// silently coercing to some nearby count.
    #[error("invalid frame count: {0} (expected 2, 3, or 4)")]
    InvalidFrameCount(u32),

    /// Invalid user-provided configuration or input data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing a compiled plan.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding or writing output images.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StripError {
    /// Build a [`StripError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StripError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`StripError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
