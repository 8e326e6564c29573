/// Convenience result type used across pxl2000.
pub type PxlResult<T> = Result<T, PxlError>;

/// Top-level error taxonomy used by filter APIs.
#[derive(thiserror::Error, Debug)]
pub enum PxlError {
    /// Invalid frame geometry, filter parameters or scheduler options.
    #[error("validation error: {0}")]
    Validation(String),

    /// A buffer could not be allocated (accumulator resize).
    #[error("resource error: {0}")]
    Resource(String),

    /// Errors when serializing or deserializing parameter files.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PxlError {
    /// Build a [`PxlError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PxlError::Resource`] value.
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }

    /// Build a [`PxlError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
