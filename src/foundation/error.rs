/// Convenience result type used across genloom.
pub type LoomResult<T> = Result<T, LoomError>;

/// Top-level error taxonomy used by generator, render and encode APIs.
#[derive(thiserror::Error, Debug)]
pub enum LoomError {
    /// Invalid user-provided parameters or job data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Geometry that cannot be turned into drawable output.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Errors while writing PNG/GIF output.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing job documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LoomError {
    /// Build a [`LoomError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LoomError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`LoomError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`LoomError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
