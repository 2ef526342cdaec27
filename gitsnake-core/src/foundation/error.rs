/// Convenience result type used across gitsnake.
pub type SnakeResult<T> = Result<T, SnakeError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Planning itself never fails on any activity input; these variants cover
/// configuration, data sources and the serialization stages around it.
#[derive(thiserror::Error, Debug)]
pub enum SnakeError {
    /// Invalid engine configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A contribution source could not produce activity records.
    #[error("source error: {0}")]
    Source(String),

    /// Errors while rasterizing or encoding a rendered snake.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SnakeError {
    /// Build a [`SnakeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SnakeError::Source`] value.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Build a [`SnakeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SnakeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
