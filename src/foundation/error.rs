/// Convenience result type used across scrollfall.
pub type ScrollfallResult<T> = Result<T, ScrollfallError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// Frame computation itself never fails; errors only arise while loading or
/// validating scene configuration.
#[derive(thiserror::Error, Debug)]
pub enum ScrollfallError {
    /// Invalid user-provided values (non-finite numbers, unknown layers).
    #[error("validation error: {0}")]
    Validation(String),

    /// Scene configuration could not be read.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl ScrollfallError {
    /// Build a [`ScrollfallError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollfallError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScrollfallError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
