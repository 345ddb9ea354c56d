// Error types module

use thiserror::Error;

/// Centralized error type for the URL builder
///
/// The fluent configuration surface never fails. Errors only surface when
/// loading client options or when the signing primitive rejects its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThumborError {
    /// Configuration errors (invalid YAML, missing env vars, unreadable file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// HMAC key setup or digest failures
    #[error("Signing error: {0}")]
    Signing(String),
}

impl ThumborError {
    pub fn config(message: impl Into<String>) -> Self {
        ThumborError::Config(message.into())
    }

    pub fn signing(message: impl Into<String>) -> Self {
        ThumborError::Signing(message.into())
    }
}
