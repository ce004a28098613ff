//! Service and configuration error types.

use std::path::PathBuf;

use outlinetext_parser::ParseError;
use thiserror::Error;

/// Errors returned by [`ParseService`](crate::ParseService).
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The document exceeds the configured size limit.
    #[error("Document is too large: {size} bytes (limit {max})")]
    DocumentTooLarge { size: usize, max: usize },

    /// The parser backend failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ServiceError {
    /// Returns true if the error was caused by the request rather than the backend.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::DocumentTooLarge { .. })
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates an invalid configuration error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
