//! Parse error types.

use thiserror::Error;

/// Errors that a parsing backend can report.
///
/// The built-in [`OutlineTextParser`](crate::OutlineTextParser) never fails;
/// these variants exist for substituted backends.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The backend could not be brought up. Fatal for that backend instance.
    #[error("Parser initialization failed: {0}")]
    Initialization(String),

    /// The backend failed while parsing a document.
    #[error("Backend error: {0}")]
    Backend(String),
}

impl ParseError {
    /// Creates a new initialization error.
    pub fn initialization(message: impl Into<String>) -> Self {
        Self::Initialization(message.into())
    }

    /// Creates a new backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}
