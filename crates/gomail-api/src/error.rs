//! Error types for API operations.

use thiserror::Error;

/// Errors that can occur when talking to the GoMail service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    ///
    /// `message` carries the server's `{"message": ...}` body when the
    /// response contained one.
    #[error("server returned {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Server-provided error message, if any.
        message: Option<String>,
    },

    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Server-provided message for this error, if one was present.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Result type alias using [`ApiError`].
pub type Result<T> = std::result::Result<T, ApiError>;
