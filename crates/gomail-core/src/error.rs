//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Remote service call failed.
    #[error("API error: {0}")]
    Api(#[from] gomail_api::ApiError),

    /// Session token persistence failed.
    #[error("Token store error: {0}")]
    TokenStore(#[from] crate::session::TokenStoreError),

    /// Registration input rejected before any network call.
    #[error("Registration error: {0}")]
    Registration(#[from] crate::session::RegistrationError),

    /// Compose input rejected before any network call.
    #[error("Compose error: {0}")]
    Compose(#[from] crate::mailbox::ComposeError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
