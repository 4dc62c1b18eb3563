//! Error handling for the identity server.
//!
//! ## NIST 800-53 Rev5: SI-11 (Error Handling)
//!
//! Error messages are designed to be informative for debugging while not
//! exposing sensitive information to end users.

use thiserror::Error;

/// Result type alias using the identity server error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for identity server operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error.
    ///
    /// Raised when the host is wired incorrectly, for example when a
    /// tenant-scoped component is used outside a resolved tenant scope.
    /// Always a server fault, never a client outcome.
    #[error("configuration error: {0}")]
    Config(String),

    /// Authentication error.
    ///
    /// ## NIST 800-53 Rev5: IA-6 (Authentication Feedback)
    ///
    /// Authentication errors use generic messages to prevent user enumeration.
    #[error("authentication failed")]
    Authentication,

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Internal error.
    #[error("internal error")]
    Internal,
}

impl Error {
    /// Returns whether this error should be logged at error level.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Internal)
    }

    /// Returns whether this error represents a client error.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Authentication | Self::Validation(_) | Self::NotFound(_)
        )
    }
}
