//! Store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// The in-memory stores in this crate never fail; the error type exists so
/// the store traits can be implemented over fallible backends without
/// changing their signatures. Absence of an entity is not an error: lookups
/// return `Ok(None)`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend failure (connection, query, timeout).
    #[error("store backend error: {0}")]
    Backend(String),

    /// Invalid data encountered in the store.
    #[error("invalid store data: {0}")]
    InvalidData(String),
}

impl StoreError {
    /// Creates a backend error.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Creates an invalid data error.
    #[must_use]
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }
}

impl From<StoreError> for idsvr_core::Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Backend(_) => Self::Internal,
            StoreError::InvalidData(message) => Self::Validation(message),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
