//! HTTP error types.
//!
//! Maps the error taxonomy to HTTP responses. Client outcomes (missing
//! tenant segment, bad credentials, unknown routes) map to 4xx codes;
//! server faults map to 500 and are logged before the response is built.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No tenant segment in the request path.
    #[error("no tenant in request path")]
    TenantNotResolved,

    /// A tenant handler ran without a tenant context.
    ///
    /// This means the tenant middleware did not run for a route that
    /// requires it. Always a server fault.
    #[error("tenant context was read before it was set")]
    TenantContextMissing,

    /// Username or password did not match.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// No route matched the request path.
    #[error("no route for path: {0}")]
    NotFound(String),

    /// Core-layer error.
    #[error(transparent)]
    Core(#[from] idsvr_core::Error),

    /// Store-layer error.
    #[error("store error: {0}")]
    Store(#[from] idsvr_stores::StoreError),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::TenantNotResolved | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Core(err) => match err {
                idsvr_core::Error::Authentication => StatusCode::UNAUTHORIZED,
                idsvr_core::Error::Validation(_) => StatusCode::BAD_REQUEST,
                idsvr_core::Error::NotFound(_) => StatusCode::NOT_FOUND,
                idsvr_core::Error::Config(_) | idsvr_core::Error::Internal => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::TenantContextMissing | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::TenantNotResolved | Self::NotFound(_) => "not_found",
            Self::TenantContextMissing => "configuration_error",
            Self::InvalidCredentials => "invalid_credentials",
            Self::Core(err) => match err {
                idsvr_core::Error::Authentication => "invalid_credentials",
                idsvr_core::Error::Validation(_) => "validation_error",
                idsvr_core::Error::NotFound(_) => "not_found",
                idsvr_core::Error::Config(_) => "configuration_error",
                idsvr_core::Error::Internal => "internal_error",
            },
            Self::Store(_) => "store_error",
        }
    }
}

/// API error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error: String,
    /// Human-readable error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed with a server fault");
        }
        let body = ErrorResponse {
            error: self.error_code().to_string(),
            error_description: Some(self.to_string()),
            details: None,
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
