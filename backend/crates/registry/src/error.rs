//! Registry Error Types
//!
//! Proxy failures always answer 500 with the `{"error": ...}` envelope.
//! Whether upstream detail reaches the client is decided per deployment.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::upstream::UpstreamError;

/// Registry-specific result type alias
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Message used in place of upstream detail when it must not be exposed
pub const GENERIC_PROXY_MESSAGE: &str = "Upstream request failed";

/// Registry-specific error variants
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No upstream capability configured
    #[error("Service binding not configured")]
    Unavailable,

    /// Inbound body could not be buffered
    #[error("Failed to read request body: {0}")]
    RequestBody(String),

    /// Upstream call failed
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl RegistryError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InternalServerError
    }

    /// Convert to AppError
    ///
    /// With `expose_detail` the underlying error text is returned to the
    /// client; otherwise proxy failures share one generic message.
    pub fn to_app_error(&self, expose_detail: bool) -> AppError {
        match self {
            RegistryError::Unavailable => AppError::new(self.kind(), self.to_string()),
            _ if expose_detail => AppError::new(self.kind(), self.to_string()),
            _ => AppError::new(self.kind(), GENERIC_PROXY_MESSAGE),
        }
    }

    /// Render the error, logging it first
    pub fn into_response_with_detail(self, expose_detail: bool) -> Response {
        self.log();
        self.to_app_error(expose_detail).into_response()
    }

    fn log(&self) {
        match self {
            RegistryError::Unavailable => {
                tracing::error!("Registry upstream is not configured");
            }
            RegistryError::RequestBody(detail) => {
                tracing::warn!(detail = %detail, "Rejected proxy request body");
            }
            RegistryError::Upstream(e) => {
                tracing::error!(error = %e, "Registry upstream request failed");
            }
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        self.into_response_with_detail(false)
    }
}
