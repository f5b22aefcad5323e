//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! The `Display` text carries internal detail for logs; clients only ever
//! see [`AuthError::client_message`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Admin email or password digest is not configured
    #[error("Server configuration error: {0}")]
    Configuration(String),

    /// Unknown email or wrong password (indistinguishable on the wire)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No session cookie on the request
    #[error("No session")]
    NoSession,

    /// Session cookie could not be verified or decoded
    #[error("Malformed session: {0}")]
    MalformedSession(String),

    /// Session token is past its expiry
    #[error("Session expired")]
    SessionExpired,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials
            | AuthError::NoSession
            | AuthError::MalformedSession(_)
            | AuthError::SessionExpired => StatusCode::UNAUTHORIZED,
            AuthError::Configuration(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::NoSession
            | AuthError::MalformedSession(_)
            | AuthError::SessionExpired => ErrorKind::Unauthorized,
            AuthError::Configuration(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Message returned to the client in the error envelope
    pub fn client_message(&self) -> &'static str {
        match self {
            AuthError::Configuration(_) => "Server configuration error",
            AuthError::InvalidCredentials => "Invalid credentials",
            AuthError::NoSession => "No session",
            AuthError::MalformedSession(_) => "Invalid session",
            AuthError::SessionExpired => "Session expired",
            AuthError::Internal(_) => "Internal server error",
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.client_message())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Configuration(detail) => {
                tracing::error!(detail = %detail, "Auth configuration error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::MalformedSession(reason) => {
                tracing::debug!(reason = %reason, "Rejected malformed session cookie");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
