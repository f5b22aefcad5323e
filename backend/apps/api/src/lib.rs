//! API Server
//!
//! Composes the auth and registry routers into one application.
//! Uses `kernel::error::AppError` for anything answered at this level.

pub mod app;
pub mod config;

pub use app::{build_app, build_app_with_upstream};
pub use config::{ConfigError, ServerConfig};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
