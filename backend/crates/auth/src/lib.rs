//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session token entity, admin email value object
//! - `application/` - Configuration, session codec, use cases
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Single configured admin (email + SHA-256 password digest)
//! - Login / logout / verify under `/api/auth`
//!
//! ## Security Model
//! - No server-side session store; the cookie carries the whole token
//! - Tokens are HMAC-SHA256 signed with a server secret
//! - Cookies are `HttpOnly`, `SameSite=Strict`, and `Secure` in production

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::session_codec::SessionCodec;
pub use error::{AuthError, AuthResult};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
