//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::config::AuthConfig;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router
///
/// Mount under `/api/auth`.
pub fn auth_router(config: AuthConfig) -> Router {
    let state = AuthAppState::new(config);

    Router::new()
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/verify", get(handlers::verify))
        .with_state(state)
}
