//! HTTP Handlers

use axum::Json;
use axum::body::to_bytes;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use std::net::SocketAddr;
use std::sync::Arc;

use platform::client::extract_client_ip;
use platform::cookie::{extract_cookie, set_cookie_header};
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, SessionCodec, SignInInput, SignInUseCase, SignOutUseCase,
};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, LoginResponse, LogoutResponse, VerifyResponse};

/// Upper bound for a login body; the payload is two short strings
const LOGIN_BODY_LIMIT: usize = 64 * 1024;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState {
    pub config: Arc<AuthConfig>,
    pub codec: SessionCodec,
}

impl AuthAppState {
    pub fn new(config: AuthConfig) -> Self {
        let config = Arc::new(config);
        let codec = SessionCodec::new(config.clone());
        Self { config, codec }
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
///
/// The body is parsed by hand so that an unreadable or incomplete body ends up
/// in the same 500 envelope as any other unexpected failure.
pub async fn login(
    State(state): State<AuthAppState>,
    req: Request,
) -> AuthResult<impl IntoResponse> {
    let direct_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    let client_ip = extract_client_ip(req.headers(), direct_ip);

    let bytes = to_bytes(req.into_body(), LOGIN_BODY_LIMIT)
        .await
        .map_err(|e| AuthError::Internal(format!("Failed to read login body: {}", e)))?;
    let body: LoginRequest = serde_json::from_slice(&bytes)
        .map_err(|e| AuthError::Internal(format!("Invalid login body: {}", e)))?;

    let use_case = SignInUseCase::new(state.config.clone(), state.codec.clone());
    let output = use_case.execute(SignInInput {
        email: body.email,
        password: ClearTextPassword::new(body.password),
        client_ip,
    })?;

    let cookie = cookie_header(&output.session.set_cookie)?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            success: true,
            email: output.email,
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
pub async fn logout(State(state): State<AuthAppState>) -> AuthResult<impl IntoResponse> {
    let use_case = SignOutUseCase::new(state.codec.clone());
    let cookie = cookie_header(&use_case.execute())?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LogoutResponse { success: true }),
    ))
}

// ============================================================================
// Verify
// ============================================================================

/// GET /api/auth/verify
pub async fn verify(
    State(state): State<AuthAppState>,
    headers: HeaderMap,
) -> AuthResult<Json<VerifyResponse>> {
    let cookie = extract_cookie(&headers, state.codec.cookie_name());

    let use_case = CheckSessionUseCase::new(state.codec.clone());
    let output = use_case.execute(cookie.as_deref())?;

    Ok(Json(VerifyResponse {
        valid: true,
        email: output.email,
    }))
}

fn cookie_header(cookie: &str) -> AuthResult<HeaderValue> {
    set_cookie_header(cookie)
        .map_err(|e| AuthError::Internal(format!("Invalid Set-Cookie value: {}", e)))
}
