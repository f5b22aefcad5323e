//! HTTP-level tests for the login / logout / verify endpoints.

use auth::application::session_codec::SessionCodec;
use auth::domain::SessionToken;
use auth::{AuthConfig, auth_router};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode, header},
};
use std::sync::Arc;
use tower::ServiceExt;

const EMAIL: &str = "admin@example.com";
// sha256("admin123")
const DIGEST: &str = "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9";
const SECRET: [u8; 32] = [42u8; 32];

fn config() -> AuthConfig {
    AuthConfig::development()
        .with_admin(EMAIL, DIGEST)
        .with_session_secret(SECRET)
}

fn app() -> Router {
    auth_router(config())
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn set_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .unwrap()
        .to_string()
}

/// Cookie value without attributes, e.g. `session=abc.def`
fn cookie_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap().to_string()
}

async fn login(app: &Router, body: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn verify(app: &Router, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri("/verify");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn logout(app: &Router) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_success_sets_session_cookie() {
    let app = app();

    let response = login(&app, r#"{"email":"admin@example.com","password":"admin123"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = set_cookie(&response);
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=604800"));
    assert!(!cookie.contains("Secure"));

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["email"], EMAIL);
}

#[tokio::test]
async fn test_login_token_is_unexpired() {
    let app = app();
    let response = login(&app, r#"{"email":"admin@example.com","password":"admin123"}"#).await;
    let pair = cookie_pair(&set_cookie(&response));
    let value = pair.trim_start_matches("session=");

    let codec = SessionCodec::new(Arc::new(config()));
    let token = codec.parse(value).unwrap();
    assert_eq!(token.email, EMAIL);
    assert!(!token.is_expired());
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let app = app();
    let response = login(&app, r#"{"email":"ADMIN@Example.COM","password":"admin123"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["email"], EMAIL);
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
    let app = app();

    let wrong_password =
        login(&app, r#"{"email":"admin@example.com","password":"nope"}"#).await;
    let unknown_email =
        login(&app, r#"{"email":"someone@example.com","password":"admin123"}"#).await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    assert!(wrong_password.headers().get(header::SET_COOKIE).is_none());

    let a = body_json(wrong_password).await;
    let b = body_json(unknown_email).await;
    assert_eq!(a, b);
    assert_eq!(a, serde_json::json!({ "error": "Invalid credentials" }));
}

#[tokio::test]
async fn test_login_without_configured_admin() {
    let app = auth_router(AuthConfig::development());

    let response = login(&app, r#"{"email":"admin@example.com","password":"admin123"}"#).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "Server configuration error" })
    );
}

#[tokio::test]
async fn test_login_malformed_body_is_internal_error() {
    let app = app();

    for body in ["not json", "{}", r#"{"email":"admin@example.com"}"#] {
        let response = login(&app, body).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "body {body:?}");
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Internal server error" })
        );
    }
}

#[tokio::test]
async fn test_production_cookie_is_secure() {
    let mut config = config();
    config.cookie_secure = true;
    let app = auth_router(config);

    let response = login(&app, r#"{"email":"admin@example.com","password":"admin123"}"#).await;
    assert!(set_cookie(&response).contains("; Secure"));
}

// ============================================================================
// Logout
// ============================================================================

#[tokio::test]
async fn test_logout_always_succeeds_and_is_idempotent() {
    let app = app();

    for _ in 0..2 {
        let response = logout(&app).await;
        assert_eq!(response.status(), StatusCode::OK);

        let cookie = set_cookie(&response);
        assert!(cookie.starts_with("session=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Path=/"));

        assert_eq!(body_json(response).await, serde_json::json!({ "success": true }));
    }
}

// ============================================================================
// Verify
// ============================================================================

#[tokio::test]
async fn test_verify_after_login() {
    let app = app();
    let response = login(&app, r#"{"email":"admin@example.com","password":"admin123"}"#).await;
    let pair = cookie_pair(&set_cookie(&response));

    let response = verify(&app, Some(pair.as_str())).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "valid": true, "email": EMAIL })
    );
}

#[tokio::test]
async fn test_verify_without_cookie() {
    let app = app();

    let response = verify(&app, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, serde_json::json!({ "error": "No session" }));

    // What the browser sends after logout
    let response = verify(&app, Some("session=")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, serde_json::json!({ "error": "No session" }));
}

#[tokio::test]
async fn test_verify_garbage_cookie() {
    let app = app();

    let response = verify(&app, Some("session=garbage")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "Invalid session" })
    );
}

#[tokio::test]
async fn test_verify_tampered_signature() {
    let app = app();
    let response = login(&app, r#"{"email":"admin@example.com","password":"admin123"}"#).await;
    let pair = cookie_pair(&set_cookie(&response));

    // Flip the last signature character
    let mut tampered = pair.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let response = verify(&app, Some(tampered.as_str())).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "Invalid session" })
    );
}

#[tokio::test]
async fn test_verify_expired_session() {
    let app = app();
    let codec = SessionCodec::new(Arc::new(config()));
    let value = codec
        .encode(&SessionToken::with_expiry(EMAIL, 1_000))
        .unwrap();

    let response = verify(&app, Some(format!("session={value}").as_str())).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "Session expired" })
    );
}

#[tokio::test]
async fn test_verify_reads_session_among_other_cookies() {
    let app = app();
    let response = login(&app, r#"{"email":"admin@example.com","password":"admin123"}"#).await;
    let pair = cookie_pair(&set_cookie(&response));

    let response = verify(&app, Some(format!("theme=dark; {pair}; lang=ja").as_str())).await;
    assert_eq!(response.status(), StatusCode::OK);
}
