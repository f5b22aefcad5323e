//! Application Router
//!
//! Mounts every feature router and the shared layers.

use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use auth::auth_router;
use kernel::error::app_error::AppError;
use registry::{HttpUpstream, REGISTRY_MOUNT, UpstreamFetcher, registry_router};

use crate::config::ServerConfig;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn not_found() -> AppError {
    AppError::not_found("Not found")
}

/// Build the full application router
pub fn build_app(config: ServerConfig) -> anyhow::Result<Router> {
    let upstream = if config.registry_enabled {
        tracing::info!(origin = %config.registry.upstream_origin, "Registry proxy enabled");
        Some(Arc::new(HttpUpstream::new()?))
    } else {
        tracing::warn!("REGISTRY_UPSTREAM_URL not set, registry proxy will answer 500");
        None
    };

    Ok(build_app_with_upstream(config, upstream))
}

/// Build the application router around an arbitrary registry fetcher
///
/// The registry routes carry their own `/api/registry` prefix, so both
/// `/api/registry` and `/api/registry/` reach the proxy.
pub fn build_app_with_upstream<F>(config: ServerConfig, upstream: Option<Arc<F>>) -> Router
where
    F: UpstreamFetcher + Sync + 'static,
{
    let cors = cors_layer(&config.frontend_origins);

    Router::new()
        .route("/api/health", get(health))
        .nest("/api/auth", auth_router(config.auth))
        .merge(registry_router(REGISTRY_MOUNT, config.registry, upstream))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}
