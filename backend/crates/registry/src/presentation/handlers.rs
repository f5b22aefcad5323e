//! HTTP Handlers

use axum::extract::{Request, State};
use axum::response::Response;
use std::sync::Arc;

use crate::application::config::RegistryConfig;
use crate::application::forward::{ForwardInput, ForwardUseCase};
use crate::domain::target::strip_mount;
use crate::domain::upstream::UpstreamFetcher;

/// Shared state for registry handlers
pub struct RegistryAppState<F> {
    /// `None` when no upstream is configured
    pub fetcher: Option<Arc<F>>,
    pub config: Arc<RegistryConfig>,
    /// Path prefix the router is mounted at, without a trailing `/`
    pub mount: Arc<str>,
}

impl<F> Clone for RegistryAppState<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: self.fetcher.clone(),
            config: self.config.clone(),
            mount: self.mount.clone(),
        }
    }
}

/// ANY /api/registry, /api/registry/ and /api/registry/{*path}
pub async fn forward<F>(State(state): State<RegistryAppState<F>>, req: Request) -> Response
where
    F: UpstreamFetcher + Sync + 'static,
{
    let (parts, body) = req.into_parts();

    let input = ForwardInput {
        method: parts.method,
        remainder: strip_mount(parts.uri.path(), &state.mount)
            .trim_start_matches('/')
            .to_string(),
        query: parts.uri.query().map(str::to_string),
        headers: parts.headers,
        body,
    };

    let use_case = ForwardUseCase::new(state.fetcher.clone(), state.config.clone());
    match use_case.execute(input).await {
        Ok(response) => response,
        Err(e) => e.into_response_with_detail(state.config.expose_upstream_errors),
    }
}
