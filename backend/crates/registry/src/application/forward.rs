//! Forward Use Case
//!
//! Relays one request to the upstream and hands back its response.

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Method};
use axum::response::Response;
use kernel::id::ProxyRequestId;

use crate::application::config::RegistryConfig;
use crate::domain::headers::{request_headers, response_headers};
use crate::domain::target::resolve_target;
use crate::domain::upstream::{UpstreamFetcher, UpstreamRequest};
use crate::error::{RegistryError, RegistryResult};

/// Forward input
pub struct ForwardInput {
    pub method: Method,
    /// Path after the mount point
    pub remainder: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Body,
}

/// Forward use case
pub struct ForwardUseCase<F>
where
    F: UpstreamFetcher,
{
    fetcher: Option<Arc<F>>,
    config: Arc<RegistryConfig>,
}

impl<F> ForwardUseCase<F>
where
    F: UpstreamFetcher + Sync,
{
    pub fn new(fetcher: Option<Arc<F>>, config: Arc<RegistryConfig>) -> Self {
        Self { fetcher, config }
    }

    pub async fn execute(&self, input: ForwardInput) -> RegistryResult<Response> {
        let fetcher = self.fetcher.as_ref().ok_or(RegistryError::Unavailable)?;

        let url = resolve_target(
            &self.config.upstream_origin,
            &input.remainder,
            input.query.as_deref(),
        );

        let body = if input.method == Method::GET || input.method == Method::HEAD {
            None
        } else {
            let bytes = to_bytes(input.body, self.config.max_body_bytes)
                .await
                .map_err(|e| RegistryError::RequestBody(e.to_string()))?;
            Some(bytes)
        };

        let request = UpstreamRequest {
            id: ProxyRequestId::new(),
            method: input.method,
            url,
            headers: request_headers(&input.headers),
            body,
        };
        let id = request.id;
        let method = request.method.clone();

        tracing::debug!(request_id = %id, method = %method, url = %request.url, "Forwarding to registry");

        let upstream = fetcher.fetch(request).await?;

        tracing::info!(
            request_id = %id,
            method = %method,
            path = %input.remainder,
            status = upstream.status.as_u16(),
            "Registry request proxied"
        );

        let mut response = Response::new(upstream.body);
        *response.status_mut() = upstream.status;
        *response.headers_mut() = response_headers(&upstream.headers);

        Ok(response)
    }
}
