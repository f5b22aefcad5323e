//! reqwest-backed Upstream Fetcher

use axum::body::Body;
use reqwest::Client;
use reqwest::redirect::Policy;

use crate::domain::upstream::{UpstreamError, UpstreamFetcher, UpstreamRequest, UpstreamResponse};

/// Fetcher that talks HTTP to the registry service
///
/// Redirects are returned to the client rather than followed.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: Client,
}

impl HttpUpstream {
    pub fn new() -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .map_err(|e| UpstreamError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl UpstreamFetcher for HttpUpstream {
    async fn fetch(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError> {
        let url = reqwest::Url::parse(&request.url)
            .map_err(|e| UpstreamError::InvalidUrl(format!("{}: {}", request.url, e)))?;

        let mut builder = self
            .client
            .request(request.method, url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = Body::from_stream(response.bytes_stream());

        Ok(UpstreamResponse {
            status,
            headers,
            body,
        })
    }
}
