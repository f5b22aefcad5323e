//! Upstream Capability
//!
//! Interface to the registry service. Implementation is in infrastructure layer.

use axum::body::Body;
use axum::http::{HeaderMap, Method, StatusCode};
use bytes::Bytes;
use kernel::id::ProxyRequestId;
use thiserror::Error;

/// Request sent to the upstream
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub id: ProxyRequestId,
    pub method: Method,
    /// Absolute target URL
    pub url: String,
    pub headers: HeaderMap,
    /// `None` for GET and HEAD
    pub body: Option<Bytes>,
}

/// Response received from the upstream
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Streamed body; dropping it aborts the upstream transfer
    pub body: Body,
}

/// Upstream failure
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Transport(String),
}

/// Upstream fetcher trait
#[trait_variant::make(UpstreamFetcher: Send)]
pub trait LocalUpstreamFetcher {
    /// Send one request and return the response head with a streaming body
    async fn fetch(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError>;
}
