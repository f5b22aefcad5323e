//! Registry Reverse Proxy Module
//!
//! Forwards everything under `/api/registry` (with or without a trailing `/`)
//! to an internal registry service.
//!
//! Clean Architecture structure:
//! - `domain/` - Target URL mapping, header policy, upstream fetcher trait
//! - `application/` - Configuration, forward use case
//! - `infra/` - reqwest-backed fetcher
//! - `presentation/` - HTTP handler, router
//!
//! ## Behaviour
//! - Method, headers and (for non-GET/HEAD) body are forwarded
//! - Upstream status and headers are returned as-is, the body is streamed
//! - No authentication; the deployment restricts who can reach this path

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::RegistryConfig;
pub use domain::upstream::{UpstreamError, UpstreamFetcher, UpstreamRequest, UpstreamResponse};
pub use error::{RegistryError, RegistryResult};
pub use infra::http::HttpUpstream;
pub use presentation::router::{REGISTRY_MOUNT, registry_router};
