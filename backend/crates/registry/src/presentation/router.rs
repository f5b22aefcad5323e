//! Registry Router

use axum::{Router, routing::any};
use std::sync::Arc;

use crate::application::config::RegistryConfig;
use crate::domain::upstream::UpstreamFetcher;
use crate::presentation::handlers::{self, RegistryAppState};

/// Default mount point
pub const REGISTRY_MOUNT: &str = "/api/registry";

/// Create the Registry router
///
/// Serves `mount`, `mount/` and everything below it. Routes carry the full
/// prefix, so merge the result rather than nesting it. Pass `None` when no
/// upstream is configured; every request then answers 500 without touching
/// the network.
pub fn registry_router<F>(mount: &str, config: RegistryConfig, fetcher: Option<Arc<F>>) -> Router
where
    F: UpstreamFetcher + Sync + 'static,
{
    let mount = mount.trim_end_matches('/');
    let state = RegistryAppState {
        fetcher,
        config: Arc::new(config),
        mount: Arc::from(mount),
    };

    let mut router = Router::new();
    if !mount.is_empty() {
        router = router.route(mount, any(handlers::forward::<F>));
    }

    router
        .route(&format!("{}/", mount), any(handlers::forward::<F>))
        .route(&format!("{}/{{*path}}", mount), any(handlers::forward::<F>))
        .with_state(state)
}
