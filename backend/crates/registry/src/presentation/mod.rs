//! Presentation Layer
//!
//! HTTP handler and router.

pub mod handlers;
pub mod router;

pub use handlers::RegistryAppState;
pub use router::{REGISTRY_MOUNT, registry_router};
