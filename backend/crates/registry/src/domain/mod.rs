//! Domain Layer
//!
//! Pure proxy rules and the upstream capability trait.

pub mod headers;
pub mod target;
pub mod upstream;

pub use target::{resolve_target, strip_mount};
pub use upstream::{UpstreamFetcher, UpstreamRequest, UpstreamResponse};
