//! Infrastructure Layer
//!
//! Upstream fetcher implementations.

pub mod http;

pub use http::HttpUpstream;
