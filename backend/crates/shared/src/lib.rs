//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of gateway vocabulary:
//! - Common error types, result aliases and the JSON error envelope
//! - Typed identifiers (request IDs, session nonces)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across the auth and registry crates.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
