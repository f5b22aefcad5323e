//! Domain Layer
//!
//! Contains the session token entity and the admin email value object.

pub mod entity;
pub mod value_object;

// Re-exports
pub use entity::session_token::SessionToken;
pub use value_object::email::AdminEmail;
