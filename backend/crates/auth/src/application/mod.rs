//! Application Layer
//!
//! Use cases and the session codec.

pub mod check_session;
pub mod config;
pub mod session_codec;
pub mod sign_in;
pub mod sign_out;

// Re-exports
pub use check_session::{CheckSessionUseCase, SessionInfoOutput};
pub use config::AuthConfig;
pub use session_codec::{IssuedSession, SessionCodec};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
