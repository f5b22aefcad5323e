//! Sign Out Use Case
//!
//! Clears the session cookie. Tokens are self-contained, so there is nothing
//! to delete server-side and the caller does not need to be signed in.

use crate::application::session_codec::SessionCodec;

/// Sign out use case
pub struct SignOutUseCase {
    codec: SessionCodec,
}

impl SignOutUseCase {
    pub fn new(codec: SessionCodec) -> Self {
        Self { codec }
    }

    /// Returns the `Set-Cookie` value that revokes the session cookie
    pub fn execute(&self) -> String {
        tracing::debug!("Session cookie revoked");
        self.codec.revoke()
    }
}
