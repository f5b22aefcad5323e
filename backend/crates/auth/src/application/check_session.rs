//! Check Session Use Case
//!
//! Verifies the session cookie presented by the browser.

use crate::application::session_codec::SessionCodec;
use crate::domain::entity::session_token::now_ms;
use crate::error::{AuthError, AuthResult};

/// Session info output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfoOutput {
    pub email: String,
    pub expires_at_ms: i64,
}

/// Check session use case
pub struct CheckSessionUseCase {
    codec: SessionCodec,
}

impl CheckSessionUseCase {
    pub fn new(codec: SessionCodec) -> Self {
        Self { codec }
    }

    pub fn execute(&self, cookie_value: Option<&str>) -> AuthResult<SessionInfoOutput> {
        self.execute_at(cookie_value, now_ms())
    }

    /// Check against an explicit clock (Unix timestamp ms)
    pub fn execute_at(&self, cookie_value: Option<&str>, now_ms: i64) -> AuthResult<SessionInfoOutput> {
        let value = match cookie_value {
            Some(v) if !v.is_empty() => v,
            _ => return Err(AuthError::NoSession),
        };

        let token = self.codec.parse(value)?;

        if self.codec.is_expired(&token, now_ms) {
            return Err(AuthError::SessionExpired);
        }

        Ok(SessionInfoOutput {
            email: token.email,
            expires_at_ms: token.expires_at_ms,
        })
    }
}
