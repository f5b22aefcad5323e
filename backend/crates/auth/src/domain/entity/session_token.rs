//! Session Token Entity
//!
//! The self-contained record carried in the session cookie. There is no
//! server-side session table: the token is the session.

use chrono::Utc;
use kernel::id::SessionNonceId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Session token entity
///
/// Never mutated after issue; a new login replaces it entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SessionToken {
    /// Admin email the session was issued for
    pub email: String,
    /// Session expiration (Unix timestamp ms)
    #[serde(rename = "expiresAt")]
    pub expires_at_ms: i64,
    /// Random per-issue nonce (UUID v4)
    pub nonce: SessionNonceId,
}

impl SessionToken {
    /// Create a new token expiring `ttl` from now
    pub fn new(email: impl Into<String>, ttl: Duration) -> Self {
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        Self::with_expiry(email, now_ms().saturating_add(ttl_ms))
    }

    /// Create a token with an explicit expiry (Unix timestamp ms)
    pub fn with_expiry(email: impl Into<String>, expires_at_ms: i64) -> Self {
        Self {
            email: email.into(),
            expires_at_ms,
            nonce: SessionNonceId::new(),
        }
    }

    /// Expired when `now` is strictly past `expires_at_ms`
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms > self.expires_at_ms
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(now_ms())
    }
}

/// Current time as Unix timestamp ms
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
