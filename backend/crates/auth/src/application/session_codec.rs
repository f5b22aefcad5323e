//! Session Codec
//!
//! Serializes session tokens into signed cookie values and back.
//!
//! Wire format: `base64url(json) "." base64url(hmac_sha256(secret, base64url(json)))`
//! with no padding. The JSON carries `email`, `expiresAt` and `nonce`.

use std::sync::Arc;

use platform::cookie::CookieConfig;
use platform::crypto::{from_base64_url, hmac_sha256, to_base64_url, verify_hmac_sha256};

use crate::application::config::AuthConfig;
use crate::domain::entity::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};

/// A freshly issued session
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: SessionToken,
    /// Signed cookie value
    pub value: String,
    /// Full `Set-Cookie` header value
    pub set_cookie: String,
}

/// Signs, parses and revokes session cookies
#[derive(Clone)]
pub struct SessionCodec {
    config: Arc<AuthConfig>,
    cookie: CookieConfig,
}

impl SessionCodec {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        let cookie = config.cookie_config();
        Self { config, cookie }
    }

    /// Issue a new session for `email`, expiring after the configured TTL
    pub fn issue(&self, email: &str) -> AuthResult<IssuedSession> {
        let token = SessionToken::new(email, self.config.session_ttl);
        let value = self.encode(&token)?;
        let set_cookie = self.cookie.build_set_cookie(&value);

        Ok(IssuedSession {
            token,
            value,
            set_cookie,
        })
    }

    /// Encode and sign a token
    pub fn encode(&self, token: &SessionToken) -> AuthResult<String> {
        let json = serde_json::to_vec(token)
            .map_err(|e| AuthError::Internal(format!("Failed to serialize session: {}", e)))?;
        let payload = to_base64_url(&json);
        let signature = hmac_sha256(&self.config.session_secret, payload.as_bytes());

        Ok(format!("{}.{}", payload, to_base64_url(&signature)))
    }

    /// Verify and decode a cookie value. Does not check expiry.
    pub fn parse(&self, value: &str) -> AuthResult<SessionToken> {
        let (payload, signature_b64) = value
            .split_once('.')
            .ok_or_else(|| AuthError::MalformedSession("missing signature".to_string()))?;

        let signature = from_base64_url(signature_b64)
            .map_err(|_| AuthError::MalformedSession("signature is not base64url".to_string()))?;

        if !verify_hmac_sha256(&self.config.session_secret, payload.as_bytes(), &signature) {
            return Err(AuthError::MalformedSession("bad signature".to_string()));
        }

        let json = from_base64_url(payload)
            .map_err(|_| AuthError::MalformedSession("payload is not base64url".to_string()))?;

        serde_json::from_slice(&json)
            .map_err(|e| AuthError::MalformedSession(format!("payload is not a session: {}", e)))
    }

    /// Expired when `now_ms` is strictly past the token's expiry
    pub fn is_expired(&self, token: &SessionToken, now_ms: i64) -> bool {
        token.is_expired_at(now_ms)
    }

    /// `Set-Cookie` value that clears the session cookie
    pub fn revoke(&self) -> String {
        self.cookie.build_delete_cookie()
    }

    /// Name of the session cookie
    pub fn cookie_name(&self) -> &str {
        &self.cookie.name
    }
}
