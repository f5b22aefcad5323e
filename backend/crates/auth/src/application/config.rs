//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at start-up and
//! shared read-only with every handler.

use std::fmt;
use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::password::PasswordDigest;

use crate::domain::value_object::email::AdminEmail;

/// Session lifetime (7 days)
pub const SESSION_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Session cookie name
pub const SESSION_COOKIE_NAME: &str = "session";

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Configured admin email (absent → login answers 500)
    pub admin_email: Option<AdminEmail>,
    /// SHA-256 hex digest of the admin password (absent → login answers 500)
    pub admin_password_digest: Option<PasswordDigest>,
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session TTL
    pub session_ttl: Duration,
    /// Whether to set the Secure cookie attribute (production only)
    pub cookie_secure: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_email: None,
            admin_password_digest: None,
            session_cookie_name: SESSION_COOKIE_NAME.to_string(),
            session_secret: platform::crypto::random_key(),
            session_ttl: SESSION_TTL,
            cookie_secure: true,
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie, random secret)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::default()
        }
    }

    /// Set the admin credential
    pub fn with_admin(mut self, email: impl Into<String>, password_digest_hex: impl Into<String>) -> Self {
        self.admin_email = Some(AdminEmail::new(email));
        self.admin_password_digest = Some(PasswordDigest::from_hex(password_digest_hex));
        self
    }

    /// Set the HMAC key used to sign session tokens
    pub fn with_session_secret(mut self, secret: [u8; 32]) -> Self {
        self.session_secret = secret;
        self
    }

    /// Cookie attributes shared by issue and revoke
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs()),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("admin_email", &self.admin_email)
            .field("admin_password_digest", &self.admin_password_digest)
            .field("session_cookie_name", &self.session_cookie_name)
            .field("session_secret", &"[REDACTED]")
            .field("session_ttl", &self.session_ttl)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}
