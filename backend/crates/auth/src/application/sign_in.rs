//! Sign In Use Case
//!
//! Checks the submitted credential against the configured admin and issues
//! a session.

use std::net::IpAddr;
use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::session_codec::{IssuedSession, SessionCodec};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    /// Submitted email (compared case-insensitively)
    pub email: String,
    /// Submitted password
    pub password: ClearTextPassword,
    /// Client IP, for logging only
    pub client_ip: Option<IpAddr>,
}

/// Sign in output
pub struct SignInOutput {
    /// Configured admin email, as stored in configuration
    pub email: String,
    pub session: IssuedSession,
}

/// Sign in use case
pub struct SignInUseCase {
    config: Arc<AuthConfig>,
    codec: SessionCodec,
}

impl SignInUseCase {
    pub fn new(config: Arc<AuthConfig>, codec: SessionCodec) -> Self {
        Self { config, codec }
    }

    pub fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let (admin_email, digest) = match (
            self.config.admin_email.as_ref(),
            self.config.admin_password_digest.as_ref(),
        ) {
            (Some(email), Some(digest)) => (email, digest),
            (email, _) => {
                let missing = if email.is_none() {
                    "ADMIN_EMAIL"
                } else {
                    "ADMIN_PASSWORD"
                };
                return Err(AuthError::Configuration(format!("{} is not set", missing)));
            }
        };

        // Both checks run before branching so a wrong email costs the same as a wrong password
        let email_ok = admin_email.matches(&input.email);
        let password_ok = digest.verify(&input.password);

        if !(email_ok && password_ok) {
            tracing::debug!(client_ip = ?input.client_ip, "Credential mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let session = self.codec.issue(admin_email.as_str())?;

        tracing::info!(
            email = %admin_email,
            nonce = %session.token.nonce,
            client_ip = ?input.client_ip,
            "Admin signed in"
        );

        Ok(SignInOutput {
            email: admin_email.as_str().to_string(),
            session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // sha256("admin123")
    const DIGEST: &str = "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9";

    fn use_case(config: AuthConfig) -> SignInUseCase {
        let config = Arc::new(config);
        SignInUseCase::new(config.clone(), SessionCodec::new(config))
    }

    fn input(email: &str, password: &str) -> SignInInput {
        SignInInput {
            email: email.to_string(),
            password: ClearTextPassword::new(password.to_string()),
            client_ip: None,
        }
    }

    #[test]
    fn test_success_returns_configured_email() {
        let uc = use_case(AuthConfig::development().with_admin("Admin@Example.com", DIGEST));

        let output = uc.execute(input("admin@EXAMPLE.com", "admin123")).unwrap();
        assert_eq!(output.email, "Admin@Example.com");
        assert_eq!(output.session.token.email, "Admin@Example.com");
    }

    #[test]
    fn test_wrong_password() {
        let uc = use_case(AuthConfig::development().with_admin("admin@example.com", DIGEST));

        let result = uc.execute(input("admin@example.com", "admin124"));
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_wrong_email() {
        let uc = use_case(AuthConfig::development().with_admin("admin@example.com", DIGEST));

        let result = uc.execute(input("other@example.com", "admin123"));
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_password_is_case_sensitive() {
        let uc = use_case(AuthConfig::development().with_admin("admin@example.com", DIGEST));

        let result = uc.execute(input("admin@example.com", "ADMIN123"));
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_missing_configuration() {
        let uc = use_case(AuthConfig::development());
        let result = uc.execute(input("admin@example.com", "admin123"));
        assert!(matches!(result, Err(AuthError::Configuration(m)) if m.contains("ADMIN_EMAIL")));

        let mut config = AuthConfig::development().with_admin("admin@example.com", DIGEST);
        config.admin_password_digest = None;
        let result = use_case(config).execute(input("admin@example.com", "admin123"));
        assert!(matches!(result, Err(AuthError::Configuration(m)) if m.contains("ADMIN_PASSWORD")));

        let mut config = AuthConfig::development().with_admin("admin@example.com", DIGEST);
        config.admin_email = None;
        let result = use_case(config).execute(input("admin@example.com", "admin123"));
        assert!(matches!(result, Err(AuthError::Configuration(m)) if m.contains("ADMIN_EMAIL")));
    }
}
