//! Server Configuration
//!
//! Everything is read from the environment once at start-up.

use std::env;
use std::net::SocketAddr;

use auth::AuthConfig;
use auth::domain::AdminEmail;
use platform::crypto::{from_base64, random_key};
use platform::password::PasswordDigest;
use registry::RegistryConfig;
use registry::application::config::DEFAULT_MAX_BODY_BYTES;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub production: bool,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub registry: RegistryConfig,
    /// Whether an upstream was configured (`REGISTRY_UPSTREAM_URL`)
    pub registry_enabled: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let production = ["NODE_ENV", "APP_ENV"]
            .into_iter()
            .any(|key| var(key).is_some_and(|v| v.trim().eq_ignore_ascii_case("production")));

        // Server
        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDR".to_string(), e.to_string()))?;

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Auth
        let session_secret = match var("SESSION_SECRET") {
            Some(b64) => decode_secret(&b64)?,
            None if production => {
                return Err(ConfigError::MissingVar("SESSION_SECRET".to_string()));
            }
            None => {
                tracing::warn!("SESSION_SECRET not set, sessions will not survive a restart");
                random_key()
            }
        };

        let mut auth = AuthConfig::default().with_session_secret(session_secret);
        auth.cookie_secure = production;
        auth.admin_email = var("ADMIN_EMAIL").map(|email| AdminEmail::new(email.trim()));
        auth.admin_password_digest =
            var("ADMIN_PASSWORD").map(|digest| PasswordDigest::from_hex(digest.trim()));
        if auth.admin_email.is_none() {
            tracing::warn!("ADMIN_EMAIL not set, login will answer 500");
        }
        match &auth.admin_password_digest {
            Some(digest) if !digest.is_well_formed() => {
                tracing::warn!("ADMIN_PASSWORD is not a 64-character hex digest, login will always fail");
            }
            None => {
                tracing::warn!("ADMIN_PASSWORD not set, login will answer 500");
            }
            _ => {}
        }

        // Registry
        let upstream = var("REGISTRY_UPSTREAM_URL");
        let max_body_bytes = match var("REGISTRY_MAX_BODY_BYTES") {
            Some(v) => v.trim().parse::<usize>().map_err(|e| {
                ConfigError::InvalidValue("REGISTRY_MAX_BODY_BYTES".to_string(), e.to_string())
            })?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        let mut registry = RegistryConfig {
            max_body_bytes,
            expose_upstream_errors: !production,
            ..RegistryConfig::default()
        };
        if let Some(origin) = &upstream {
            registry = registry.with_origin(origin.trim());
        }

        Ok(Self {
            bind_addr,
            production,
            frontend_origins,
            auth,
            registry,
            registry_enabled: upstream.is_some(),
        })
    }
}

fn decode_secret(b64: &str) -> Result<[u8; 32], ConfigError> {
    let bytes = from_base64(b64.trim()).map_err(|e| {
        ConfigError::InvalidValue("SESSION_SECRET".to_string(), format!("invalid base64: {}", e))
    })?;

    bytes.try_into().map_err(|bytes: Vec<u8>| {
        ConfigError::InvalidValue(
            "SESSION_SECRET".to_string(),
            format!("expected 32 bytes, got {}", bytes.len()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    // base64 of 32 zero bytes
    const SECRET: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:31113".parse().unwrap());
        assert!(!config.production);
        assert!(!config.auth.cookie_secure);
        assert!(config.auth.admin_email.is_none());
        assert!(!config.registry_enabled);
        assert!(config.registry.expose_upstream_errors);
        assert_eq!(config.registry.max_body_bytes, 33_554_432);
        assert_eq!(
            config.frontend_origins,
            vec!["http://localhost:5173", "http://127.0.0.1:5173"]
        );
    }

    #[test]
    fn test_production_requires_secret() {
        let err = load(&[("NODE_ENV", "production")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(v) if v == "SESSION_SECRET"));

        let config = load(&[("APP_ENV", "production"), ("SESSION_SECRET", SECRET)]).unwrap();
        assert!(config.production);
        assert!(config.auth.cookie_secure);
        assert!(!config.registry.expose_upstream_errors);
        assert_eq!(config.auth.session_secret, [0u8; 32]);
    }

    #[test]
    fn test_secret_must_be_32_bytes() {
        let err = load(&[("SESSION_SECRET", "c2hvcnQ=")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(..)));

        let err = load(&[("SESSION_SECRET", "not base64!")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(..)));
    }

    #[test]
    fn test_admin_and_registry() {
        let config = load(&[
            ("ADMIN_EMAIL", "admin@example.com"),
            (
                "ADMIN_PASSWORD",
                "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9",
            ),
            ("REGISTRY_UPSTREAM_URL", "http://registry:5000"),
            ("REGISTRY_MAX_BODY_BYTES", "1024"),
            ("FRONTEND_ORIGINS", "https://admin.example.com, "),
        ])
        .unwrap();

        assert_eq!(config.auth.admin_email.unwrap().as_str(), "admin@example.com");
        assert!(config.auth.admin_password_digest.unwrap().is_well_formed());
        assert!(config.registry_enabled);
        assert_eq!(config.registry.upstream_origin, "http://registry:5000");
        assert_eq!(config.registry.max_body_bytes, 1024);
        assert_eq!(config.frontend_origins, vec!["https://admin.example.com"]);
    }

    #[test]
    fn test_admin_variables_are_independent() {
        let config = load(&[("ADMIN_EMAIL", "admin@example.com")]).unwrap();
        assert_eq!(config.auth.admin_email.unwrap().as_str(), "admin@example.com");
        assert!(config.auth.admin_password_digest.is_none());

        let config = load(&[(
            "ADMIN_PASSWORD",
            "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9",
        )])
        .unwrap();
        assert!(config.auth.admin_email.is_none());
        assert!(config.auth.admin_password_digest.unwrap().is_well_formed());
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(load(&[("REGISTRY_MAX_BODY_BYTES", "lots")]).is_err());
        assert!(load(&[("BIND_ADDR", "nowhere")]).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = load(&[("SESSION_SECRET", SECRET)]).unwrap();
        assert!(format!("{:?}", config).contains("[REDACTED]"));
    }
}
