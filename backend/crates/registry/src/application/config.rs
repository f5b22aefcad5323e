//! Application Configuration

/// Default upstream origin
pub const DEFAULT_UPSTREAM_ORIGIN: &str = "https://registry.internal";

/// Default cap for buffered request bodies (32 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Registry proxy configuration
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Scheme + authority (+ optional base path) of the upstream
    pub upstream_origin: String,
    /// Largest inbound body that will be buffered and forwarded
    pub max_body_bytes: usize,
    /// Return upstream error text to clients (non-production only)
    pub expose_upstream_errors: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            upstream_origin: DEFAULT_UPSTREAM_ORIGIN.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            expose_upstream_errors: false,
        }
    }
}

impl RegistryConfig {
    /// Create config for development (upstream errors are exposed)
    pub fn development() -> Self {
        Self {
            expose_upstream_errors: true,
            ..Self::default()
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.upstream_origin = origin.into();
        self
    }
}
