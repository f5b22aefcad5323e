//! Admin Email Value Object
//!
//! The configured administrator address. Login compares submitted emails
//! case-insensitively; no format validation is applied because the value
//! comes from deployment configuration, not user input.

use std::fmt;

/// Configured admin email address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminEmail(String);

impl AdminEmail {
    /// Wrap the configured email as given (original casing is preserved
    /// for responses and the session token)
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Case-insensitive comparison against a submitted email
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.to_lowercase() == candidate.to_lowercase()
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdminEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AdminEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_case_insensitively() {
        let email = AdminEmail::new("Admin@Example.com");
        assert!(email.matches("admin@example.com"));
        assert!(email.matches("ADMIN@EXAMPLE.COM"));
        assert!(!email.matches("admin@example.org"));
        assert!(!email.matches(""));
    }

    #[test]
    fn test_preserves_configured_casing() {
        let email = AdminEmail::new("Admin@Example.com");
        assert_eq!(email.as_str(), "Admin@Example.com");
        assert_eq!(email.to_string(), "Admin@Example.com");
    }

    #[test]
    fn test_whitespace_is_significant() {
        let email = AdminEmail::new("admin@example.com");
        assert!(!email.matches(" admin@example.com"));
    }
}
