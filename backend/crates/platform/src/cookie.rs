//! Cookie Management Infrastructure
//!
//! Set-Cookie building and Cookie header parsing.

use axum::http::header::InvalidHeaderValue;
use axum::http::{HeaderMap, HeaderValue, header};

/// Cookie configuration
///
/// Cookies are always `SameSite=Strict`.
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub path: String,
    pub max_age_secs: Option<u64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

impl CookieConfig {
    /// Build Set-Cookie header value
    pub fn build_set_cookie(&self, value: &str) -> String {
        self.build(value, self.max_age_secs)
    }

    /// Build Set-Cookie header for deletion
    ///
    /// Same attributes as [`CookieConfig::build_set_cookie`] so the browser
    /// matches the stored cookie, with an empty value and `Max-Age=0`.
    pub fn build_delete_cookie(&self) -> String {
        self.build("", Some(0))
    }

    fn build(&self, value: &str, max_age_secs: Option<u64>) -> String {
        let mut cookie = format!("{}={}", self.name, value);

        if let Some(max_age) = max_age_secs {
            cookie.push_str(&format!("; Max-Age={}", max_age));
        }
        cookie.push_str(&format!("; Path={}", self.path));
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str("; SameSite=Strict");

        cookie
    }
}

/// Extract a cookie value from headers
///
/// Looks through every `Cookie` header; the first pair with a matching name
/// wins. An empty value is returned as `Some("")`.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;

            if key.trim() == name {
                Some(value.trim().trim_matches('"').to_string())
            } else {
                None
            }
        })
}

/// Create a Set-Cookie header value
pub fn set_cookie_header(cookie: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(cookie)
}
