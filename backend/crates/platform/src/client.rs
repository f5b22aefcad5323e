//! Client identification utilities
//!
//! Used only to annotate log lines; nothing here is trusted for access control.

use axum::http::HeaderMap;
use std::net::IpAddr;

/// Headers consulted for the originating client address, in priority order.
///
/// `cf-connecting-ip` is set by the edge in front of the gateway and cannot be
/// spoofed by the client; `x-forwarded-for` and `x-real-ip` cover plain
/// reverse-proxy setups.
const CLIENT_IP_HEADERS: &[&str] = &["cf-connecting-ip", "x-forwarded-for", "x-real-ip"];

/// Extract client IP address from headers
///
/// Checks the forwarding headers first (first entry of a comma separated
/// list), then falls back to the direct connection IP.
///
/// ## Arguments
/// * `headers` - HTTP request headers
/// * `direct_ip` - Direct connection IP address
///
/// ## Returns
/// The client IP address, or None if not determinable
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    CLIENT_IP_HEADERS
        .iter()
        .filter_map(|name| headers.get(*name)?.to_str().ok())
        .find_map(|value| value.split(',').next()?.trim().parse::<IpAddr>().ok())
        .or(direct_ip)
}
