//! Header forwarding policy

use axum::http::{HeaderMap, HeaderName, header};

/// Hop-by-hop headers (RFC 9110 §7.6.1); never forwarded in either direction
pub const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Headers to send upstream: everything except `Host`, `Content-Length` and
/// hop-by-hop headers
///
/// The client sets `Content-Length` from the body actually sent, which is
/// empty for GET and HEAD whatever the inbound request declared.
pub fn request_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = response_headers(headers);
    out.remove(header::HOST);
    out.remove(header::CONTENT_LENGTH);
    out
}

/// Headers to return to the client: everything except hop-by-hop headers
///
/// Names listed in a `Connection` header are treated as hop-by-hop too.
pub fn response_headers(headers: &HeaderMap) -> HeaderMap {
    let listed: Vec<HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();

    let mut out = headers.clone();
    for name in HOP_BY_HOP.iter().chain(listed.iter()) {
        out.remove(name);
    }
    out
}
