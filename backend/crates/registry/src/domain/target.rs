//! Target URL mapping

/// Build the upstream URL for a proxied request
///
/// `remainder` is the path after the mount point, with or without a leading
/// `/`. The query string is appended verbatim; an empty query is dropped.
pub fn resolve_target(origin: &str, remainder: &str, query: Option<&str>) -> String {
    let origin = origin.trim_end_matches('/');
    let remainder = remainder.trim_start_matches('/');

    match query {
        Some(q) if !q.is_empty() => format!("{}/{}?{}", origin, remainder, q),
        _ => format!("{}/{}", origin, remainder),
    }
}

/// Path after the mount point
///
/// `mount` is matched without a trailing `/`; a path outside the mount is
/// returned unchanged.
pub fn strip_mount<'a>(path: &'a str, mount: &str) -> &'a str {
    let mount = mount.trim_end_matches('/');
    match path.strip_prefix(mount) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}
