//! Short code extraction from `/decode` input.

use url::Url;

/// Extracts the short code from either a full short URL or a bare code.
///
/// For an absolute URL with a host, the code is its path without the leading
/// `/`; a URL with an empty path has no code. Anything else is taken as the
/// code itself, trimmed.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_short_code("http://s.io/abc123").as_deref(), Some("abc123"));
/// assert_eq!(extract_short_code(" abc123 ").as_deref(), Some("abc123"));
/// assert_eq!(extract_short_code("http://s.io/"), None);
/// ```
pub fn extract_short_code(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    match Url::parse(trimmed) {
        Ok(url) if url.host_str().is_some_and(|h| !h.is_empty()) => {
            let path = url.path();
            let code = path.strip_prefix('/').unwrap_or(path);
            (!code.is_empty()).then(|| code.to_string())
        }
        _ => Some(trimmed.to_string()),
    }
}
