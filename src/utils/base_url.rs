//! Public base URL derivation from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};

/// Builds `scheme://host[:port]` for the current request.
///
/// The host comes from the `Host` header, port included. The scheme is
/// `https` only when `X-Forwarded-Proto` says so; otherwise `http`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing or empty
/// - The header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "example.com:8080".parse().unwrap());
///
/// assert_eq!(base_url_from_headers(&headers).unwrap(), "http://example.com:8080");
/// ```
pub fn base_url_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?
        .trim();

    if host.is_empty() {
        return Err(AppError::bad_request(
            "Missing Host header",
            serde_json::json!({}),
        ));
    }

    let scheme = match headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
    {
        Some(proto) if proto.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    };

    Ok(format!("{scheme}://{host}"))
}
