//! Base URL extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

/// Header set by reverse proxies to report the client-facing scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds `scheme://host[:port]` for the current request.
///
/// The host (port included) comes from the `Host` header. The scheme is taken
/// from `X-Forwarded-Proto` when it is `http` or `https`, otherwise `http`.
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
/// headers.insert(header::HOST, "localhost:8080".parse().unwrap());
///
/// assert_eq!(base_url_from_headers(&headers).unwrap(), "http://localhost:8080");
/// ```
pub fn base_url_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
        .trim();

    if host.is_empty() {
        return Err(AppError::bad_request("Missing Host header", json!({})));
    }

    Ok(format!("{}://{}", scheme_from_headers(headers), host))
}

fn scheme_from_headers(headers: &HeaderMap) -> &'static str {
    let forwarded = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase());

    match forwarded.as_deref() {
        Some("https") => "https",
        _ => "http",
    }
}
