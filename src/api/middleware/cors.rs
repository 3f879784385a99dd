//! Cross-origin resource sharing policy.

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Creates a permissive CORS layer.
///
/// Any origin and any request header are allowed, for the methods a browser
/// client of the shortener may issue. Preflight `OPTIONS` requests are
/// answered by the layer itself.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any)
}
