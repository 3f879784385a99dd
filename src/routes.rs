//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /r/{code}`      - Short link redirect
//! - `GET  /health`        - Health check
//! - `POST /api/shorten`   - Create a short link
//! - `GET  /api/urls`      - List short links
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panicking handlers become `500` responses
//! - **CORS** - Any origin
//! - **Rate limiting** - Per-IP token bucket
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::rate_limit::{self, RateLimitLayer};
use crate::api::middleware::{cors, tracing};
use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::http::Uri;
use axum::routing::get;
use serde_json::json;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the production router with rate limiting and path normalization.
///
/// # Errors
///
/// Returns an error if the configured rate limits are rejected.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let limiter = rate_limit::layer(config.rate_limit_per_second, config.rate_limit_burst)?;
    let router = router(state, Some(limiter));

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}

/// Constructs all routes with the shared middleware stack.
///
/// Rate limiting needs the peer address (`ConnectInfo`), so it is optional
/// here to let tests drive the router without a socket.
pub fn router(state: AppState, rate_limit: Option<RateLimitLayer>) -> Router {
    let mut router = Router::new()
        .route("/r/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .fallback(fallback_handler);

    if let Some(limiter) = rate_limit {
        router = router.layer(limiter);
    }

    router
        .with_state(state)
        .layer(cors::layer())
        .layer(CatchPanicLayer::new())
        .layer(tracing::layer())
}

async fn fallback_handler(uri: Uri) -> AppError {
    AppError::not_found("Not Found", json!({ "path": uri.path() }))
}
