//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Result, anyhow};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Rate limiter layer keyed by client IP.
pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for all public endpoints.
///
/// # Limits
///
/// - **Rate**: `per_second` requests per second (default config: 20)
/// - **Burst**: `burst` requests (default config: 20)
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if either limit is zero or the rate exceeds 1000/s.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/api/shorten", post(shorten_handler))
///     .layer(rate_limit::layer(20, 20)?);
/// ```
pub fn layer(per_second: u64, burst: u32) -> Result<RateLimitLayer> {
    if per_second == 0 || per_second > 1000 {
        anyhow::bail!("Invalid rate limit: per_second={per_second}");
    }

    // The builder takes the replenish interval of a single token.
    let replenish_ms = 1000 / per_second;

    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(replenish_ms)
        .burst_size(burst)
        .finish()
        .ok_or_else(|| {
            anyhow!("Invalid rate limit: per_second={per_second}, burst={burst}")
        })?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
