//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// A missing `url` deserializes to an empty string so it is reported by the
/// validator as an invalid URL rather than as a malformed body.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[serde(default)]
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Result of a successful shortening.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
    pub short_code: String,
}
