//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::base_url_from_headers;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "short_url": "http://localhost:8080/r/aBcD-_12",
///   "original_url": "https://example.com",
///   "short_code": "aBcD-_12"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if:
/// - The body is not a JSON object of the expected shape (`Invalid request format`)
/// - `url` is missing or not a valid URL (`Invalid URL format`)
/// - No `BASE_URL` is configured and the `Host` header is missing
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload.map_err(|e| {
        AppError::bad_request("Invalid request format", json!({ "reason": e.body_text() }))
    })?;

    payload.validate()?;

    // The stored URL is later sent back verbatim in a Location header.
    if HeaderValue::from_str(&payload.url).is_err() {
        return Err(AppError::bad_request(
            "Invalid URL format",
            json!({ "fields": ["url"] }),
        ));
    }

    let base_url = match state.base_url {
        Some(ref base_url) => base_url.clone(),
        None => base_url_from_headers(&headers)?,
    };

    let entry = state.link_service.shorten(&payload.url);
    let short_url = state
        .link_service
        .get_short_url(&base_url, &entry.short_code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url,
            original_url: entry.original_url,
            short_code: entry.short_code,
        }),
    ))
}
