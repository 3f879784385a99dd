//! Handler for listing all short links.

use axum::{Json, extract::State};

use crate::api::dto::entry::EntryResponse;
use crate::state::AppState;

/// Lists every stored link with its usage counters.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// # Response
///
/// A JSON array in no particular order:
///
/// ```json
/// [
///   {
///     "original_url": "https://example.com",
///     "short_code": "aBcD-_12",
///     "created_at": "2024-05-17T12:30:00Z",
///     "last_used_at": "2024-05-17T12:31:10Z",
///     "visit_count": 3
///   }
/// ]
/// ```
pub async fn list_urls_handler(State(state): State<AppState>) -> Json<Vec<EntryResponse>> {
    let items = state
        .link_service
        .list()
        .into_iter()
        .map(EntryResponse::from)
        .collect();

    Json(items)
}
