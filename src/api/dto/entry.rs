//! DTO for listing stored links.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Entry;

/// Wire representation of a stored entry.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: DateTime<Utc>,
    pub visit_count: u64,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            original_url: entry.original_url,
            short_code: entry.short_code,
            created_at: entry.created_at,
            last_used_at: entry.last_used_at,
            visit_count: entry.visit_count,
        }
    }
}
