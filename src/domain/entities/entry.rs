//! Entry entity representing one shortened URL and its usage counters.

use chrono::{DateTime, Utc};

/// A shortened URL together with its usage metadata.
///
/// `original_url`, `short_code` and `created_at` never change after creation.
/// `visit_count` and `last_used_at` only move forward, and only through
/// [`Entry::record_visit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: DateTime<Utc>,
    pub visit_count: u64,
}

impl Entry {
    /// Creates a fresh entry with no visits.
    ///
    /// `last_used_at` starts equal to `created_at`.
    pub fn new(original_url: String, short_code: String, created_at: DateTime<Utc>) -> Self {
        Self {
            original_url,
            short_code,
            created_at,
            last_used_at: created_at,
            visit_count: 0,
        }
    }

    /// Records one successful resolve at `now`.
    ///
    /// A clock reading older than the current `last_used_at` leaves the
    /// timestamp in place, keeping `last_used_at >= created_at`.
    pub fn record_visit(&mut self, now: DateTime<Utc>) {
        self.visit_count = self.visit_count.saturating_add(1);
        if now > self.last_used_at {
            self.last_used_at = now;
        }
    }
}
