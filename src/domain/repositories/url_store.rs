//! Store trait for shortened URL entries.

use crate::domain::entities::Entry;

/// Single source of truth for all shortened URLs.
///
/// The three operations are the whole surface the HTTP layer needs, so a
/// durable or shared backend can be swapped in behind this trait without
/// touching handlers.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryUrlStore`] - process-local table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait UrlStore: Send + Sync {
    /// Mints a short code for `original_url` and stores a new entry under it.
    ///
    /// Never fails and never rejects input; URL validation happens before the
    /// store is reached. If the minted code already exists the previous entry
    /// is replaced.
    fn create(&self, original_url: &str) -> Entry;

    /// Looks up `code`, counts the visit, and returns the original URL.
    ///
    /// # Returns
    ///
    /// - `Some(url)` if found; `visit_count` was incremented by exactly one
    /// - `None` if not found; nothing was modified
    fn resolve_and_track(&self, code: &str) -> Option<String>;

    /// Returns a point-in-time copy of every stored entry, in no particular order.
    fn snapshot(&self) -> Vec<Entry>;

    /// Number of stored entries.
    fn len(&self) -> usize;

    /// Returns true if nothing has been stored yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
