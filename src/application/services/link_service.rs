//! Link shortening, resolution and listing service.

use std::sync::Arc;

use crate::domain::entities::Entry;
use crate::domain::repositories::UrlStore;
use crate::error::AppError;
use serde_json::json;

/// Path segment under which short codes are served.
pub const REDIRECT_PREFIX: &str = "/r";

/// Service for creating, resolving and listing shortened links.
///
/// Thin wrapper over a [`UrlStore`]: the store owns all state and locking,
/// this layer adds error mapping, logging and counters.
pub struct LinkService<S: UrlStore + ?Sized> {
    store: Arc<S>,
}

impl<S: UrlStore + ?Sized> LinkService<S> {
    /// Creates a new link service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Shortens an already validated URL.
    ///
    /// Always succeeds; the returned entry is a copy of what was stored.
    pub fn shorten(&self, original_url: &str) -> Entry {
        let entry = self.store.create(original_url);

        metrics::counter!("links_created_total").increment(1);
        tracing::debug!(code = %entry.short_code, url = %entry.original_url, "Short link created");

        entry
    }

    /// Resolves a short code to its original URL, counting the visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry exists for `code`.
    pub fn resolve(&self, code: &str) -> Result<String, AppError> {
        match self.store.resolve_and_track(code) {
            Some(url) => {
                metrics::counter!("links_resolved_total").increment(1);
                tracing::debug!(code, url = %url, "Short link resolved");
                Ok(url)
            }
            None => {
                metrics::counter!("links_not_found_total").increment(1);
                tracing::debug!(code, "Short link not found");
                Err(AppError::not_found("URL not found", json!({ "code": code })))
            }
        }
    }

    /// Returns a snapshot of every stored link.
    pub fn list(&self) -> Vec<Entry> {
        self.store.snapshot()
    }

    /// Number of stored links.
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Constructs the full short URL from a base URL and code.
    ///
    /// `base` is `scheme://host[:port]`, with or without a trailing slash.
    pub fn get_short_url(&self, base: &str, code: &str) -> String {
        format!("{}{}/{}", base.trim_end_matches('/'), REDIRECT_PREFIX, code)
    }
}
