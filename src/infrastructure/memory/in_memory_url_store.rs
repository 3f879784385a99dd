//! Process-local implementation of the URL store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::entities::Entry;
use crate::domain::repositories::UrlStore;
use crate::utils::code_generator::{CodeGenerator, HashCodeGenerator};

/// In-memory table of entries keyed by short code.
///
/// One reader/writer lock guards the whole table:
///
/// - `create` and `resolve_and_track` take the write lock, so every insert and
///   every visit increment is totally ordered with every other one
/// - `snapshot` and `len` take the read lock and may run alongside each other
///
/// The lock is never held across another acquisition. Nothing is persisted;
/// the table is dropped with the process.
pub struct InMemoryUrlStore<G = HashCodeGenerator, C = SystemClock> {
    entries: RwLock<HashMap<String, Entry>>,
    generator: G,
    clock: C,
}

impl InMemoryUrlStore {
    /// Creates an empty store using SHA-256 codes and the system clock.
    pub fn new() -> Self {
        Self::with_parts(HashCodeGenerator, SystemClock)
    }
}

impl Default for InMemoryUrlStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: CodeGenerator, C: Clock> InMemoryUrlStore<G, C> {
    /// Creates an empty store with a custom code generator and clock.
    pub fn with_parts(generator: G, clock: C) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            generator,
            clock,
        }
    }

    // Every write is a single insert or a single in-place update, so a
    // poisoned table is still consistent and safe to keep using.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Entry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Entry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<G: CodeGenerator, C: Clock> UrlStore for InMemoryUrlStore<G, C> {
    fn create(&self, original_url: &str) -> Entry {
        let now = self.clock.now();
        let code = self.generator.generate(original_url, now);
        let entry = Entry::new(original_url.to_string(), code.clone(), now);

        let replaced = self.write().insert(code, entry.clone());

        if let Some(previous) = replaced {
            metrics::counter!("link_code_collisions_total").increment(1);
            tracing::warn!(
                code = %entry.short_code,
                previous_url = %previous.original_url,
                visits_lost = previous.visit_count,
                "Short code collision, previous entry overwritten"
            );
        }

        entry
    }

    fn resolve_and_track(&self, code: &str) -> Option<String> {
        let mut entries = self.write();
        let entry = entries.get_mut(code)?;
        entry.record_visit(self.clock.now());
        Some(entry.original_url.clone())
    }

    fn snapshot(&self) -> Vec<Entry> {
        self.read().values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
