//! In-process storage backend.
//!
//! State lives only in process memory and is lost on shutdown.

mod in_memory_url_store;

pub use in_memory_url_store::InMemoryUrlStore;
