//! Store trait definitions for the domain layer.
//!
//! # Available Stores
//!
//! - [`UrlStore`] - Create, resolve-and-track, and snapshot of shortened URLs
//!
//! The concrete implementation lives in `crate::infrastructure::memory`.
//! A mock is generated via `mockall` for unit tests.

pub mod url_store;

pub use url_store::UrlStore;

#[cfg(test)]
pub use url_store::MockUrlStore;
