//! Core domain entities.
//!
//! - [`Entry`] - A shortened URL with its visit counter and timestamps
//!
//! Entities are plain data; the store owns every instance and hands out clones.

pub mod entry;

pub use entry::Entry;
