//! Domain layer containing the entry model and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - The [`repositories::UrlStore`] contract
//! - [`clock`] - Time source consumed by the store
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The store trait is implemented by `crate::infrastructure::memory`
//! - Business orchestration lives in [`crate::application::services`]

pub mod clock;
pub mod entities;
pub mod repositories;
