//! # Link Shortener
//!
//! A small URL shortening service built with Axum. Short codes map to
//! original URLs in a process-local table; every redirect bumps the entry's
//! visit counter.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entities::Entry`] record and the
//!   [`domain::repositories::UrlStore`] contract
//! - **Application Layer** ([`application`]) - [`application::services::LinkService`]
//! - **Infrastructure Layer** ([`infrastructure`]) - [`infrastructure::memory::InMemoryUrlStore`]
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Storage
//!
//! Entries live only in memory: nothing survives a restart and nothing is
//! ever evicted. A durable backend would implement [`domain::repositories::UrlStore`].
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"                 # Optional
//! export BASE_URL="https://s.example.com"      # Optional
//!
//! cargo run
//!
//! curl -X POST localhost:8080/api/shorten -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::Entry;
    pub use crate::domain::repositories::UrlStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::InMemoryUrlStore;
    pub use crate::state::AppState;
}
