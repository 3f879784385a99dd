//! Application layer services implementing business logic.
//!
//! Services consume the store trait and give HTTP handlers a small API with
//! error mapping, logging and metrics already applied.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shortening, resolving and listing links

pub mod services;
