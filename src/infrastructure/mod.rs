//! Infrastructure layer implementing domain contracts.
//!
//! # Modules
//!
//! - [`memory`] - Process-local [`crate::domain::repositories::UrlStore`] implementation

pub mod memory;
