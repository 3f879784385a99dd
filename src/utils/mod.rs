//! Utility functions for code generation and request handling.
//!
//! - [`code_generator`] - Short code generation
//! - [`base_url`] - Client-facing base URL extraction from HTTP headers

pub mod base_url;
pub mod code_generator;
