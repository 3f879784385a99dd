//! Short code generation.
//!
//! Codes are derived from the URL and the creation time, so no random source
//! is needed. Uniqueness is not checked here; see [`CodeGenerator`].

use base64::Engine as _;
use chrono::{DateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};

/// Number of characters in every generated short code.
pub const CODE_LENGTH: usize = 8;

/// Derives a short code for a URL at a given instant.
///
/// Implementations are pure: the same `(url, now)` pair must always produce
/// the same code. Two different inputs may still collide; callers decide what
/// to do about it.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self, url: &str, now: DateTime<Utc>) -> String;
}

/// SHA-256 based generator.
///
/// Hashes `url` followed by the RFC 3339 timestamp (nanosecond precision),
/// encodes the digest as URL-safe base64 and keeps the first
/// [`CODE_LENGTH`] characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashCodeGenerator;

impl CodeGenerator for HashCodeGenerator {
    fn generate(&self, url: &str, now: DateTime<Utc>) -> String {
        generate_code(url, now)
    }
}

/// Generates an 8-character URL-safe code for `url` salted with `now`.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code("https://example.com", Utc::now());
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code(url: &str, now: DateTime<Utc>) -> String {
    let salted = format!("{}{}", url, now.to_rfc3339_opts(SecondsFormat::Nanos, true));
    let digest = Sha256::digest(salted.as_bytes());

    let mut code = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest);
    code.truncate(CODE_LENGTH);
    code
}

/// Returns true if `code` has the shape of a generated short code.
pub fn is_well_formed(code: &str) -> bool {
    code.len() == CODE_LENGTH
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
