//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (see `main.rs`).
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `BASE_URL` - Public base for generated short links, e.g. `https://s.example.com`.
//!   When unset, the base is derived from each request's `Host` header.
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `RATE_LIMIT_PER_SECOND` - Requests per second per client IP (default: 20)
//! - `RATE_LIMIT_BURST` - Burst size per client IP (default: 20)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public base URL used to compose `short_url`; trailing slash removed.
    pub base_url: Option<String>,
    pub log_level: String,
    pub log_format: String,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            base_url: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            rate_limit_per_second: 20,
            rate_limit_burst: 20,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);

        let base_url = env::var("BASE_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let rate_limit_per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.rate_limit_per_second);

        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.rate_limit_burst);

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            rate_limit_per_second,
            rate_limit_burst,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is set but not an `http://` or `https://` URL
    /// - rate limit values are zero or unreasonably large
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref base_url) = self.base_url
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                base_url
            );
        }

        if self.rate_limit_per_second == 0 || self.rate_limit_per_second > 1000 {
            anyhow::bail!(
                "RATE_LIMIT_PER_SECOND must be between 1 and 1000, got {}",
                self.rate_limit_per_second
            );
        }

        if self.rate_limit_burst == 0 || self.rate_limit_burst > 100_000 {
            anyhow::bail!(
                "RATE_LIMIT_BURST must be between 1 and 100000, got {}",
                self.rate_limit_burst
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        match self.base_url {
            Some(ref base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: from Host header"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Rate limit: {}/s per IP (burst {})",
            self.rate_limit_per_second,
            self.rate_limit_burst
        );
        tracing::info!("  Storage: in-memory (entries are lost on shutdown)");
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "LISTEN",
        "BASE_URL",
        "LOG_FORMAT",
        "RATE_LIMIT_PER_SECOND",
        "RATE_LIMIT_BURST",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially via #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();

        // Test invalid base URL
        config.base_url = Some("ftp://s.example.com".to_string());
        assert!(config.validate().is_err());

        config.base_url = Some("https://s.example.com".to_string());
        assert!(config.validate().is_ok());

        // Test rate limits
        config.rate_limit_per_second = 0;
        assert!(config.validate().is_err());

        config.rate_limit_per_second = 20;
        config.rate_limit_burst = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert!(config.base_url.is_none());
        assert_eq!(config.log_format, "text");
        assert_eq!(config.rate_limit_per_second, 20);
        assert_eq!(config.rate_limit_burst, 20);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("BASE_URL", "https://s.example.com/");
            env::set_var("LOG_FORMAT", "json");
            env::set_var("RATE_LIMIT_PER_SECOND", "50");
            env::set_var("RATE_LIMIT_BURST", "not-a-number");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.base_url.as_deref(), Some("https://s.example.com"));
        assert_eq!(config.log_format, "json");
        assert_eq!(config.rate_limit_per_second, 50);
        assert_eq!(config.rate_limit_burst, 20);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_base_url_is_unset() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("BASE_URL", "   ");
        }

        let config = Config::from_env().unwrap();
        assert!(config.base_url.is_none());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_invalid() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
