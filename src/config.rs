//! Configuration Module
//!
//! Handles loading and managing storefront configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Base URL of the remote storefront API.
pub const DEFAULT_API_URL: &str = "https://itx-frontend-test.onrender.com/api";

/// Storefront configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote product/cart API
    pub api_base_url: String,
    /// Local HTTP server port
    pub server_port: u16,
    /// File used to persist cache entries and the cart counter, None = in-memory
    pub storage_path: Option<PathBuf>,
    /// Products per listing page
    pub page_size: usize,
    /// Optional timeout for remote calls, None = wait indefinitely
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `STOREFRONT_API_URL` - Remote API base URL (default: [`DEFAULT_API_URL`])
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `STORAGE_PATH` - Persistent store file (default: unset, in-memory)
    /// - `PAGE_SIZE` - Products per page (default: 10)
    /// - `REQUEST_TIMEOUT_SECS` - Remote call timeout (default: unset, no timeout)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_base_url: env::var("STOREFRONT_API_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            storage_path: env::var("STORAGE_PATH")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            page_size: env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.page_size),
            request_timeout: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs: &u64| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            server_port: 3000,
            storage_path: None,
            page_size: 10,
            request_timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.server_port, 3000);
        assert!(config.storage_path.is_none());
        assert_eq!(config.page_size, 10);
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("STOREFRONT_API_URL");
        env::remove_var("SERVER_PORT");
        env::remove_var("STORAGE_PATH");
        env::remove_var("PAGE_SIZE");
        env::remove_var("REQUEST_TIMEOUT_SECS");

        let config = Config::from_env();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.server_port, 3000);
        assert!(config.storage_path.is_none());
        assert_eq!(config.page_size, 10);
        assert!(config.request_timeout.is_none());
    }
}
