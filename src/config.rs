//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pixabay API key (secret, never logged)
    pub api_key: String,
    /// Base URL of the image provider
    pub provider_base_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Stale sweep interval in seconds
    pub cleanup_interval: u64,
    /// Age in seconds after which a category entry is considered stale
    pub cache_expiration: u64,
    /// Items served per client page
    pub client_page_size: usize,
    /// Items fetched per provider page
    pub provider_page_size: u32,
    /// Remaining items below which the next provider page is prefetched
    pub prefetch_margin: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PIXABAY_API_KEY` - Provider API key (default: empty)
    /// - `PIXABAY_BASE_URL` - Provider base URL (default: https://pixabay.com)
    /// - `SERVER_PORT` - HTTP server port (default: 3001)
    /// - `CLEANUP_INTERVAL` - Stale sweep frequency in seconds (default: 300)
    /// - `CACHE_EXPIRATION` - Entry expiration window in seconds (default: 3600)
    /// - `CLIENT_PAGE_SIZE` - Items per client page (default: 9)
    /// - `PROVIDER_PAGE_SIZE` - Items per provider page (default: 50)
    /// - `PREFETCH_MARGIN` - Prefetch trigger margin in items (default: 5)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("PIXABAY_API_KEY").unwrap_or(defaults.api_key),
            provider_base_url: env::var("PIXABAY_BASE_URL").unwrap_or(defaults.provider_base_url),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            cache_expiration: parse_var("CACHE_EXPIRATION").unwrap_or(defaults.cache_expiration),
            client_page_size: parse_var::<usize>("CLIENT_PAGE_SIZE")
                .filter(|size| *size > 0)
                .unwrap_or(defaults.client_page_size),
            provider_page_size: parse_var::<u32>("PROVIDER_PAGE_SIZE")
                .filter(|size| *size > 0)
                .unwrap_or(defaults.provider_page_size),
            prefetch_margin: parse_var("PREFETCH_MARGIN").unwrap_or(defaults.prefetch_margin),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            provider_base_url: "https://pixabay.com".to_string(),
            server_port: 3001,
            cleanup_interval: 5 * 60,
            cache_expiration: 60 * 60,
            client_page_size: 9,
            provider_page_size: 50,
            prefetch_margin: 5,
        }
    }
}
