//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::{DEFAULT_CAPACITY, DEFAULT_TTL_MS};

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the JSON configuration files
    pub data_dir: PathBuf,
    /// Freshness window in milliseconds for cached file reads
    pub cache_ttl_ms: u64,
    /// Maximum number of entries per cache
    pub cache_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Key expected in the `x-admin-key` header for write endpoints
    pub admin_key: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATA_DIR` - Directory of the JSON files (default: ./data)
    /// - `CACHE_TTL_MS` - Cache freshness in milliseconds (default: 5000)
    /// - `CACHE_CAPACITY` - Maximum cached entries (default: 64)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `ADMIN_KEY` - Admin key for write endpoints (default: unset, writes refused)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_dir: env::var("DATA_DIR")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            cache_ttl_ms: env::var("CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ttl| *ttl > 0)
                .unwrap_or(defaults.cache_ttl_ms),
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|capacity| *capacity > 0)
                .unwrap_or(defaults.cache_capacity),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            admin_key: env::var("ADMIN_KEY").ok().filter(|v| !v.is_empty()),
        }
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            cache_ttl_ms: DEFAULT_TTL_MS,
            cache_capacity: DEFAULT_CAPACITY,
            server_port: 3000,
            admin_key: None,
        }
    }
}
