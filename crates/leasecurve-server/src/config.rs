//! Server configuration.

use serde::{Deserialize, Serialize};

use leasecurve_feed::DEFAULT_FEED_URL;

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path of the durable yield-curve snapshot
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,

    /// Seconds between refresh cycles
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// Upstream feed endpoint (override for mirrors or tests)
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_snapshot_path() -> String {
    "./data/curves.json".to_string()
}

fn default_refresh_interval_secs() -> u64 {
    3600
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            snapshot_path: default_snapshot_path(),
            refresh_interval_secs: default_refresh_interval_secs(),
            feed_url: default_feed_url(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.refresh_interval_secs, 3600);
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ServerConfig = toml::from_str("port = 9000").unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.snapshot_path, "./data/curves.json");
    }
}
