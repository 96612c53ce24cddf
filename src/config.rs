//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the user's config directory
//! (e.g. `~/.config/lectern/` on Linux) and covers:
//! - The catalog API base URL
//! - Request timeout
//! - Debounce delay and page size for the explore controller

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LecternError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the marketplace API (default: the public catalog)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Catalog request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Debounce delay applied to explore input, in milliseconds (default: 300)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Listing page size requested from the catalog (default: 12)
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_api_url() -> String {
    "https://api.campusmarket.example".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_page_size() -> u32 {
    12
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout(),
            debounce_ms: default_debounce_ms(),
            page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        if let Ok(dir) = env::var("LECTERN_CONFIG_DIR")
            && !dir.is_empty()
        {
            return PathBuf::from(dir).join("config.yaml");
        }

        directories::ProjectDirs::from("dev", "lectern", "lectern")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
            .unwrap_or_else(|| PathBuf::from("lectern-config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            LecternError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                LecternError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            LecternError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        Ok(())
    }

    /// API base URL, with the environment variable taking precedence
    pub fn api_url(&self) -> String {
        if let Ok(url) = env::var("LECTERN_API_URL")
            && !url.is_empty()
        {
            return url;
        }
        self.api_url.clone()
    }

    /// Get the catalog request timeout duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get the explore debounce delay
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.page_size, 12);
    }

    #[test]
    fn test_config_partial_yaml_fills_defaults() {
        let yaml = "api_url: https://catalog.test\n";
        let config: Config = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.api_url, "https://catalog.test");
        assert_eq!(config.page_size, 12);
        assert_eq!(config.debounce_ms, 300);
    }

    #[test]
    #[serial_test::serial]
    fn test_api_url_env_override() {
        let config = Config::default();
        unsafe { std::env::set_var("LECTERN_API_URL", "https://staging.test") };
        assert_eq!(config.api_url(), "https://staging.test");
        unsafe { std::env::remove_var("LECTERN_API_URL") };
        assert_eq!(config.api_url(), default_api_url());
    }

    #[test]
    #[serial_test::serial]
    fn test_config_dir_env_override() {
        unsafe { std::env::set_var("LECTERN_CONFIG_DIR", "/tmp/lectern-test") };
        assert_eq!(
            Config::config_path(),
            PathBuf::from("/tmp/lectern-test/config.yaml")
        );
        unsafe { std::env::remove_var("LECTERN_CONFIG_DIR") };
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.page_size = 24;
        config.debounce_ms = 150;

        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: Config = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(parsed.page_size, 24);
        assert_eq!(parsed.debounce_ms, 150);
    }
}
