//! Persisted settings for the command-line front end.
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/opensea-assets/config.json`
//! - macOS: `~/Library/Application Support/opensea-assets/config.json`
//! - Windows: `%APPDATA%/opensea-assets/config.json`
//!
//! # Example
//!
//! ```json
//! {
//!   "network": "testnet",
//!   "api_key": "0123456789abcdef",
//!   "connect_timeout_secs": 10,
//!   "numeric_policy": "positive"
//! }
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::{ClientConfig, HttpConfig};
use crate::domain::{ApiKey, Network, NumericPolicy};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
const APP_NAME: &str = "opensea-assets";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// AppConfig
// ============================================================================

/// Settings persisted between CLI runs. Every field is optional on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub network: Network,
    /// Used when no key is given on the command line or in the environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<ApiKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub numeric_policy: NumericPolicy,
}

impl AppConfig {
    /// Returns the path to the configuration file, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration, falling back to defaults on any failure.
    #[must_use]
    pub fn load() -> Self {
        match Self::config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Loads the configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file cannot
    /// be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path` as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Transport settings with any configured timeouts applied.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        let mut http = HttpConfig::default();
        if let Some(secs) = self.connect_timeout_secs {
            http.connect_timeout = Duration::from_secs(secs);
        }
        http.request_timeout = self.request_timeout_secs.map(Duration::from_secs);
        http
    }

    /// Build a client config, preferring `api_key` over the stored key.
    ///
    /// # Errors
    ///
    /// Returns an error if neither source provides a non-empty key.
    pub fn client_config(&self, api_key: Option<ApiKey>) -> Result<ClientConfig> {
        let api_key = api_key
            .or_else(|| self.api_key.clone())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                color_eyre::eyre::eyre!(
                    "No API key configured. Pass --api-key, set {}, or add \"api_key\" to {}",
                    crate::constants::API_KEY_ENV,
                    CONFIG_FILE
                )
            })?;

        let mut config = ClientConfig::for_network(self.network, api_key);
        config.http = self.http_config();
        config.numeric_policy = self.numeric_policy;
        Ok(config)
    }
}

// ============================================================================
// Tests
// ============================================================================
