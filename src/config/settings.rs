//! User settings for chain-console
//!
//! Holds the backend base URL and a few terminal preferences. The settings
//! file is optional; a missing file yields defaults and is never written
//! implicitly.

use serde::{Deserialize, Serialize};

use super::paths::ClientPaths;
use crate::error::ClientError;

/// Base URL used when neither the command line nor the settings file set one
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// User settings for chain-console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Backend base URL, without the `/api` prefix
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// How often the TUI wakes up without input, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Default log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            tick_rate_ms: default_tick_rate_ms(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &ClientPaths) -> Result<Self, ClientError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ClientError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ClientError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Apply a command line / environment override of the base URL
    pub fn with_api_base_url(mut self, override_url: Option<&str>) -> Self {
        if let Some(url) = override_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_base_url = url.to_string();
        }
        self
    }

    /// The configured base URL, validated and without a trailing slash
    pub fn api_base_url(&self) -> Result<String, ClientError> {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        let parsed = reqwest::Url::parse(trimmed).map_err(|e| {
            ClientError::Config(format!("Invalid API base URL '{}': {}", trimmed, e))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "API base URL must use http or https: '{}'",
                trimmed
            )));
        }

        Ok(trimmed.to_string())
    }
}
