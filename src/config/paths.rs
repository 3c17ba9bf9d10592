//! Path management for chain-console
//!
//! ## Path Resolution Order
//!
//! 1. `CHAIN_CONSOLE_HOME` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (e.g. `~/.config/chain-console` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ClientError;

/// Environment variable overriding the base directory
pub const HOME_ENV_VAR: &str = "CHAIN_CONSOLE_HOME";

/// Manages all paths used by chain-console
#[derive(Debug, Clone)]
pub struct ClientPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl ClientPaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ClientError> {
        let base_dir = if let Ok(custom) = std::env::var(HOME_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "chain-console")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    ClientError::Config("Could not determine a config directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create ClientPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the log directory
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Ensure the base and log directories exist
    pub fn ensure_directories(&self) -> Result<(), ClientError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ClientError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| ClientError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }
}
