//! Settings Manager
//!
//! Locates the configuration file in the platform config directory and
//! loads or saves the whole [`Config`] in one step.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "grblpanel";
const CONFIG_FILE: &str = "settings.toml";

/// Owns the configuration file location
#[derive(Debug, Clone)]
pub struct SettingsManager {
    path: PathBuf,
}

impl SettingsManager {
    /// Manager for the default platform location
    pub fn new() -> SettingsResult<Self> {
        Ok(Self {
            path: Self::config_file_path()?,
        })
    }

    /// Manager for an explicit file (JSON or TOML)
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Platform configuration directory for the application
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(SettingsError::NoConfigDirectory)
    }

    /// Default configuration file path
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Path this manager reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration, falling back to defaults when the file does not exist yet
    pub fn load_or_default(&self) -> SettingsResult<Config> {
        if !self.path.exists() {
            tracing::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(Config::default());
        }
        Config::load_from_file(&self.path)
    }

    /// Save the configuration, creating the parent directory if needed
    pub fn save(&self, config: &Config) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| {
                    SettingsError::CreateDirectory {
                        path: parent.to_path_buf(),
                        source,
                    }
                })?;
            }
        }
        config.save_to_file(&self.path)
    }
}
