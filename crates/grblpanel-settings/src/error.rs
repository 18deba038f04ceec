//! Errors raised while reading, writing and checking settings files.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The platform reports no per-user configuration directory
    #[error("No configuration directory on this platform")]
    NoConfigDirectory,

    #[error("Cannot create directory {}: {source}", path.display())]
    CreateDirectory { path: PathBuf, source: io::Error },

    #[error("Malformed JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed TOML settings: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Cannot encode settings as TOML: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A settings value that the dialog or a file supplied but the application
/// cannot use.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// File extension other than `.json` or `.toml`
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange { key: String, value: String },

    /// A lower bound above its upper bound, e.g. spindle minimum over maximum
    #[error("Invalid range for '{key}': {min} > {max}")]
    InvertedRange { key: String, min: String, max: String },

    #[error("Missing value for '{0}'")]
    Empty(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

pub type ConfigResult<T> = Result<T, ConfigError>;
