//! Configuration management
//!
//! This module provides the `ConfigManager` for loading and saving
//! split view settings in TOML format.

mod manager;
pub mod settings;

use std::path::PathBuf;

use thiserror::Error;

pub use manager::{ConfigManager, SETTINGS_FILE};
pub use settings::SplitViewSettings;

/// Errors raised while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform has no config directory.
    #[error("no configuration directory available on this platform")]
    NoConfigDir,

    /// The settings file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The settings file or directory could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// File or directory that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for the settings schema.
    #[error("failed to parse settings: {0}")]
    Parse(String),

    /// Settings could not be serialized.
    #[error("failed to serialize settings: {0}")]
    Serialize(String),

    /// A value is out of range.
    #[error("invalid setting {field}: {reason}")]
    Validation {
        /// Offending field.
        field: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
