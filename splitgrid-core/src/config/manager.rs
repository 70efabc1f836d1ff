//! Loading and saving settings files

use std::fs;
use std::path::{Path, PathBuf};

use crate::tracing::span_names;

use super::settings::SplitViewSettings;
use super::{ConfigError, ConfigResult};

/// Settings file name inside the config directory.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Application directory name under the platform config dir.
const APP_DIR: &str = "splitgrid";

/// Reads and writes `settings.toml` in one config directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if the platform has none.
    pub fn new() -> ConfigResult<Self> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_config_dir(base.join(APP_DIR)))
    }

    /// Creates a manager for an explicit directory.
    #[must_use]
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Directory holding the settings file.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Full path of the settings file.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Loads settings, returning defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_settings(&self) -> ConfigResult<SplitViewSettings> {
        let _span = crate::trace_operation_debug!(span_names::CONFIG_LOAD).entered();
        let path = self.settings_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(SplitViewSettings::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let settings: SplitViewSettings =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validates and writes settings, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, serialization or the write fails.
    pub fn save_settings(&self, settings: &SplitViewSettings) -> ConfigResult<()> {
        let _span = crate::trace_operation_debug!(span_names::CONFIG_SAVE).entered();
        settings.validate()?;

        fs::create_dir_all(&self.config_dir).map_err(|source| ConfigError::Write {
            path: self.config_dir.clone(),
            source,
        })?;
        let content =
            toml::to_string_pretty(settings).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        let path = self.settings_path();
        fs::write(&path, content).map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Saved settings");
        Ok(())
    }
}
