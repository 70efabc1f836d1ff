//! Shared utility functions used across command modules.

use std::path::Path;

use splitgrid_core::{ConfigManager, HeadlessSurface, SplitViewEngine, SplitViewSettings};

use crate::error::CliError;

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_config_dir(path.to_path_buf())),
        None => ConfigManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Loads settings, falling back to defaults when no file exists.
pub fn load_settings(config_path: Option<&Path>) -> Result<SplitViewSettings, CliError> {
    let manager = create_config_manager(config_path)?;
    manager
        .load_settings()
        .map_err(|e| CliError::Config(format!("Failed to load settings: {e}")))
}

/// Builds an engine over `surface` using the stored settings.
pub fn build_engine(
    config_path: Option<&Path>,
    surface: HeadlessSurface,
) -> Result<SplitViewEngine<HeadlessSurface>, CliError> {
    let manager = create_config_manager(config_path)?;
    Ok(SplitViewEngine::from_config(surface, &manager)?)
}
