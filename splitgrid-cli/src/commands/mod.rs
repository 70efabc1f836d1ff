//! Command handler modules for the CLI.

mod completions;
mod config;
mod layout;
mod replay;

use std::path::Path;

use splitgrid_core::SurfaceExtent;

use crate::cli::{Commands, ConfigCommands};
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(config_path: Option<&Path>, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Layout { tabs, kind, format } => {
            layout::cmd_layout(config_path, tabs, kind, format)
        }
        Commands::Replay {
            script,
            width,
            height,
            format,
        } => replay::cmd_replay(
            config_path,
            &script,
            SurfaceExtent::new(width, height),
            format,
        ),
        Commands::Config(ConfigCommands::Show { format }) => {
            config::cmd_config_show(config_path, format)
        }
        Commands::Config(ConfigCommands::Init { force }) => {
            config::cmd_config_init(config_path, force)
        }
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}
