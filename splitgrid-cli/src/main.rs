//! `SplitGrid` CLI - Command-line interface for the `SplitGrid` layout engine
//!
//! Prints layouts for a number of tabs, replays tab and pointer event
//! scripts against a headless surface, and manages the settings file.

mod cli;
mod commands;
mod error;
mod format;
mod util;

use clap::Parser;
use cli::Cli;
use splitgrid_core::{TracingConfig, TracingLevel, TracingOutput, init_tracing};

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    // --quiet silences stderr logging, a log file is still written
    if !cli.quiet || cli.log_file.is_some() {
        // Without -v the settings file picks the level
        let level = if cli.verbose == 0 {
            util::load_settings(config_path)
                .map_or(TracingLevel::Warn, |settings| settings.tracing_level())
        } else {
            TracingLevel::from_verbosity(cli.verbose)
        };
        let output = cli
            .log_file
            .clone()
            .map_or(TracingOutput::Stderr, |path| TracingOutput::File { path });
        let config = TracingConfig::new().with_level(level).with_output(output);
        if let Err(e) = init_tracing(&config) {
            eprintln!("Warning: {e}");
        }
    }

    let result = commands::dispatch(config_path, cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}
