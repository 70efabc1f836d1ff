//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use splitgrid_core::LayoutKind;

/// `SplitGrid` command-line interface for inspecting split layouts
#[derive(Parser)]
#[command(name = "splitgrid-cli")]
#[command(author, version, about = "SplitGrid command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true, env = "SPLITGRID_CONFIG_DIR")]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, env = "SPLITGRID_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the layout for a number of tabs
    #[command(about = "Print the split layout for N tabs")]
    Layout {
        /// Number of tabs to split
        #[arg(short, long, default_value_t = 3)]
        tabs: usize,

        /// Layout kind (defaults to the configured kind)
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,

        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Replay a script of tab and pointer events
    #[command(about = "Replay a tab and pointer event script and print the final layout")]
    Replay {
        /// Script file, one command per line
        script: PathBuf,

        /// Surface width in pixels
        #[arg(long, default_value_t = 1000.0)]
        width: f64,

        /// Surface height in pixels
        #[arg(long, default_value_t = 1000.0)]
        height: f64,

        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Settings management
    #[command(subcommand, about = "Show or initialize settings")]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Settings subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective settings
    Show {
        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Write a settings file with default values
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

/// Output format for layout and settings commands
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Display as formatted table
    Table,
    /// Output as JSON
    Json,
}

/// Layout kind options
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum KindArg {
    /// Two-row grid
    Grid,
    /// Side by side columns
    Vsep,
    /// Stacked rows
    Hsep,
}

impl From<KindArg> for LayoutKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Grid => Self::Grid,
            KindArg::Vsep => Self::Vsep,
            KindArg::Hsep => Self::Hsep,
        }
    }
}
