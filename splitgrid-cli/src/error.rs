//! CLI error types and exit codes.

use splitgrid_core::{ConfigError, SplitGridError};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, validation, or I/O errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Replay script could not be parsed
    pub const SCRIPT_ERROR: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Layout could not be built
    #[error("Layout error: {0}")]
    Layout(String),

    /// Replay script error
    #[error("Script error on line {line}: {message}")]
    Script {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Output serialization error
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<SplitGridError> for CliError {
    fn from(err: SplitGridError) -> Self {
        match err {
            SplitGridError::Config(e) => Self::Config(e.to_string()),
            other => Self::Layout(other.to_string()),
        }
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, layout, output, IO)
    /// - 2: Replay script error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Script { .. } => exit_codes::SCRIPT_ERROR,
            Self::Config(_) | Self::Layout(_) | Self::Output(_) | Self::Io(_) => {
                exit_codes::GENERAL_ERROR
            }
        }
    }
}
