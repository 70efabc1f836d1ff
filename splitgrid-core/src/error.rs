//! Crate-level error type

use thiserror::Error;

use crate::config::ConfigError;
use crate::split::SplitError;
use crate::tracing::TracingError;

/// Any error raised by this crate.
#[derive(Debug, Error)]
pub enum SplitGridError {
    /// Layout or drag error.
    #[error("Split error: {0}")]
    Split(#[from] SplitError),

    /// Settings error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging setup error.
    #[error("Tracing error: {0}")]
    Tracing(#[from] TracingError),
}

/// Result alias using [`SplitGridError`].
pub type Result<T> = std::result::Result<T, SplitGridError>;
