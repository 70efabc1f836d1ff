//! User-tunable split view settings

use serde::{Deserialize, Serialize};

use crate::split::{DEFAULT_MIN_SIZE_PERCENT, LayoutKind};
use crate::tracing::TracingLevel;

use super::ConfigError;

/// Settings consumed by [`crate::SplitViewEngine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitViewSettings {
    /// Layout used by `create_split_view` when the caller names none.
    pub default_layout_kind: LayoutKind,
    /// Smallest column width or row height a drag may produce, in percent.
    pub min_size_percent: f64,
    /// Apply at most one pointer move per animation frame during drags.
    pub coalesce_pointer_moves: bool,
    /// Log level used when the host has no tracing setup of its own.
    pub tracing_level: String,
}

impl Default for SplitViewSettings {
    fn default() -> Self {
        Self {
            default_layout_kind: LayoutKind::Grid,
            min_size_percent: DEFAULT_MIN_SIZE_PERCENT,
            coalesce_pointer_moves: true,
            tracing_level: TracingLevel::Info.to_string(),
        }
    }
}

impl SplitViewSettings {
    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the minimum size is outside
    /// `[0, 50)` or the tracing level is unknown.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..50.0).contains(&self.min_size_percent) {
            return Err(ConfigError::Validation {
                field: "min_size_percent".to_string(),
                reason: format!("{} is outside [0, 50)", self.min_size_percent),
            });
        }
        if self.tracing_level.parse::<TracingLevel>().is_err() {
            return Err(ConfigError::Validation {
                field: "tracing_level".to_string(),
                reason: format!("unknown level '{}'", self.tracing_level),
            });
        }
        Ok(())
    }

    /// Parsed tracing level, falling back to `Info`.
    #[must_use]
    pub fn tracing_level(&self) -> TracingLevel {
        self.tracing_level.parse().unwrap_or_default()
    }
}
