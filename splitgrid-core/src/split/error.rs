//! Error types for split view operations
//!
//! None of these reach the host UI. The engine logs them and falls back to
//! leaving the layout unchanged.

use super::types::{GroupId, Orientation};

/// Errors that can occur during split view operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SplitError {
    /// A drag session is already open.
    #[error("a resize drag is already in progress on {0}")]
    DragInProgress(GroupId),

    /// No drag session is open.
    #[error("no resize drag is in progress")]
    NoDragSession,

    /// The divider track was not found in the group's template.
    #[error("{orientation} divider track {sequence} not found")]
    TrackNotFound {
        /// Orientation of the requested track.
        orientation: Orientation,
        /// 1-based sequence number of the requested track.
        sequence: usize,
    },

    /// The structural index does not address two adjacent size entries.
    #[error("{orientation} structural index {index} out of range for {len} tracks")]
    TrackOutOfRange {
        /// Orientation of the size array.
        orientation: Orientation,
        /// 1-based structural index.
        index: usize,
        /// Number of entries in the size array.
        len: usize,
    },

    /// The specified group was not found.
    #[error("group not found: {0}")]
    GroupNotFound(GroupId),
}
