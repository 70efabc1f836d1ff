//! Split view layout engine
//!
//! Tiles two or more tabs into a single grid and keeps that grid resizable.
//!
//! # Pipeline
//!
//! An ordered tab list and a [`LayoutKind`] go through three derived stages:
//!
//! 1. [`RegionMatrix`] assigns every tab a rectangle of logical cells.
//! 2. [`GridTemplate`] finds the region boundaries and coalesces them into
//!    draggable [`DividerTrack`]s.
//! 3. [`SizeModel`] holds column widths and row heights in percent, always
//!    summing to 100 per axis.
//!
//! [`SplitGroupStore`] owns the groups and the active group pointer, and
//! [`ResizeController`] runs the single divider drag session.
//!
//! # Module Structure
//!
//! - `types` - Identifiers and enums (`TabId`, `GroupId`, `LayoutKind`, `Orientation`)
//! - `matrix` - Region matrix builder (`RegionMatrix`)
//! - `dividers` - Divider synthesis (`GridTemplate`, `DividerTrack`)
//! - `sizes` - Percentage size arrays (`SizeModel`)
//! - `resize` - Drag sessions and move coalescing (`ResizeController`)
//! - `group` - One group and its derived layout (`SplitGroup`)
//! - `store` - Group ownership and activation (`SplitGroupStore`)
//! - `error` - Error types (`SplitError`)
//!
//! # Example
//!
//! ```
//! use splitgrid_core::split::{LayoutKind, SplitGroupStore, TabId};
//!
//! let mut store = SplitGroupStore::new();
//! let tabs = [TabId::new(), TabId::new(), TabId::new()];
//! let group = store.create_or_merge_group(&tabs, LayoutKind::Grid).unwrap();
//!
//! let layout = store.layout_description(group).unwrap();
//! assert_eq!(layout.template.columns, 2);
//! assert_eq!(layout.template.rows, 2);
//! assert_eq!(layout.column_widths, vec![50.0, 50.0]);
//! ```

mod dividers;
mod error;
mod group;
mod matrix;
mod resize;
mod sizes;
mod store;
mod types;

pub use dividers::{DividerTrack, GridTemplate, TrackSpan};
pub use error::SplitError;
pub use group::{LayoutDescription, SplitGroup};
pub use matrix::{RegionMatrix, RegionPlacement};
pub use resize::{
    DEFAULT_MIN_SIZE_PERCENT, DragSession, PointerPosition, ResizeController, SurfaceExtent,
};
pub use sizes::{FULL_PERCENT, SizeModel};
pub use store::{Dissolution, RemoveOutcome, SplitGroupStore};
pub use types::{GroupId, LayoutKind, Orientation, TabId};
