//! `SplitGrid` Core Library
//!
//! This crate provides a host-agnostic layout engine that tiles several tabs
//! of a window into one resizable grid.
//!
//! # Crate Structure
//!
//! - [`split`] - Region matrix, divider synthesis, size model, groups and drag sessions
//! - [`engine`] - [`SplitViewEngine`], the event-driven facade a host drives
//! - [`host`] - Host seams: tab capabilities, events and the rendering surface
//! - [`config`] - Split view settings and persistence
//! - [`tracing`] - Structured logging setup and span names
//! - [`error`] - Crate-level error type

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;
pub mod host;
pub mod split;
pub mod tracing;

// =============================================================================
// Convenience re-exports
// =============================================================================

pub use config::{ConfigError, ConfigManager, ConfigResult, SplitViewSettings};
pub use engine::{LayoutShortcut, SplitViewEngine};
pub use error::{Result, SplitGridError};
pub use host::{
    CursorShape, DividerHit, HeadlessSurface, HostTab, PointerEvent, RenderSurface, TabEvent,
    TabSnapshot,
};
pub use split::{
    DEFAULT_MIN_SIZE_PERCENT, Dissolution, DividerTrack, DragSession, FULL_PERCENT, GridTemplate,
    GroupId, LayoutDescription, LayoutKind, Orientation, PointerPosition, RegionMatrix,
    RegionPlacement, RemoveOutcome, ResizeController, SizeModel, SplitError, SplitGroup,
    SplitGroupStore, SurfaceExtent, TabId, TrackSpan,
};
pub use tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, init_tracing,
    is_tracing_initialized, span_names,
};
