//! Host-facing interfaces
//!
//! The engine talks to the host through two seams: [`HostTab`], the minimal
//! view of a tab it needs, and [`RenderSurface`], which receives layouts and
//! pointer feedback. Tab and pointer input arrives as [`TabEvent`] and
//! [`PointerEvent`] values.

use crate::split::{
    GroupId, LayoutDescription, Orientation, PointerPosition, SurfaceExtent, TabId,
};

/// Capabilities the engine reads from a host tab.
pub trait HostTab {
    /// Stable identifier.
    fn id(&self) -> TabId;
    /// Pinned tabs are never split.
    fn is_pinned(&self) -> bool;
    /// Hidden tabs are never split.
    fn is_hidden(&self) -> bool;
    /// Whether the tab is currently selected in the host.
    fn is_selected(&self) -> bool;
}

/// Plain-data [`HostTab`] for hosts that keep tab state elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSnapshot {
    /// Tab identifier.
    pub id: TabId,
    /// Pinned flag.
    pub pinned: bool,
    /// Hidden flag.
    pub hidden: bool,
    /// Selected flag.
    pub selected: bool,
}

impl TabSnapshot {
    /// A visible, unpinned, unselected tab.
    #[must_use]
    pub const fn new(id: TabId) -> Self {
        Self {
            id,
            pinned: false,
            hidden: false,
            selected: false,
        }
    }

    /// Sets the pinned flag.
    #[must_use]
    pub const fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Sets the hidden flag.
    #[must_use]
    pub const fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Sets the selected flag.
    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl HostTab for TabSnapshot {
    fn id(&self) -> TabId {
        self.id
    }

    fn is_pinned(&self) -> bool {
        self.pinned
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn is_selected(&self) -> bool {
        self.selected
    }
}

/// Tab lifecycle signals delivered by the host.
#[derive(Debug, Clone, Copy)]
pub enum TabEvent<'a, T: HostTab> {
    /// A tab was opened.
    Opened(&'a T),
    /// A tab was closed.
    Closed(&'a T),
    /// A tab became the selected tab.
    Selected(&'a T),
    /// A tab was pinned.
    Pinned(&'a T),
}

/// Divider element under the pointer, as identified by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DividerHit {
    /// Orientation of the hit track.
    pub orientation: Orientation,
    /// 1-based sequence number of the hit track.
    pub sequence: usize,
}

/// Pointer input in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed; `target` is set when the press landed on a divider.
    Down {
        /// Pointer position.
        position: PointerPosition,
        /// Divider under the pointer.
        target: Option<DividerHit>,
    },
    /// Pointer moved.
    Move {
        /// Pointer position.
        position: PointerPosition,
    },
    /// Button released.
    Up {
        /// Pointer position.
        position: PointerPosition,
    },
}

/// Cursor shapes the engine asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    /// Host default cursor.
    #[default]
    Default,
    /// Left-right resize, used while dragging a vertical track.
    ColumnResize,
    /// Up-down resize, used while dragging a horizontal track.
    RowResize,
}

impl CursorShape {
    /// Resize cursor for dragging a track of `orientation`.
    #[must_use]
    pub const fn for_track(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Vertical => Self::ColumnResize,
            Orientation::Horizontal => Self::RowResize,
        }
    }
}

/// Rendering surface that turns layout descriptions into visuals.
pub trait RenderSurface {
    /// Current size of the area split groups are laid out in.
    fn extent(&self) -> SurfaceExtent;

    /// Lays out a group from scratch.
    fn apply_layout(&mut self, layout: &LayoutDescription);

    /// Updates track sizes of the group currently laid out.
    fn apply_sizes(&mut self, group: GroupId, column_widths: &[f64], row_heights: &[f64]);

    /// Removes any split layout; tabs render standalone.
    fn clear_layout(&mut self);

    /// Routes all pointer input to the engine until released.
    fn capture_pointer(&mut self) {}

    /// Ends pointer capture.
    fn release_pointer(&mut self) {}

    /// Changes the pointer cursor.
    fn set_cursor(&mut self, _cursor: CursorShape) {}
}

/// Surface that only remembers what it was asked to show.
///
/// Used by the CLI and by tests that inspect engine output.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    extent: SurfaceExtent,
    layout: Option<LayoutDescription>,
    cursor: CursorShape,
    pointer_captured: bool,
    layout_applications: usize,
    size_updates: usize,
}

impl HeadlessSurface {
    /// Creates a surface of the given size.
    #[must_use]
    pub const fn new(extent: SurfaceExtent) -> Self {
        Self {
            extent,
            layout: None,
            cursor: CursorShape::Default,
            pointer_captured: false,
            layout_applications: 0,
            size_updates: 0,
        }
    }

    /// Last layout applied, with later size updates folded in.
    #[must_use]
    pub const fn layout(&self) -> Option<&LayoutDescription> {
        self.layout.as_ref()
    }

    /// Current cursor.
    #[must_use]
    pub const fn cursor(&self) -> CursorShape {
        self.cursor
    }

    /// Whether the pointer is captured.
    #[must_use]
    pub const fn is_pointer_captured(&self) -> bool {
        self.pointer_captured
    }

    /// Number of full layout applications.
    #[must_use]
    pub const fn layout_applications(&self) -> usize {
        self.layout_applications
    }

    /// Number of size-only updates.
    #[must_use]
    pub const fn size_updates(&self) -> usize {
        self.size_updates
    }

    /// Resizes the surface.
    pub fn set_extent(&mut self, extent: SurfaceExtent) {
        self.extent = extent;
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(SurfaceExtent::new(1000.0, 1000.0))
    }
}

impl RenderSurface for HeadlessSurface {
    fn extent(&self) -> SurfaceExtent {
        self.extent
    }

    fn apply_layout(&mut self, layout: &LayoutDescription) {
        self.layout = Some(layout.clone());
        self.layout_applications += 1;
    }

    fn apply_sizes(&mut self, group: GroupId, column_widths: &[f64], row_heights: &[f64]) {
        self.size_updates += 1;
        if let Some(layout) = self.layout.as_mut().filter(|l| l.group == group) {
            layout.column_widths = column_widths.to_vec();
            layout.row_heights = row_heights.to_vec();
        }
    }

    fn clear_layout(&mut self) {
        self.layout = None;
    }

    fn capture_pointer(&mut self) {
        self.pointer_captured = true;
    }

    fn release_pointer(&mut self) {
        self.pointer_captured = false;
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        self.cursor = cursor;
    }
}
