//! Interactive divider resizing
//!
//! [`ResizeController`] runs at most one drag session at a time. Pointer
//! movement along the axis perpendicular to the dragged track is converted
//! into a percentage of the surface extent and transferred between the two
//! size entries adjacent to the track.
//!
//! Pointer moves can be queued instead of applied directly. Only the latest
//! queued position is kept, and [`ResizeController::on_frame`] applies it,
//! so a burst of moves between two frames costs one size update.

use serde::{Deserialize, Serialize};

use super::dividers::DividerTrack;
use super::error::SplitError;
use super::sizes::{FULL_PERCENT, SizeModel};
use super::types::{GroupId, Orientation};

/// Default minimum size of a column or row, in percent.
pub const DEFAULT_MIN_SIZE_PERCENT: f64 = 10.0;

/// Pointer position in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl PointerPosition {
    /// Creates a position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceExtent {
    /// Total width.
    pub width: f64,
    /// Total height.
    pub height: f64,
}

impl SurfaceExtent {
    /// Creates an extent.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent along the axis a track of `orientation` is dragged.
    #[must_use]
    pub const fn along(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Vertical => self.width,
            Orientation::Horizontal => self.height,
        }
    }
}

/// An open drag on one divider track.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    group: GroupId,
    track: DividerTrack,
    reference: PointerPosition,
    extent: SurfaceExtent,
}

impl DragSession {
    /// Group whose sizes the drag mutates.
    #[must_use]
    pub const fn group(&self) -> GroupId {
        self.group
    }

    /// Track being dragged.
    #[must_use]
    pub const fn track(&self) -> &DividerTrack {
        &self.track
    }

    /// Pointer position the next delta is measured from.
    #[must_use]
    pub const fn reference(&self) -> PointerPosition {
        self.reference
    }
}

/// Single-owner lease on size mutation by pointer drags.
#[derive(Debug, Clone)]
pub struct ResizeController {
    session: Option<DragSession>,
    pending: Option<PointerPosition>,
    minimum_percent: f64,
}

impl ResizeController {
    /// Creates a controller enforcing `minimum_percent` per entry.
    #[must_use]
    pub fn new(minimum_percent: f64) -> Self {
        Self {
            session: None,
            pending: None,
            minimum_percent: minimum_percent.clamp(0.0, FULL_PERCENT / 2.0),
        }
    }

    /// Minimum size of any entry, in percent.
    #[must_use]
    pub const fn minimum_percent(&self) -> f64 {
        self.minimum_percent
    }

    /// Returns the open session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Returns true while a drag is open.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Group under the open drag, if any.
    #[must_use]
    pub fn dragging_group(&self) -> Option<GroupId> {
        self.session.as_ref().map(DragSession::group)
    }

    /// Returns true if a queued move waits for the next frame.
    #[must_use]
    pub const fn has_pending_move(&self) -> bool {
        self.pending.is_some()
    }

    /// Opens a drag session on `track` of `group`.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::DragInProgress` if a session is already open.
    pub fn begin_drag(
        &mut self,
        group: GroupId,
        track: DividerTrack,
        pointer: PointerPosition,
        extent: SurfaceExtent,
    ) -> Result<(), SplitError> {
        if let Some(open) = &self.session {
            return Err(SplitError::DragInProgress(open.group));
        }
        tracing::debug!(
            group = %group,
            orientation = %track.orientation,
            sequence = track.sequence,
            "Drag started"
        );
        self.session = Some(DragSession {
            group,
            track,
            reference: pointer,
            extent,
        });
        self.pending = None;
        Ok(())
    }

    /// Applies one pointer move immediately and returns the applied delta.
    ///
    /// When the delta is clamped by the minimum size the reference position
    /// stays where it was, so the pointer has to travel back before the
    /// track follows it again. A partly clamped move still applies the part
    /// that fits, which leaves the track offset from the pointer until the
    /// drag ends.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::NoDragSession` if no drag is open, or
    /// `SplitError::TrackOutOfRange` if `sizes` does not match the track.
    pub fn on_pointer_move(
        &mut self,
        position: PointerPosition,
        sizes: &mut SizeModel,
    ) -> Result<f64, SplitError> {
        let minimum = self.minimum_percent;
        let session = self.session.as_mut().ok_or(SplitError::NoDragSession)?;
        let orientation = session.track.orientation;

        let extent = session.extent.along(orientation);
        if extent <= 0.0 {
            return Ok(0.0);
        }
        let movement = match orientation {
            Orientation::Vertical => position.x - session.reference.x,
            Orientation::Horizontal => position.y - session.reference.y,
        };
        let requested = movement / extent * FULL_PERCENT;

        let applied = sizes.transfer(
            orientation,
            session.track.structural_index,
            requested,
            minimum,
        )?;

        if (applied - requested).abs() <= f64::EPSILON {
            session.reference = position;
        } else {
            tracing::trace!(requested, applied, "Drag clamped at minimum size");
        }
        Ok(applied)
    }

    /// Queues a pointer move for the next frame, replacing any queued one.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::NoDragSession` if no drag is open.
    pub fn queue_pointer_move(&mut self, position: PointerPosition) -> Result<(), SplitError> {
        if self.session.is_none() {
            return Err(SplitError::NoDragSession);
        }
        self.pending = Some(position);
        Ok(())
    }

    /// Applies the queued move, if any. Returns `Ok(None)` when nothing was
    /// queued.
    ///
    /// # Errors
    ///
    /// Same as [`Self::on_pointer_move`].
    pub fn on_frame(&mut self, sizes: &mut SizeModel) -> Result<Option<f64>, SplitError> {
        match self.pending.take() {
            Some(position) => self.on_pointer_move(position, sizes).map(Some),
            None => Ok(None),
        }
    }

    /// Closes the open session, discarding any queued move.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::NoDragSession` if no drag is open.
    pub fn end_drag(&mut self) -> Result<DragSession, SplitError> {
        self.pending = None;
        let session = self.session.take().ok_or(SplitError::NoDragSession)?;
        tracing::debug!(group = %session.group, "Drag ended");
        Ok(session)
    }
}

impl Default for ResizeController {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SIZE_PERCENT)
    }
}
