//! Split view engine
//!
//! [`SplitViewEngine`] is the single entry point a host drives. It owns the
//! group store, the resize controller and the rendering surface, turns tab
//! and pointer events into store and size mutations, and pushes the result
//! to the surface.
//!
//! Every dispatch method takes `&mut self`, so a surface callback can never
//! re-enter the engine while it is mid-update.

use crate::config::{ConfigManager, SplitViewSettings};
use crate::host::{CursorShape, DividerHit, HostTab, PointerEvent, RenderSurface, TabEvent};
use crate::split::{
    Dissolution, GroupId, LayoutDescription, LayoutKind, PointerPosition, RemoveOutcome,
    ResizeController, SplitError, SplitGroupStore, TabId,
};
use crate::tracing::span_names;

/// Keyboard shortcuts acting on the active group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutShortcut {
    /// Switch the active group to a layout kind.
    Kind(LayoutKind),
    /// Dissolve the active group.
    Unsplit,
}

/// Drives split groups for one window.
#[derive(Debug)]
pub struct SplitViewEngine<S: RenderSurface> {
    store: SplitGroupStore,
    resize: ResizeController,
    settings: SplitViewSettings,
    surface: S,
}

impl<S: RenderSurface> SplitViewEngine<S> {
    /// Creates an engine rendering to `surface`.
    pub fn new(surface: S, settings: SplitViewSettings) -> Self {
        Self {
            store: SplitGroupStore::new(),
            resize: ResizeController::new(settings.min_size_percent),
            settings,
            surface,
        }
    }

    /// Creates an engine with the settings stored by `manager`.
    ///
    /// A missing settings file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `SplitGridError::Config` if the settings file cannot be read,
    /// parsed or validated.
    pub fn from_config(surface: S, manager: &ConfigManager) -> crate::Result<Self> {
        let settings = manager.load_settings()?;
        tracing::debug!(
            kind = %settings.default_layout_kind,
            min_size_percent = settings.min_size_percent,
            "Engine settings loaded"
        );
        Ok(Self::new(surface, settings))
    }

    /// Settings the engine was created with.
    pub const fn settings(&self) -> &SplitViewSettings {
        &self.settings
    }

    /// Group store, for read-only inspection.
    pub const fn store(&self) -> &SplitGroupStore {
        &self.store
    }

    /// Resize controller, for read-only inspection.
    pub const fn resize_controller(&self) -> &ResizeController {
        &self.resize
    }

    /// Rendering surface.
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable rendering surface, for hosts that resize it.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the engine and returns the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Layout kind of the active group, or `None` when nothing is split.
    pub fn active_group_layout_kind(&self) -> Option<LayoutKind> {
        self.store.active_layout_kind()
    }

    /// Layout description of the active group.
    pub fn active_layout(&self) -> Option<LayoutDescription> {
        self.store
            .active_group_id()
            .and_then(|id| self.store.layout_description(id))
    }

    /// Splits `tabs` into one group and shows it.
    ///
    /// Hidden and pinned tabs are skipped. Uses the configured default kind
    /// when `kind` is `None`. Returns `None` when fewer than two eligible
    /// tabs remain.
    pub fn create_split_view<T: HostTab>(
        &mut self,
        tabs: &[T],
        kind: Option<LayoutKind>,
    ) -> Option<GroupId> {
        let eligible: Vec<TabId> = tabs
            .iter()
            .filter(|tab| !tab.is_hidden() && !tab.is_pinned())
            .map(HostTab::id)
            .collect();
        if eligible.len() < tabs.len() {
            tracing::debug!(
                skipped = tabs.len() - eligible.len(),
                "Skipped hidden or pinned tabs"
            );
        }
        let kind = kind.unwrap_or(self.settings.default_layout_kind);

        // A successful request restructures a group and moves the active
        // pointer, so any open drag ends first.
        let mut distinct = eligible.clone();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.len() >= 2 {
            self.cancel_drag("group restructured");
        }

        let id = self.store.create_or_merge_group(&eligible, kind)?;
        self.render_active();
        Some(id)
    }

    /// Handles a layout shortcut. Returns false when there is no active
    /// group to act on.
    pub fn toggle_layout_shortcut(&mut self, shortcut: LayoutShortcut) -> bool {
        let Some(active) = self.store.active_group_id() else {
            tracing::debug!(?shortcut, "Layout shortcut without active group");
            return false;
        };
        self.cancel_drag_on(active);

        match shortcut {
            LayoutShortcut::Kind(kind) => {
                if self.store.cycle_layout_kind(kind).is_none() {
                    return false;
                }
                self.render_active();
            }
            LayoutShortcut::Unsplit => {
                let Some(Dissolution { released, .. }) = self.store.dissolve_active_group()
                else {
                    return false;
                };
                tracing::debug!(released = released.len(), "Unsplit active group");
                self.surface.clear_layout();
            }
        }
        true
    }

    /// Removes `tab` from its group, dissolving the group below two tabs.
    pub fn remove_tab_from_group(&mut self, tab: TabId) -> RemoveOutcome {
        if let Some(group) = self.store.group_of(tab) {
            self.cancel_drag_on(group);
        }

        let outcome = self.store.remove_tab(tab);
        match &outcome {
            RemoveOutcome::NotGrouped => {}
            RemoveOutcome::Shrunk(id) => {
                if self.store.active_group_id() == Some(*id) {
                    self.render_active();
                }
            }
            RemoveOutcome::Dissolved(dissolution) => {
                if dissolution.was_active {
                    self.surface.clear_layout();
                }
            }
        }
        outcome
    }

    /// Dispatches a tab lifecycle event.
    pub fn handle_tab_event<T: HostTab>(&mut self, event: TabEvent<'_, T>) {
        match event {
            TabEvent::Opened(tab) => {
                tracing::trace!(tab = %tab.id(), "Tab opened");
            }
            TabEvent::Closed(tab) | TabEvent::Pinned(tab) => {
                self.remove_tab_from_group(tab.id());
            }
            TabEvent::Selected(tab) => self.select_tab(tab.id()),
        }
    }

    /// Dispatches a pointer event. Invalid drags are logged and ignored.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        let result = match event {
            PointerEvent::Down {
                position,
                target: Some(hit),
            } => self.begin_drag(hit, position),
            PointerEvent::Down { target: None, .. } => Ok(()),
            PointerEvent::Move { position } => self.pointer_moved(position),
            PointerEvent::Up { position } => self.pointer_released(position),
        };
        if let Err(error) = result {
            tracing::warn!(%error, "Ignored pointer event");
        }
    }

    /// Applies the move queued since the last frame, if any.
    pub fn on_animation_frame(&mut self) {
        let Some(group) = self.resize.dragging_group() else {
            return;
        };
        if !self.resize.has_pending_move() {
            return;
        }
        let Some(sizes) = self.store.sizes_mut(group) else {
            self.cancel_drag("dragged group vanished");
            return;
        };
        match self.resize.on_frame(sizes) {
            Ok(Some(_)) => self.push_sizes(group),
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(%error, "Dropped coalesced pointer move");
                self.cancel_drag("invalid drag state");
            }
        }
    }

    fn select_tab(&mut self, tab: TabId) {
        let previous = self.store.active_group_id();
        let active = self.store.set_active_group_for_selection(tab);

        if let Some(dragged) = self.resize.dragging_group()
            && active != Some(dragged)
        {
            self.cancel_drag("active group changed");
        }

        if active.is_some() {
            self.render_active();
        } else if previous.is_some() {
            self.surface.clear_layout();
        }
    }

    fn begin_drag(&mut self, hit: DividerHit, position: PointerPosition) -> Result<(), SplitError> {
        let _span = crate::trace_operation!(
            span_names::SPLIT_DRAG,
            orientation = %hit.orientation,
            sequence = hit.sequence
        )
        .entered();

        let Some(group) = self.store.active_group() else {
            tracing::debug!("Divider press without active group");
            return Ok(());
        };
        let track = group
            .template()
            .find_track(hit.orientation, hit.sequence)
            .copied()
            .ok_or(SplitError::TrackNotFound {
                orientation: hit.orientation,
                sequence: hit.sequence,
            })?;

        self.resize
            .begin_drag(group.id(), track, position, self.surface.extent())?;
        self.surface.capture_pointer();
        self.surface
            .set_cursor(CursorShape::for_track(hit.orientation));
        Ok(())
    }

    fn pointer_moved(&mut self, position: PointerPosition) -> Result<(), SplitError> {
        if !self.resize.is_dragging() {
            return Ok(());
        }
        if self.settings.coalesce_pointer_moves {
            return self.resize.queue_pointer_move(position);
        }
        self.apply_move(position)
    }

    fn pointer_released(&mut self, position: PointerPosition) -> Result<(), SplitError> {
        if !self.resize.is_dragging() {
            return Ok(());
        }
        // The release position supersedes any queued move.
        let applied = self.apply_move(position);
        self.finish_drag();
        applied
    }

    fn apply_move(&mut self, position: PointerPosition) -> Result<(), SplitError> {
        let group = self
            .resize
            .dragging_group()
            .ok_or(SplitError::NoDragSession)?;
        let sizes = self
            .store
            .sizes_mut(group)
            .ok_or(SplitError::GroupNotFound(group))?;
        self.resize.on_pointer_move(position, sizes)?;
        self.push_sizes(group);
        Ok(())
    }

    /// Ends the drag if it targets `group`.
    fn cancel_drag_on(&mut self, group: GroupId) {
        if self.resize.dragging_group() == Some(group) {
            self.cancel_drag("group restructured");
        }
    }

    fn cancel_drag(&mut self, reason: &str) {
        if self.resize.is_dragging() {
            tracing::debug!(reason, "Force-ending drag");
            self.finish_drag();
        }
    }

    fn finish_drag(&mut self) {
        if self.resize.end_drag().is_ok() {
            self.surface.release_pointer();
            self.surface.set_cursor(CursorShape::Default);
        }
    }

    fn render_active(&mut self) {
        match self.active_layout() {
            Some(layout) => self.surface.apply_layout(&layout),
            None => self.surface.clear_layout(),
        }
    }

    fn push_sizes(&mut self, group: GroupId) {
        if self.store.active_group_id() != Some(group) {
            return;
        }
        if let Some(current) = self.store.group(group) {
            let sizes = current.sizes();
            self.surface
                .apply_sizes(group, sizes.column_widths(), sizes.row_heights());
        }
    }
}

impl<S: RenderSurface + Default> Default for SplitViewEngine<S> {
    fn default() -> Self {
        Self::new(S::default(), SplitViewSettings::default())
    }
}
