//! Split group ownership and the active group pointer
//!
//! [`SplitGroupStore`] is the only owner of split groups. It creates,
//! merges and dissolves them in response to host tab events, and tracks
//! which group, if any, is currently applied to the rendering surface.
//!
//! # States
//!
//! ```text
//!            select grouped tab
//! NONE_ACTIVE ─────────────────▶ GROUP_ACTIVE
//!      ▲                              │
//!      └──────────────────────────────┘
//!   select standalone tab / dissolve active group
//! ```

use std::collections::HashMap;

use super::group::{LayoutDescription, SplitGroup};
use super::sizes::SizeModel;
use super::types::{GroupId, LayoutKind, TabId};
use crate::tracing::span_names;

/// Result of removing a tab from its group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The tab was not in any group.
    NotGrouped,
    /// The group kept at least two tabs and was re-synthesized.
    Shrunk(GroupId),
    /// The group fell below two tabs and no longer exists.
    Dissolved(Dissolution),
}

/// A group that was dissolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dissolution {
    /// The removed group.
    pub group: GroupId,
    /// Tabs that are standalone again.
    pub released: Vec<TabId>,
    /// Whether the group was the active one.
    pub was_active: bool,
}

/// Owns every split group of a window.
#[derive(Debug, Default)]
pub struct SplitGroupStore {
    groups: HashMap<GroupId, SplitGroup>,
    active: Option<GroupId>,
}

impl SplitGroupStore {
    /// Creates an empty store with no active group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Iterates over all groups in no particular order.
    pub fn groups(&self) -> impl Iterator<Item = &SplitGroup> {
        self.groups.values()
    }

    /// Looks up a group.
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&SplitGroup> {
        self.groups.get(&id)
    }

    /// Group containing `tab`, if any.
    #[must_use]
    pub fn group_of(&self, tab: TabId) -> Option<GroupId> {
        self.groups
            .values()
            .find(|group| group.contains(tab))
            .map(SplitGroup::id)
    }

    /// Returns true if `tab` belongs to a group.
    #[must_use]
    pub fn is_grouped(&self, tab: TabId) -> bool {
        self.group_of(tab).is_some()
    }

    /// Identifier of the active group.
    #[must_use]
    pub const fn active_group_id(&self) -> Option<GroupId> {
        self.active
    }

    /// The active group.
    #[must_use]
    pub fn active_group(&self) -> Option<&SplitGroup> {
        self.active.and_then(|id| self.groups.get(&id))
    }

    /// Layout kind of the active group.
    #[must_use]
    pub fn active_layout_kind(&self) -> Option<LayoutKind> {
        self.active_group().map(SplitGroup::layout_kind)
    }

    /// Layout description of a group.
    #[must_use]
    pub fn layout_description(&self, id: GroupId) -> Option<LayoutDescription> {
        self.groups.get(&id).map(SplitGroup::describe)
    }

    pub(crate) fn sizes_mut(&mut self, id: GroupId) -> Option<&mut SizeModel> {
        self.groups.get_mut(&id).map(SplitGroup::sizes_mut)
    }

    /// Groups `tabs` together and makes the result the active group.
    ///
    /// Duplicate tabs count once. Fewer than two distinct tabs is a silent
    /// no-op returning `None`. If a requested tab is already grouped, its
    /// group absorbs the others and switches to `kind`; requested tabs that
    /// belong to yet another group are moved out of it first.
    pub fn create_or_merge_group(&mut self, tabs: &[TabId], kind: LayoutKind) -> Option<GroupId> {
        let _span = crate::trace_operation!(span_names::SPLIT_CREATE, tabs = tabs.len()).entered();

        let mut requested: Vec<TabId> = Vec::with_capacity(tabs.len());
        for tab in tabs {
            if !requested.contains(tab) {
                requested.push(*tab);
            }
        }
        if requested.len() < 2 {
            tracing::debug!(tabs = requested.len(), "Ignoring split request with fewer than two tabs");
            return None;
        }

        let target = requested.iter().find_map(|tab| self.group_of(*tab));
        let id = match target {
            Some(id) => {
                for tab in &requested {
                    if let Some(other) = self.group_of(*tab).filter(|other| *other != id) {
                        self.detach(other, *tab);
                    }
                }
                let group = self.groups.get_mut(&id)?;
                let added = group.absorb(&requested);
                group.set_layout_kind(kind);
                group.resynthesize();
                tracing::info!(group = %id, added, kind = %kind, "Merged tabs into split group");
                id
            }
            None => {
                let group = SplitGroup::new(requested, kind);
                let id = group.id();
                tracing::info!(group = %id, tabs = group.tabs().len(), kind = %kind, "Created split group");
                self.groups.insert(id, group);
                id
            }
        };

        self.active = Some(id);
        Some(id)
    }

    /// Removes `tab` from its group, dissolving the group below two tabs.
    pub fn remove_tab(&mut self, tab: TabId) -> RemoveOutcome {
        let _span = crate::trace_operation!(span_names::SPLIT_REMOVE_TAB).entered();

        match self.group_of(tab) {
            Some(id) => self.detach(id, tab),
            None => RemoveOutcome::NotGrouped,
        }
    }

    /// Activates the group of a newly selected tab, or deactivates when the
    /// tab is standalone. Returns the active group afterwards.
    pub fn set_active_group_for_selection(&mut self, tab: TabId) -> Option<GroupId> {
        let _span = crate::trace_operation_debug!(span_names::SPLIT_ACTIVATE).entered();

        let Some(id) = self.group_of(tab) else {
            self.deactivate();
            return None;
        };
        if let Some(group) = self.groups.get_mut(&id) {
            group.set_focused_tab(tab);
            group.resynthesize();
        }
        self.active = Some(id);
        Some(id)
    }

    /// Clears the active group pointer. Groups are kept.
    pub fn deactivate(&mut self) {
        if let Some(id) = self.active.take() {
            tracing::debug!(group = %id, "Deactivated split group");
        }
    }

    /// Switches the active group to `kind`. No-op without an active group.
    pub fn cycle_layout_kind(&mut self, kind: LayoutKind) -> Option<GroupId> {
        let id = self.active?;
        let group = self.groups.get_mut(&id)?;
        if group.layout_kind() != kind {
            group.set_layout_kind(kind);
            tracing::debug!(group = %id, kind = %kind, "Changed layout kind");
        }
        group.resynthesize();
        Some(id)
    }

    /// Dissolves the active group. No-op without an active group.
    pub fn dissolve_active_group(&mut self) -> Option<Dissolution> {
        let id = self.active?;
        self.dissolve(id)
    }

    fn detach(&mut self, id: GroupId, tab: TabId) -> RemoveOutcome {
        let Some(group) = self.groups.get_mut(&id) else {
            return RemoveOutcome::NotGrouped;
        };
        if !group.detach(tab) {
            return RemoveOutcome::NotGrouped;
        }
        if group.tabs().len() < 2 {
            return self
                .dissolve(id)
                .map_or(RemoveOutcome::NotGrouped, RemoveOutcome::Dissolved);
        }
        group.resynthesize();
        tracing::debug!(group = %id, tabs = group.tabs().len(), "Removed tab from split group");
        RemoveOutcome::Shrunk(id)
    }

    fn dissolve(&mut self, id: GroupId) -> Option<Dissolution> {
        let group = self.groups.remove(&id)?;
        let was_active = self.active == Some(id);
        if was_active {
            self.active = None;
        }
        tracing::info!(group = %id, was_active, "Dissolved split group");
        Some(Dissolution {
            group: id,
            released: group.tabs().to_vec(),
            was_active,
        })
    }
}
