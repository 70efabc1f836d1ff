//! A single split group and its synthesized layout

use serde::Serialize;

use super::dividers::GridTemplate;
use super::matrix::{RegionMatrix, RegionPlacement};
use super::sizes::SizeModel;
use super::types::{GroupId, LayoutKind, TabId};

/// Two or more tabs tiled together.
///
/// The template and sizes are derived state: [`SplitGroup::resynthesize`]
/// recomputes the template from the tab list and layout kind, then keeps
/// or resets the sizes depending on whether the track counts moved.
#[derive(Debug, Clone)]
pub struct SplitGroup {
    id: GroupId,
    tabs: Vec<TabId>,
    layout_kind: LayoutKind,
    matrix: Option<RegionMatrix>,
    template: GridTemplate,
    sizes: SizeModel,
    focused_tab: Option<TabId>,
}

/// Everything a rendering surface needs to lay out one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutDescription {
    /// The group being laid out.
    pub group: GroupId,
    /// Arrangement the template was built from.
    pub layout_kind: LayoutKind,
    /// Logical rows, columns and divider placements.
    pub template: GridTemplate,
    /// Cell rectangle of every tab.
    pub regions: Vec<RegionPlacement>,
    /// Column widths in percent.
    pub column_widths: Vec<f64>,
    /// Row heights in percent.
    pub row_heights: Vec<f64>,
    /// Tab that was last selected inside the group.
    pub focused_tab: Option<TabId>,
}

impl SplitGroup {
    pub(crate) fn new(tabs: Vec<TabId>, layout_kind: LayoutKind) -> Self {
        let mut group = Self {
            id: GroupId::new(),
            tabs,
            layout_kind,
            matrix: None,
            template: GridTemplate::default(),
            sizes: SizeModel::default(),
            focused_tab: None,
        };
        group.resynthesize();
        group
    }

    /// Group identifier.
    #[must_use]
    pub const fn id(&self) -> GroupId {
        self.id
    }

    /// Tabs in layout order.
    #[must_use]
    pub fn tabs(&self) -> &[TabId] {
        &self.tabs
    }

    /// Returns true if `tab` belongs to this group.
    #[must_use]
    pub fn contains(&self, tab: TabId) -> bool {
        self.tabs.contains(&tab)
    }

    /// Current layout kind.
    #[must_use]
    pub const fn layout_kind(&self) -> LayoutKind {
        self.layout_kind
    }

    /// Region matrix of the current tabs, if there are at least two.
    #[must_use]
    pub const fn matrix(&self) -> Option<&RegionMatrix> {
        self.matrix.as_ref()
    }

    /// Synthesized template.
    #[must_use]
    pub const fn template(&self) -> &GridTemplate {
        &self.template
    }

    /// Current sizes.
    #[must_use]
    pub const fn sizes(&self) -> &SizeModel {
        &self.sizes
    }

    pub(crate) fn sizes_mut(&mut self) -> &mut SizeModel {
        &mut self.sizes
    }

    /// Tab last selected inside the group.
    #[must_use]
    pub const fn focused_tab(&self) -> Option<TabId> {
        self.focused_tab
    }

    pub(crate) fn set_focused_tab(&mut self, tab: TabId) {
        if self.contains(tab) {
            self.focused_tab = Some(tab);
        }
    }

    pub(crate) fn set_layout_kind(&mut self, kind: LayoutKind) {
        self.layout_kind = kind;
    }

    /// Appends tabs not yet in the group, keeping the existing order.
    pub(crate) fn absorb(&mut self, tabs: &[TabId]) -> usize {
        let before = self.tabs.len();
        for tab in tabs {
            if !self.tabs.contains(tab) {
                self.tabs.push(*tab);
            }
        }
        self.tabs.len() - before
    }

    /// Removes a tab. Returns false if it was not a member.
    pub(crate) fn detach(&mut self, tab: TabId) -> bool {
        let Some(pos) = self.tabs.iter().position(|t| *t == tab) else {
            return false;
        };
        self.tabs.remove(pos);
        if self.focused_tab == Some(tab) {
            self.focused_tab = None;
        }
        true
    }

    /// Rebuilds matrix and template, keeping sizes when track counts match.
    ///
    /// Returns true if the sizes were reset.
    pub(crate) fn resynthesize(&mut self) -> bool {
        self.matrix = RegionMatrix::build(&self.tabs, self.layout_kind);
        self.template = self
            .matrix
            .as_ref()
            .map(GridTemplate::synthesize)
            .unwrap_or_default();
        self.sizes
            .init_or_preserve(self.template.columns, self.template.rows)
    }

    /// Builds the description handed to the rendering surface.
    #[must_use]
    pub fn describe(&self) -> LayoutDescription {
        LayoutDescription {
            group: self.id,
            layout_kind: self.layout_kind,
            template: self.template.clone(),
            regions: self
                .matrix
                .as_ref()
                .map(RegionMatrix::placements)
                .unwrap_or_default(),
            column_widths: self.sizes.column_widths().to_vec(),
            row_heights: self.sizes.row_heights().to_vec(),
            focused_tab: self.focused_tab,
        }
    }
}
