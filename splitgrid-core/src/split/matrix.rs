//! Region matrix construction
//!
//! A region matrix is a rectangular grid of tab identifiers. Each tab owns
//! one region; a tab that appears in more than one cell spans those cells.
//!
//! ```text
//! grid, 5 tabs            vsep, 3 tabs      hsep, 3 tabs
//! ┌───┬───┬───┐           ┌───┬───┬───┐     ┌───┐
//! │ A │ C │   │           │ A │ B │ C │     │ A │
//! ├───┼───┤ E │           └───┴───┴───┘     ├───┤
//! │ B │ D │   │                             │ B │
//! └───┴───┴───┘                             ├───┤
//!                                           │ C │
//!                                           └───┘
//! ```

use serde::Serialize;

use super::types::{LayoutKind, TabId};

/// Rectangular matrix of region identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionMatrix {
    rows: Vec<Vec<TabId>>,
}

/// Cell rectangle occupied by one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionPlacement {
    /// The tab rendered in this region.
    pub tab: TabId,
    /// 0-based first row.
    pub row: usize,
    /// 0-based first column.
    pub column: usize,
    /// Number of rows covered.
    pub row_span: usize,
    /// Number of columns covered.
    pub column_span: usize,
}

impl RegionMatrix {
    /// Builds the matrix for an ordered tab list.
    ///
    /// Returns `None` for fewer than two tabs; a single tab is never split.
    #[must_use]
    pub fn build(tabs: &[TabId], kind: LayoutKind) -> Option<Self> {
        if tabs.len() < 2 {
            return None;
        }

        let rows = match kind {
            LayoutKind::Vsep => vec![tabs.to_vec()],
            LayoutKind::Hsep => tabs.iter().map(|tab| vec![*tab]).collect(),
            LayoutKind::Grid if tabs.len() == 2 => vec![tabs.to_vec()],
            LayoutKind::Grid => {
                let top: Vec<TabId> = tabs.iter().step_by(2).copied().collect();
                let mut bottom: Vec<TabId> = tabs.iter().skip(1).step_by(2).copied().collect();
                if tabs.len() % 2 == 1 {
                    // The last tab sits at the end of the top row; repeating it
                    // below makes it span the full height of the last column.
                    bottom.push(tabs[tabs.len() - 1]);
                }
                debug_assert_eq!(top.len(), bottom.len());
                vec![top, bottom]
            }
        };

        Some(Self { rows })
    }

    /// Wraps pre-computed rows.
    ///
    /// Returns `None` if the rows are empty or not all the same length.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<TabId>>) -> Option<Self> {
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self { rows })
    }

    /// Number of logical rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of logical columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns the identifier at a cell.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<TabId> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Returns the rows of the matrix.
    #[must_use]
    pub fn rows(&self) -> &[Vec<TabId>] {
        &self.rows
    }

    /// Returns the bounding rectangle of every region, in first-appearance
    /// order (row-major).
    #[must_use]
    pub fn placements(&self) -> Vec<RegionPlacement> {
        let mut placements: Vec<RegionPlacement> = Vec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, tab) in row.iter().enumerate() {
                if let Some(existing) = placements.iter_mut().find(|p| p.tab == *tab) {
                    existing.row_span = existing.row_span.max(r + 1 - existing.row);
                    existing.column_span = existing.column_span.max(c + 1 - existing.column);
                } else {
                    placements.push(RegionPlacement {
                        tab: *tab,
                        row: r,
                        column: c,
                        row_span: 1,
                        column_span: 1,
                    });
                }
            }
        }
        placements
    }
}
