//! Per-group track size percentages
//!
//! Column widths and row heights are kept as percentages of the rendering
//! surface. Each array sums to 100. A drag transfers size between the two
//! entries adjacent to a track, so the sum never changes.

use serde::Serialize;

use super::error::SplitError;
use super::types::Orientation;

/// Total of every size array.
pub const FULL_PERCENT: f64 = 100.0;

/// Column and row percentages for one split group.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SizeModel {
    column_widths: Vec<f64>,
    row_heights: Vec<f64>,
}

impl SizeModel {
    /// Creates uniform sizes for the given track counts.
    #[must_use]
    pub fn uniform(columns: usize, rows: usize) -> Self {
        Self {
            column_widths: uniform(columns),
            row_heights: uniform(rows),
        }
    }

    /// Resets both arrays to uniform sizes when either track count changed.
    ///
    /// Returns `true` if the arrays were replaced. Sizes the user customized
    /// survive any call whose counts match the stored arrays.
    pub fn init_or_preserve(&mut self, columns: usize, rows: usize) -> bool {
        if self.column_widths.len() == columns && self.row_heights.len() == rows {
            return false;
        }
        tracing::debug!(
            from_columns = self.column_widths.len(),
            from_rows = self.row_heights.len(),
            columns,
            rows,
            "Track counts changed, resetting sizes"
        );
        *self = Self::uniform(columns, rows);
        true
    }

    /// Column widths, left to right.
    #[must_use]
    pub fn column_widths(&self) -> &[f64] {
        &self.column_widths
    }

    /// Row heights, top to bottom.
    #[must_use]
    pub fn row_heights(&self) -> &[f64] {
        &self.row_heights
    }

    /// Returns the size array resized by tracks of `orientation`.
    #[must_use]
    pub fn sizes(&self, orientation: Orientation) -> &[f64] {
        match orientation {
            Orientation::Vertical => &self.column_widths,
            Orientation::Horizontal => &self.row_heights,
        }
    }

    /// Moves up to `delta` percent from entry `structural_index` to entry
    /// `structural_index - 1`, keeping both at or above `minimum`.
    ///
    /// A negative `delta` moves size the other way. Returns the delta that
    /// was actually applied.
    ///
    /// When `minimum` leaves no room in an even split (eleven columns at
    /// 10%), half of an even share is enforced instead, so every track stays
    /// draggable.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::TrackOutOfRange` if `structural_index` does not
    /// address two adjacent entries.
    pub fn transfer(
        &mut self,
        orientation: Orientation,
        structural_index: usize,
        delta: f64,
        minimum: f64,
    ) -> Result<f64, SplitError> {
        let sizes = match orientation {
            Orientation::Vertical => &mut self.column_widths,
            Orientation::Horizontal => &mut self.row_heights,
        };
        if structural_index == 0 || structural_index >= sizes.len() {
            return Err(SplitError::TrackOutOfRange {
                orientation,
                index: structural_index,
                len: sizes.len(),
            });
        }

        if !delta.is_finite() {
            return Ok(0.0);
        }

        let minimum = effective_minimum(minimum, sizes.len());
        let before = sizes[structural_index - 1];
        let after = sizes[structural_index];
        let lower = -(before - minimum).max(0.0);
        let upper = (after - minimum).max(0.0);
        let applied = delta.clamp(lower, upper);

        sizes[structural_index - 1] = before + applied;
        sizes[structural_index] = after - applied;
        Ok(applied)
    }
}

fn effective_minimum(minimum: f64, count: usize) -> f64 {
    let share = FULL_PERCENT / count as f64;
    if minimum >= share {
        share / 2.0
    } else {
        minimum
    }
}

fn uniform(count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    vec![FULL_PERCENT / count as f64; count]
}
