//! Divider track synthesis
//!
//! Turns a [`RegionMatrix`] into a [`GridTemplate`]: the number of logical
//! rows and columns plus the minimal set of divider tracks between regions
//! of differing identity.
//!
//! Adjacent boundary positions are coalesced. A vertical boundary found at the
//! same column position in consecutive rows becomes a single track, and a
//! horizontal boundary found at the same row position in consecutive columns
//! becomes a single track. A column whose region spans the boundary row gets
//! no horizontal track at all.
//!
//! ```text
//! [A, C]        vertical:   #1 at column 1, rows 0..2
//! [B, C]        horizontal: #1 at row 1, columns 0..1
//! ```

use serde::Serialize;

use super::matrix::RegionMatrix;
use super::types::Orientation;

/// Half-open range of cells a track covers along the other axis.
///
/// For a vertical track these are rows, for a horizontal track columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TrackSpan {
    /// First covered cell (0-based).
    pub start: usize,
    /// One past the last covered cell.
    pub end: usize,
}

impl TrackSpan {
    /// Number of cells covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns true if the span covers `cell`.
    #[must_use]
    pub const fn contains(&self, cell: usize) -> bool {
        cell >= self.start && cell < self.end
    }
}

/// A resizable boundary between two regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DividerTrack {
    /// 1-based sequence number, counted separately per orientation.
    pub sequence: usize,
    /// Whether the track separates columns or rows.
    pub orientation: Orientation,
    /// 1-based position of the column (or row) immediately before the track.
    ///
    /// Dragging the track transfers size between entries
    /// `structural_index - 1` and `structural_index` of the matching size
    /// array.
    pub structural_index: usize,
    /// Cells covered along the other axis.
    pub span: TrackSpan,
}

/// Logical grid dimensions plus divider placements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GridTemplate {
    /// Number of logical columns.
    pub columns: usize,
    /// Number of logical rows.
    pub rows: usize,
    /// Vertical tracks first, then horizontal, each in discovery order.
    pub dividers: Vec<DividerTrack>,
}

impl GridTemplate {
    /// Synthesizes the template for a region matrix.
    #[must_use]
    pub fn synthesize(matrix: &RegionMatrix) -> Self {
        let mut dividers = vertical_tracks(matrix);
        dividers.extend(horizontal_tracks(matrix));
        Self {
            columns: matrix.column_count(),
            rows: matrix.row_count(),
            dividers,
        }
    }

    /// Returns the tracks of one orientation, in sequence order.
    pub fn tracks(&self, orientation: Orientation) -> impl Iterator<Item = &DividerTrack> {
        self.dividers
            .iter()
            .filter(move |track| track.orientation == orientation)
    }

    /// Counts the tracks of one orientation.
    #[must_use]
    pub fn track_count(&self, orientation: Orientation) -> usize {
        self.tracks(orientation).count()
    }

    /// Looks up a track by orientation and sequence number.
    #[must_use]
    pub fn find_track(&self, orientation: Orientation, sequence: usize) -> Option<&DividerTrack> {
        self.tracks(orientation)
            .find(|track| track.sequence == sequence)
    }
}

/// Scans rows top-to-bottom and columns left-to-right; a boundary not yet
/// claimed by an earlier track starts a new one that extends down through
/// every following row sharing the boundary.
fn vertical_tracks(matrix: &RegionMatrix) -> Vec<DividerTrack> {
    let rows = matrix.row_count();
    let columns = matrix.column_count();
    let differs = |row: usize, column: usize| matrix.get(row, column - 1) != matrix.get(row, column);

    let mut claimed = vec![vec![false; columns]; rows];
    let mut tracks = Vec::new();

    for row in 0..rows {
        for column in 1..columns {
            if claimed[row][column] || !differs(row, column) {
                continue;
            }
            let mut end = row + 1;
            while end < rows && differs(end, column) {
                claimed[end][column] = true;
                end += 1;
            }
            tracks.push(DividerTrack {
                sequence: tracks.len() + 1,
                orientation: Orientation::Vertical,
                structural_index: column,
                span: TrackSpan { start: row, end },
            });
        }
    }

    tracks
}

/// Scans boundary rows top-to-bottom; within each, maximal runs of columns
/// whose regions differ across the boundary become one track each.
fn horizontal_tracks(matrix: &RegionMatrix) -> Vec<DividerTrack> {
    let rows = matrix.row_count();
    let columns = matrix.column_count();
    let differs = |row: usize, column: usize| matrix.get(row - 1, column) != matrix.get(row, column);

    let mut tracks = Vec::new();

    for row in 1..rows {
        let mut column = 0;
        while column < columns {
            if !differs(row, column) {
                column += 1;
                continue;
            }
            let start = column;
            while column < columns && differs(row, column) {
                column += 1;
            }
            tracks.push(DividerTrack {
                sequence: tracks.len() + 1,
                orientation: Orientation::Horizontal,
                structural_index: row,
                span: TrackSpan { start, end: column },
            });
        }
    }

    tracks
}
