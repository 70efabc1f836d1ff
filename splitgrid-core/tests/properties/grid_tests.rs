//! Property-based tests for region matrices and divider synthesis
//!
//! Covers the structural side of a split: which cells every tab occupies,
//! which divider tracks the boundaries collapse into, and the initial sizes.

use proptest::prelude::*;
use splitgrid_core::split::{
    FULL_PERCENT, GridTemplate, LayoutKind, Orientation, RegionMatrix, SizeModel, TabId,
};

const EPS: f64 = 1e-9;

// ============================================================================
// Test Strategies
// ============================================================================

/// Strategy for generating layout kinds
fn layout_kind_strategy() -> impl Strategy<Value = LayoutKind> {
    prop_oneof![
        Just(LayoutKind::Grid),
        Just(LayoutKind::Vsep),
        Just(LayoutKind::Hsep),
    ]
}

/// Strategy for generating distinct tab lists of length `2..=max`
fn tabs_strategy(max: usize) -> impl Strategy<Value = Vec<TabId>> {
    proptest::collection::hash_set(any::<u128>(), 2..=max).prop_map(|seeds| {
        seeds
            .into_iter()
            .map(|seed| TabId::from_uuid(uuid::Uuid::from_u128(seed)))
            .collect()
    })
}

fn synthesize(tabs: &[TabId], kind: LayoutKind) -> (RegionMatrix, GridTemplate, SizeModel) {
    let matrix = RegionMatrix::build(tabs, kind).expect("two or more tabs");
    let template = GridTemplate::synthesize(&matrix);
    let sizes = SizeModel::uniform(template.columns, template.rows);
    (matrix, template, sizes)
}

fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

// ============================================================================
// Separator layouts
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A vertical separator layout of N tabs has N - 1 vertical tracks,
    /// no horizontal track and N column widths summing to 100.
    #[test]
    fn prop_vsep_has_one_vertical_track_per_boundary(tabs in tabs_strategy(12)) {
        let n = tabs.len();
        let (matrix, template, sizes) = synthesize(&tabs, LayoutKind::Vsep);

        prop_assert_eq!(matrix.row_count(), 1);
        prop_assert_eq!(template.columns, n);
        prop_assert_eq!(template.track_count(Orientation::Vertical), n - 1);
        prop_assert_eq!(template.track_count(Orientation::Horizontal), 0);
        prop_assert_eq!(sizes.column_widths().len(), n);
        prop_assert!((sum(sizes.column_widths()) - FULL_PERCENT).abs() < EPS);
    }

    /// The horizontal separator layout mirrors the vertical one.
    #[test]
    fn prop_hsep_has_one_horizontal_track_per_boundary(tabs in tabs_strategy(12)) {
        let n = tabs.len();
        let (matrix, template, sizes) = synthesize(&tabs, LayoutKind::Hsep);

        prop_assert_eq!(matrix.column_count(), 1);
        prop_assert_eq!(template.rows, n);
        prop_assert_eq!(template.track_count(Orientation::Horizontal), n - 1);
        prop_assert_eq!(template.track_count(Orientation::Vertical), 0);
        prop_assert!((sum(sizes.row_heights()) - FULL_PERCENT).abs() < EPS);
    }

    /// Tracks of a separator layout map one-to-one onto structural indices.
    #[test]
    fn prop_separator_tracks_are_sequential(
        tabs in tabs_strategy(10),
        kind in prop_oneof![Just(LayoutKind::Vsep), Just(LayoutKind::Hsep)],
    ) {
        let (_, template, _) = synthesize(&tabs, kind);
        for (position, track) in template.dividers.iter().enumerate() {
            prop_assert_eq!(track.sequence, position + 1);
            prop_assert_eq!(track.structural_index, position + 1);
            prop_assert_eq!(track.span.start, 0);
            prop_assert_eq!(track.span.end, 1);
        }
    }
}

// ============================================================================
// Grid layout
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every tab occupies exactly one region, and the regions tile the
    /// matrix without overlap.
    #[test]
    fn prop_regions_tile_matrix(tabs in tabs_strategy(12), kind in layout_kind_strategy()) {
        let (matrix, _, _) = synthesize(&tabs, kind);
        let placements = matrix.placements();
        prop_assert_eq!(placements.len(), tabs.len());

        let covered: usize = placements
            .iter()
            .map(|p| p.row_span * p.column_span)
            .sum();
        prop_assert_eq!(covered, matrix.row_count() * matrix.column_count());

        for tab in &tabs {
            prop_assert_eq!(placements.iter().filter(|p| p.tab == *tab).count(), 1);
        }
    }

    /// A grid never has more than two rows and packs two tabs per column.
    #[test]
    fn prop_grid_shape(tabs in tabs_strategy(12)) {
        let n = tabs.len();
        let (matrix, template, sizes) = synthesize(&tabs, LayoutKind::Grid);

        let expected_rows = if n == 2 { 1 } else { 2 };
        prop_assert_eq!(matrix.row_count(), expected_rows);
        let expected_columns = if n == 2 { 2 } else { n.div_ceil(2) };
        prop_assert_eq!(matrix.column_count(), expected_columns);
        prop_assert_eq!(sizes.column_widths().len(), template.columns);
        prop_assert_eq!(sizes.row_heights().len(), template.rows);
        prop_assert!((sum(sizes.column_widths()) - FULL_PERCENT).abs() < EPS);
        prop_assert!((sum(sizes.row_heights()) - FULL_PERCENT).abs() < EPS);
    }

    /// Structural indices always point between two existing entries.
    #[test]
    fn prop_track_indices_are_in_range(tabs in tabs_strategy(12), kind in layout_kind_strategy()) {
        let (_, template, _) = synthesize(&tabs, kind);
        for track in &template.dividers {
            let len = match track.orientation {
                Orientation::Vertical => template.columns,
                Orientation::Horizontal => template.rows,
            };
            prop_assert!(track.structural_index >= 1);
            prop_assert!(track.structural_index < len);
            prop_assert!(!track.span.is_empty());
        }
    }

    /// Sequence numbers restart at 1 for each orientation.
    #[test]
    fn prop_sequences_are_dense_per_orientation(
        tabs in tabs_strategy(12),
        kind in layout_kind_strategy(),
    ) {
        let (_, template, _) = synthesize(&tabs, kind);
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            let sequences: Vec<usize> = template.tracks(orientation).map(|t| t.sequence).collect();
            let expected: Vec<usize> = (1..=sequences.len()).collect();
            prop_assert_eq!(sequences, expected);
        }
    }

    /// A two-tab grid is indistinguishable from a two-tab vertical split.
    #[test]
    fn prop_two_tab_grid_equals_vsep(tabs in tabs_strategy(2)) {
        let grid = synthesize(&tabs, LayoutKind::Grid);
        let vsep = synthesize(&tabs, LayoutKind::Vsep);
        prop_assert_eq!(grid, vsep);
    }
}

// ============================================================================
// Worked example
// ============================================================================

#[test]
fn three_tab_grid_spans_last_column() {
    let tabs: Vec<TabId> = (0..3).map(|_| TabId::new()).collect();
    let (a, b, c) = (tabs[0], tabs[1], tabs[2]);
    let (matrix, template, sizes) = synthesize(&tabs, LayoutKind::Grid);

    assert_eq!(matrix.rows(), &[vec![a, c], vec![b, c]]);

    let vertical: Vec<_> = template.tracks(Orientation::Vertical).collect();
    assert_eq!(vertical.len(), 1);
    assert_eq!(vertical[0].structural_index, 1);
    assert_eq!((vertical[0].span.start, vertical[0].span.end), (0, 2));

    let horizontal: Vec<_> = template.tracks(Orientation::Horizontal).collect();
    assert_eq!(horizontal.len(), 1);
    assert_eq!(horizontal[0].structural_index, 1);
    assert_eq!((horizontal[0].span.start, horizontal[0].span.end), (0, 1));

    assert_eq!(sizes.column_widths(), &[50.0, 50.0]);
    assert_eq!(sizes.row_heights(), &[50.0, 50.0]);
}
