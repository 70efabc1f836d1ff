//! Property-based tests for size transfer and drag sessions

use proptest::prelude::*;
use splitgrid_core::split::{
    DividerTrack, FULL_PERCENT, GroupId, Orientation, PointerPosition, ResizeController,
    SizeModel, SurfaceExtent, TrackSpan,
};

const EPS: f64 = 1e-6;

// ============================================================================
// Test Strategies
// ============================================================================

/// One transfer request: which boundary and how far.
#[derive(Debug, Clone)]
struct Transfer {
    boundary: usize,
    delta: f64,
}

fn transfer_strategy() -> impl Strategy<Value = Transfer> {
    (0usize..16, -150.0f64..150.0).prop_map(|(boundary, delta)| Transfer { boundary, delta })
}

fn transfers_strategy(max: usize) -> impl Strategy<Value = Vec<Transfer>> {
    proptest::collection::vec(transfer_strategy(), 1..=max)
}

fn pointer_path_strategy(max: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-400.0f64..1400.0, 1..=max)
}

fn vertical_track(structural_index: usize) -> DividerTrack {
    DividerTrack {
        sequence: structural_index,
        orientation: Orientation::Vertical,
        structural_index,
        span: TrackSpan { start: 0, end: 1 },
    }
}

fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

// ============================================================================
// Size transfer
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A transfer adds the applied delta on one side of the boundary and
    /// removes it on the other; the total stays at 100.
    #[test]
    fn prop_transfer_preserves_total(
        columns in 2usize..=8,
        transfers in transfers_strategy(20),
    ) {
        let mut sizes = SizeModel::uniform(columns, 1);
        for transfer in &transfers {
            let index = 1 + transfer.boundary % (columns - 1);
            let before = sizes.column_widths().to_vec();

            let applied = sizes
                .transfer(Orientation::Vertical, index, transfer.delta, 10.0)
                .expect("index in range");

            let after = sizes.column_widths();
            prop_assert!((after[index - 1] - (before[index - 1] + applied)).abs() < EPS);
            prop_assert!((after[index] - (before[index] - applied)).abs() < EPS);
            for untouched in (0..columns).filter(|i| *i != index && *i != index - 1) {
                prop_assert_eq!(after[untouched], before[untouched]);
            }
            prop_assert!((sum(after) - FULL_PERCENT).abs() < EPS);
        }
    }

    /// The applied delta never exceeds the request in magnitude and shares
    /// its sign.
    #[test]
    fn prop_applied_delta_is_bounded_by_request(
        columns in 2usize..=8,
        transfers in transfers_strategy(20),
    ) {
        let mut sizes = SizeModel::uniform(columns, 1);
        for transfer in &transfers {
            let index = 1 + transfer.boundary % (columns - 1);
            let applied = sizes
                .transfer(Orientation::Vertical, index, transfer.delta, 10.0)
                .expect("index in range");
            prop_assert!(applied.abs() <= transfer.delta.abs() + EPS);
            prop_assert!(applied == 0.0 || applied.signum() == transfer.delta.signum());
        }
    }

    /// With a minimum of 10, no entry ever drops below 10.
    #[test]
    fn prop_minimum_is_never_violated(
        rows in 2usize..=8,
        minimum in 0.0f64..12.5,
        transfers in transfers_strategy(30),
    ) {
        let mut sizes = SizeModel::uniform(1, rows);
        for transfer in &transfers {
            let index = 1 + transfer.boundary % (rows - 1);
            sizes
                .transfer(Orientation::Horizontal, index, transfer.delta, minimum)
                .expect("index in range");
            for height in sizes.row_heights() {
                prop_assert!(*height >= minimum - EPS, "{} below {}", height, minimum);
            }
        }
    }

    /// Indices outside `1..len` are rejected without touching the sizes.
    #[test]
    fn prop_out_of_range_index_is_rejected(columns in 1usize..=6, extra in 0usize..4) {
        let mut sizes = SizeModel::uniform(columns, 1);
        let original = sizes.clone();
        prop_assert!(sizes.transfer(Orientation::Vertical, 0, 5.0, 10.0).is_err());
        prop_assert!(sizes.transfer(Orientation::Vertical, columns + extra, 5.0, 10.0).is_err());
        prop_assert_eq!(sizes, original);
    }
}

// ============================================================================
// Drag sessions
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any pointer path keeps both adjacent columns at or above the minimum
    /// and the total at 100.
    #[test]
    fn prop_drag_respects_minimum(path in pointer_path_strategy(25)) {
        let mut controller = ResizeController::new(10.0);
        let mut sizes = SizeModel::uniform(3, 1);
        controller
            .begin_drag(
                GroupId::new(),
                vertical_track(1),
                PointerPosition::new(333.0, 0.0),
                SurfaceExtent::new(1000.0, 800.0),
            )
            .expect("no session open");

        for x in &path {
            controller
                .on_pointer_move(PointerPosition::new(*x, 0.0), &mut sizes)
                .expect("session open");
            for width in sizes.column_widths() {
                prop_assert!(*width >= 10.0 - EPS);
            }
            prop_assert!((sum(sizes.column_widths()) - FULL_PERCENT).abs() < EPS);
        }
    }

    /// Coalescing a burst of moves into one frame lands on the same sizes
    /// as applying only the last move of the burst.
    #[test]
    fn prop_coalesced_burst_applies_latest(path in pointer_path_strategy(10)) {
        let extent = SurfaceExtent::new(1000.0, 800.0);
        let start = PointerPosition::new(500.0, 0.0);
        let last = PointerPosition::new(*path.last().expect("non-empty path"), 0.0);

        let mut coalesced = ResizeController::default();
        let mut coalesced_sizes = SizeModel::uniform(2, 1);
        coalesced
            .begin_drag(GroupId::new(), vertical_track(1), start, extent)
            .expect("no session open");
        for x in &path {
            coalesced
                .queue_pointer_move(PointerPosition::new(*x, 0.0))
                .expect("session open");
        }
        coalesced.on_frame(&mut coalesced_sizes).expect("session open");

        let mut direct = ResizeController::default();
        let mut direct_sizes = SizeModel::uniform(2, 1);
        direct
            .begin_drag(GroupId::new(), vertical_track(1), start, extent)
            .expect("no session open");
        direct.on_pointer_move(last, &mut direct_sizes).expect("session open");

        prop_assert_eq!(coalesced_sizes, direct_sizes);
        prop_assert!(!coalesced.has_pending_move());
    }

    /// Vertical pointer motion never moves a vertical track.
    #[test]
    fn prop_orthogonal_motion_is_ignored(ys in proptest::collection::vec(-500.0f64..500.0, 1..10)) {
        let mut controller = ResizeController::default();
        let mut sizes = SizeModel::uniform(2, 1);
        controller
            .begin_drag(
                GroupId::new(),
                vertical_track(1),
                PointerPosition::new(500.0, 0.0),
                SurfaceExtent::new(1000.0, 800.0),
            )
            .expect("no session open");
        for y in &ys {
            controller
                .on_pointer_move(PointerPosition::new(500.0, *y), &mut sizes)
                .expect("session open");
        }
        prop_assert_eq!(sizes, SizeModel::uniform(2, 1));
    }
}
