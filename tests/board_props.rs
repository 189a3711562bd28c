use broadside::{
    Board, CellStatus, Orientation, PieceKind, PlacementError, Position, ShotOutcome,
    TargetingEngine, CATALOG, GRID_HEIGHT, GRID_WIDTH, TOTAL_PIECE_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut board = Board::new();
    TargetingEngine::new(SmallRng::seed_from_u64(seed))
        .place_pieces(&mut board)
        .unwrap();
    board
}

fn any_kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(CATALOG.to_vec())
}

fn any_orientation() -> impl Strategy<Value = Orientation> {
    prop::sample::select(Orientation::BOTH.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_fills_catalog(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert_eq!(board.pieces().len(), CATALOG.len());
        prop_assert_eq!(board.occupied().len(), TOTAL_PIECE_CELLS);
        prop_assert_eq!(board.full_cell_view().len(), TOTAL_PIECE_CELLS);
    }

    #[test]
    fn each_type_places_once(
        kind in any_kind(),
        orientation in any_orientation(),
        x in 0..GRID_WIDTH as i32,
        y in 0..GRID_HEIGHT as i32,
    ) {
        let mut board = Board::new();
        let origin = Position::new(x, y);
        match board.add_piece(origin, kind, orientation) {
            Ok(()) => {
                prop_assert_eq!(
                    board.add_piece(origin, kind, orientation),
                    Err(PlacementError::DuplicateType)
                );
                prop_assert_eq!(board.pieces().len(), 1);
            }
            Err(e) => {
                prop_assert_eq!(e, PlacementError::OutOfBounds);
                prop_assert!(board.pieces().is_empty());
            }
        }
    }

    #[test]
    fn sinking_needs_every_cell(seed in any::<u64>(), index in 0..CATALOG.len(), skip in 0..5usize) {
        let mut board = random_board(seed);
        let cells: Vec<Position> = board.pieces()[index].cells().map(|(p, _)| p).collect();
        let skip = skip % cells.len();

        for (i, &cell) in cells.iter().enumerate() {
            if i != skip {
                prop_assert_eq!(board.fire(cell), ShotOutcome::Hit);
            }
        }
        prop_assert!(!board.pieces()[index].is_sunk());

        prop_assert_eq!(board.fire(cells[skip]), ShotOutcome::Hit);
        prop_assert!(board.pieces()[index].is_sunk());
        let view = board.full_cell_view();
        for cell in &cells {
            prop_assert_eq!(view.get(cell), Some(&CellStatus::Sunk));
        }
    }

    #[test]
    fn out_of_bounds_never_mutates(seed in any::<u64>(), x in -20i32..30, y in -20i32..30) {
        let target = Position::new(x, y);
        prop_assume!(!target.in_bounds());
        let mut board = random_board(seed);
        let full = board.full_cell_view();
        let public = board.public_cell_view();
        prop_assert_eq!(board.fire(target), ShotOutcome::OutOfBounds);
        prop_assert_eq!(board.full_cell_view(), full);
        prop_assert_eq!(board.public_cell_view(), public);
        prop_assert!(board.misses().is_empty());
    }

    #[test]
    fn defeated_iff_all_sunk(seed in any::<u64>(), shots in 0..150usize) {
        let mut board = random_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        for _ in 0..shots {
            let target = Position::new(
                rng.random_range(0..GRID_WIDTH as i32),
                rng.random_range(0..GRID_HEIGHT as i32),
            );
            board.fire(target);
        }
        let all_sunk = board.pieces().iter().all(|p| p.is_sunk());
        prop_assert_eq!(board.is_defeated(), all_sunk);
    }
}
