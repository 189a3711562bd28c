use broadside::{CellStatus, Orientation, Piece, PieceKind, PlacementError, Position};

#[test]
fn test_cells_extend_right_and_down() -> Result<(), PlacementError> {
    let piece = Piece::new(PieceKind::Cruiser, Position::new(2, 1), Orientation::Horizontal)?;
    let cells: Vec<_> = piece.cells().map(|(p, _)| p).collect();
    assert_eq!(
        cells,
        vec![Position::new(2, 1), Position::new(3, 1), Position::new(4, 1)]
    );

    let piece = Piece::new(PieceKind::Battleship, Position::new(0, 0), Orientation::Vertical)?;
    let cells: Vec<_> = piece.cells().map(|(p, _)| p).collect();
    assert_eq!(
        cells,
        vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(0, 3)
        ]
    );
    assert!(piece.occupies(Position::new(0, 3)));
    assert!(!piece.occupies(Position::new(0, 4)));
    assert_eq!(piece.footprint().len(), 4);
    Ok(())
}

#[test]
fn test_strike_and_sink() -> Result<(), PlacementError> {
    let mut piece = Piece::new(PieceKind::Destroyer, Position::new(1, 1), Orientation::Horizontal)?;
    assert!(!piece.is_sunk());
    assert!(!piece.strike(Position::new(0, 0)));

    assert!(piece.strike(Position::new(1, 1)));
    assert_eq!(piece.status_at(Position::new(1, 1)), Some(CellStatus::Hit));
    assert_eq!(piece.status_at(Position::new(2, 1)), Some(CellStatus::NotHit));
    assert!(!piece.is_sunk());

    assert!(piece.strike(Position::new(2, 1)));
    assert!(piece.is_sunk());
    assert!(piece.cells().all(|(_, s)| s == CellStatus::Sunk));

    // a sunk piece stays sunk
    assert!(piece.strike(Position::new(1, 1)));
    assert_eq!(piece.status_at(Position::new(1, 1)), Some(CellStatus::Sunk));
    Ok(())
}

#[test]
fn test_out_of_grid_piece_rejected() {
    assert_eq!(
        Piece::new(PieceKind::Carrier, Position::new(6, 0), Orientation::Horizontal),
        Err(PlacementError::OutOfBounds)
    );
    assert_eq!(
        Piece::new(PieceKind::Carrier, Position::new(0, -1), Orientation::Vertical),
        Err(PlacementError::OutOfBounds)
    );
}

#[test]
fn test_orientation_codes() {
    assert_eq!("h".parse::<Orientation>(), Ok(Orientation::Horizontal));
    assert_eq!("V".parse::<Orientation>(), Ok(Orientation::Vertical));
    assert_eq!("vertical".parse::<Orientation>(), Ok(Orientation::Vertical));
    assert_eq!(
        "diagonal".parse::<Orientation>(),
        Err(PlacementError::InvalidOrientation)
    );
}
