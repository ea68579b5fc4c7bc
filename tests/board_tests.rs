use sea_battle::{
    Board, BoardError, CellState, Coordinate, Orientation, ShotOutcome, Style, Vessel, BOARD_SIZE,
};

fn flagship_board() -> Board {
    let mut board = Board::new(BOARD_SIZE);
    board
        .place(Vessel::new(Coordinate::new(0, 0), 3, Orientation::Horizontal))
        .unwrap();
    board
}

#[test]
fn test_place_marks_ship_cells() {
    let board = flagship_board();
    assert_eq!(board.vessels().len(), 1);
    for x in 0..3 {
        assert_eq!(board.cell(Coordinate::new(x, 0)), Some(CellState::Ship));
    }
    assert_eq!(board.cell(Coordinate::new(3, 0)), Some(CellState::Empty));
    assert_eq!(board.cell(Coordinate::new(6, 0)), None);
}

#[test]
fn test_place_rejects_collision() {
    let mut board = flagship_board();
    let err = board
        .place(Vessel::new(Coordinate::new(1, 0), 1, Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, BoardError::InvalidPlacement(Coordinate::new(1, 0)));
    assert_eq!(board.vessels().len(), 1);
}

#[test]
fn test_place_rejects_buffer_cells() {
    let mut board = flagship_board();
    // (1,1) is only adjacent to the flagship, not on it
    assert_eq!(
        board
            .place(Vessel::new(Coordinate::new(1, 1), 1, Orientation::Horizontal))
            .unwrap_err(),
        BoardError::InvalidPlacement(Coordinate::new(1, 1))
    );
    // diagonal neighbour of the flagship's stern
    assert!(board
        .place(Vessel::new(Coordinate::new(3, 1), 1, Orientation::Horizontal))
        .is_err());
    // one cell of clearance is enough
    board
        .place(Vessel::new(Coordinate::new(4, 0), 2, Orientation::Vertical))
        .unwrap();
    board
        .place(Vessel::new(Coordinate::new(0, 2), 2, Orientation::Horizontal))
        .unwrap();
    assert_eq!(board.vessels().len(), 3);
}

#[test]
fn test_place_rejects_out_of_bounds_without_side_effects() {
    let mut board = Board::new(BOARD_SIZE);
    let err = board
        .place(Vessel::new(Coordinate::new(4, 0), 3, Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, BoardError::InvalidPlacement(Coordinate::new(6, 0)));
    assert!(board.vessels().is_empty());
    assert_eq!(board.cell(Coordinate::new(4, 0)), Some(CellState::Empty));
    assert!(!board.is_reserved(Coordinate::new(4, 0)));

    assert!(board
        .place(Vessel::new(Coordinate::new(-1, 2), 1, Orientation::Vertical))
        .is_err());
}

#[test]
fn test_place_rejects_empty_vessel_and_sealed_board() {
    let mut board = Board::new(BOARD_SIZE);
    assert!(board
        .place(Vessel::new(Coordinate::new(2, 2), 0, Orientation::Vertical))
        .is_err());

    board.seal();
    assert!(board.is_sealed());
    assert_eq!(
        board
            .place(Vessel::new(Coordinate::new(2, 2), 1, Orientation::Vertical))
            .unwrap_err(),
        BoardError::InvalidPlacement(Coordinate::new(2, 2))
    );
}

#[test]
fn test_place_rejects_vessel_longer_than_board() {
    let mut board = Board::new(BOARD_SIZE);
    let origin = Coordinate::new(0, 0);

    // would wrap to zero cells if the length were truncated
    let huge = Vessel::new(origin, 1usize << 32, Orientation::Horizontal);
    assert_eq!(
        board.place(huge).unwrap_err(),
        BoardError::InvalidPlacement(origin)
    );
    assert_eq!(
        board
            .place(Vessel::new(origin, usize::MAX, Orientation::Vertical))
            .unwrap_err(),
        BoardError::InvalidPlacement(origin)
    );
    assert!(board
        .place(Vessel::new(origin, 7, Orientation::Horizontal))
        .is_err());
    assert!(board.vessels().is_empty());
    assert!(!board.is_reserved(origin));

    // a full-width vessel still fits
    board
        .place(Vessel::new(origin, 6, Orientation::Vertical))
        .unwrap();
    assert_eq!(board.cell(Coordinate::new(0, 5)), Some(CellState::Ship));
}

#[test]
fn test_hit_hit_sink() {
    let mut board = flagship_board();

    assert_eq!(
        board.resolve_shot(Coordinate::new(0, 0)).unwrap(),
        ShotOutcome::Hit { vessel: 0 }
    );
    assert_eq!(board.vessels()[0].remaining_hits(), 2);
    assert_eq!(board.sunk_count(), 0);

    assert_eq!(
        board.resolve_shot(Coordinate::new(1, 0)).unwrap(),
        ShotOutcome::Hit { vessel: 0 }
    );
    assert_eq!(board.sunk_count(), 0);

    assert_eq!(
        board.resolve_shot(Coordinate::new(2, 0)).unwrap(),
        ShotOutcome::Sunk { vessel: 0 }
    );
    assert_eq!(board.sunk_count(), 1);
    assert!(board.vessels()[0].is_sunk());
    assert!(board.all_sunk());
    assert_eq!(board.cell(Coordinate::new(2, 0)), Some(CellState::Hit));
}

#[test]
fn test_shot_off_board() {
    let mut board = flagship_board();
    assert_eq!(
        board.resolve_shot(Coordinate::new(6, 0)).unwrap_err(),
        BoardError::OutOfBounds(Coordinate::new(6, 0))
    );
    assert_eq!(
        board.resolve_shot(Coordinate::new(0, -1)).unwrap_err(),
        BoardError::OutOfBounds(Coordinate::new(0, -1))
    );
    assert_eq!(board.untargeted_count(), 36);
}

#[test]
fn test_repeated_shot_is_rejected_without_change() {
    let mut board = flagship_board();
    let target = Coordinate::new(3, 3);
    assert_eq!(board.resolve_shot(target).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.cell(target), Some(CellState::Miss));

    for _ in 0..2 {
        assert_eq!(
            board.resolve_shot(target).unwrap_err(),
            BoardError::AlreadyTargeted(target)
        );
        assert_eq!(board.cell(target), Some(CellState::Miss));
        assert_eq!(board.untargeted_count(), 35);
    }

    board.resolve_shot(Coordinate::new(0, 0)).unwrap();
    assert!(board.resolve_shot(Coordinate::new(0, 0)).is_err());
    assert_eq!(board.vessels()[0].remaining_hits(), 2);
}

#[test]
fn test_buffer_cells_are_not_pre_fired() {
    let mut board = flagship_board();
    let buffer = Coordinate::new(1, 1);
    assert!(board.is_reserved(buffer));
    assert!(!board.is_targeted(buffer));
    assert_eq!(board.resolve_shot(buffer).unwrap(), ShotOutcome::Miss);
}

#[test]
fn test_sinking_marks_contour_but_keeps_it_targetable() {
    let mut board = flagship_board();
    for x in 0..3 {
        board.resolve_shot(Coordinate::new(x, 0)).unwrap();
    }

    for c in [Coordinate::new(3, 0), Coordinate::new(0, 1), Coordinate::new(3, 1)] {
        assert_eq!(board.cell(c), Some(CellState::Contour));
        assert!(!board.is_targeted(c));
    }
    // outside the contour
    assert_eq!(board.cell(Coordinate::new(4, 0)), Some(CellState::Empty));
    assert_eq!(board.cell(Coordinate::new(0, 2)), Some(CellState::Empty));

    assert_eq!(
        board.resolve_shot(Coordinate::new(0, 1)).unwrap(),
        ShotOutcome::Miss
    );
    assert_eq!(board.cell(Coordinate::new(0, 1)), Some(CellState::Miss));
    assert_eq!(board.sunk_count(), 1);
}

#[test]
fn test_concealed_board_shows_contour_after_sinking() {
    let mut board = flagship_board();
    board
        .place(Vessel::new(Coordinate::new(5, 4), 2, Orientation::Vertical))
        .unwrap();
    board.set_concealed(true);
    assert!(board.is_concealed());
    for x in 0..3 {
        board.resolve_shot(Coordinate::new(x, 0)).unwrap();
    }

    let shown = board.to_string();
    let rows: Vec<&str> = shown.lines().collect();
    assert_eq!(rows[1], "1 | X | X | X | o |   |   |");
    assert_eq!(rows[2], "2 | o | o | o | o |   |   |");
    assert_eq!(rows[3], "3 |   |   |   |   |   |   |");
    // the unsunk vessel stays hidden
    assert_eq!(rows[6], "6 |   |   |   |   |   |   |");
    assert!(!shown.contains('■'));

    board.set_concealed(false);
    assert!(!board.is_concealed());
    assert_eq!(board.to_string().lines().nth(6), Some("6 |   |   |   |   |   | ■ |"));
}

#[test]
fn test_render_plain_and_concealed() {
    let mut board = flagship_board();
    let shown = board.to_string();
    let mut lines = shown.lines();
    assert_eq!(lines.next(), Some("  | a | b | c | d | e | f |"));
    assert_eq!(lines.next(), Some("1 | ■ | ■ | ■ |   |   |   |"));
    assert_eq!(shown.lines().count(), 7);
    assert_eq!(shown.lines().last(), Some("6 |   |   |   |   |   |   |"));

    board.resolve_shot(Coordinate::new(0, 0)).unwrap();
    board.resolve_shot(Coordinate::new(5, 5)).unwrap();
    board.set_concealed(true);
    let hidden = board.to_string();
    assert!(!hidden.contains('■'));
    assert_eq!(hidden.lines().nth(1), Some("1 | X |   |   |   |   |   |"));
    assert_eq!(hidden.lines().nth(6), Some("6 |   |   |   |   |   | o |"));
}

#[test]
fn test_render_ansi() {
    let board = flagship_board();
    let coloured = board.display(Style::Ansi).to_string();
    assert!(coloured.contains("\x1b[33m■\x1b[0m"));

    let mut hidden = flagship_board();
    hidden.set_concealed(true);
    assert!(!hidden.display(Style::Ansi).to_string().contains("\x1b[33m"));
}
