//! Board tests - grid storage and state primitives

use candy_crush::core::{Board, BoardError, State};
use candy_crush::types::{Candy, Coord, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT).unwrap();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    // All cells should be empty
    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(
                board.get(Coord::new(x, y)),
                Some(None),
                "Cell ({}, {}) should be empty",
                x,
                y
            );
        }
    }
}

#[test]
fn test_board_zero_dimensions() {
    assert!(matches!(
        Board::new(0, 0),
        Err(BoardError::InvalidDimensions { .. })
    ));
    assert!(State::new(3, 0).is_err());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT).unwrap();

    // Negative coordinates
    assert_eq!(board.get(Coord::new(-1, 0)), None);
    assert_eq!(board.get(Coord::new(0, -1)), None);

    // Beyond bounds
    assert_eq!(board.get(Coord::new(BOARD_WIDTH as i32, 0)), None);
    assert_eq!(board.get(Coord::new(0, BOARD_HEIGHT as i32)), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT).unwrap();

    assert!(board.set(Coord::new(5, 7), Some(Candy::Purple)));
    assert_eq!(board.get(Coord::new(5, 7)), Some(Some(Candy::Purple)));
    assert!(board.is_occupied(Coord::new(5, 7)));

    // Clear a cell
    assert!(board.set(Coord::new(5, 7), None));
    assert_eq!(board.get(Coord::new(5, 7)), Some(None));
    assert!(!board.is_occupied(Coord::new(5, 7)));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new(4, 4).unwrap();

    assert!(!board.set(Coord::new(-1, 0), Some(Candy::Red)));
    assert!(!board.set(Coord::new(0, 4), Some(Candy::Red)));
    assert_eq!(board.empty_count(), 16);
}

#[test]
fn test_rows_are_row_major() {
    let mut board = Board::new(3, 2).unwrap();
    board.set(Coord::new(2, 0), Some(Candy::Green));
    board.set(Coord::new(0, 1), Some(Candy::Blue));

    let rows: Vec<&[Option<Candy>]> = board.rows().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], &[None, None, Some(Candy::Green)]);
    assert_eq!(rows[1], &[Some(Candy::Blue), None, None]);
    assert_eq!(board.column(0), vec![None, Some(Candy::Blue)]);
}

#[test]
fn test_state_clone_independent() {
    let mut original = State::new(5, 5).unwrap();
    original.set_cell(Coord::new(2, 2), Some(Candy::Yellow));
    original.set_score(9);

    let mut copy = original.clone();
    copy.set_cell(Coord::new(2, 2), None);
    copy.set_score(0);

    assert_eq!(original.get_cell(Coord::new(2, 2)), Some(Some(Candy::Yellow)));
    assert_eq!(original.score(), 9);
}

#[test]
fn test_state_snapshot_serializes() {
    let mut state = State::new(2, 1).unwrap();
    state.set_cell(Coord::new(1, 0), Some(Candy::Blue));

    let json = serde_json::to_string(&state.snapshot()).unwrap();
    assert_eq!(json, r#"{"width":2,"height":1,"score":0,"cells":[[0,4]]}"#);
}
