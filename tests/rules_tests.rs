//! Rule tests - match detection, explosion, gravity, refill and swaps

use candy_crush::core::{
    add_missing_candies, explode, explode_and_score, fall, fill_random, find_all_exploding,
    find_valid_moves, is_valid_action, swap, ActionError, Board, CandyRng, State,
};
use candy_crush::types::{Action, Candy, Coord};

use Candy::*;

/// 9x9 board where no row or column holds three equal candies in a row.
///
/// Row y is the palette shifted by y; any window of three cells in a row or
/// column therefore covers three different kinds.
fn stable_board() -> State {
    let mut state = State::new(9, 9).unwrap();
    for y in 0..9 {
        for x in 0..9 {
            let candy = Candy::ALL[((x + y) % Candy::COUNT as i32) as usize];
            state.set_cell(Coord::new(x, y), Some(candy));
        }
    }
    state
}

fn column_multiset(state: &State, x: usize) -> Vec<u8> {
    let mut v: Vec<u8> = state
        .board()
        .column(x)
        .into_iter()
        .flatten()
        .map(Candy::to_u8)
        .collect();
    v.sort_unstable();
    v
}

#[test]
fn test_stable_fixture_has_no_matches() {
    assert!(!find_all_exploding(&stable_board()).any());
}

#[test]
fn test_concrete_row_scenario() {
    // Row 0 = [Red, Red, Red, Blue, Green, ...] over otherwise non-matching filler.
    let mut state = stable_board();
    state.set_cell(Coord::new(0, 0), Some(Red));
    state.set_cell(Coord::new(1, 0), Some(Red));
    state.set_cell(Coord::new(2, 0), Some(Red));
    state.set_cell(Coord::new(3, 0), Some(Blue));
    state.set_cell(Coord::new(4, 0), Some(Green));
    state.set_score(10);

    let (next, changed, mask) = explode_and_score(&state);

    assert!(changed);
    assert_eq!(
        mask.iter_set().collect::<Vec<_>>(),
        vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
    );
    assert_eq!(next.score(), 13);
    for x in 0..3 {
        assert_eq!(next.get_cell(Coord::new(x, 0)), Some(None));
    }
}

#[test]
fn test_run_of_three_and_four_masks_exactly() {
    for len in [3, 4] {
        let mut state = stable_board();
        for x in 0..len {
            state.set_cell(Coord::new(x, 5), Some(Orange));
        }
        // Guard the run's right end so it cannot extend by accident.
        let guard = if state.get_cell(Coord::new(len, 5)) == Some(Some(Orange)) {
            Purple
        } else {
            state.get_cell(Coord::new(len, 5)).flatten().unwrap()
        };
        state.set_cell(Coord::new(len, 5), Some(guard));

        let mask = find_all_exploding(&state);
        let expected: Vec<Coord> = (0..len).map(|x| Coord::new(x, 5)).collect();
        let got: Vec<Coord> = mask.iter_set().collect();
        assert_eq!(got, expected, "run of {} on\n{}", len, state.board());
    }
}

#[test]
fn test_vertical_run_masks_column() {
    let mut state = State::new(3, 5).unwrap();
    for y in 0..5 {
        state.set_cell(Coord::new(1, y), Some(Green));
    }
    let mask = find_all_exploding(&state);
    assert_eq!(mask.count(), 5);
    assert!((0..5).all(|y| mask.get(Coord::new(1, y))));
}

#[test]
fn test_explode_on_stable_board_is_identity() {
    let state = stable_board();
    let (next, mask) = explode(&state);
    assert!(!mask.any());
    assert_eq!(next.score(), state.score());
    assert_eq!(next, state);
}

#[test]
fn test_explode_scores_one_per_cell() {
    let mut state = stable_board();
    // An L: three across row 8 and three down column 0 sharing (0, 8).
    for x in 0..3 {
        state.set_cell(Coord::new(x, 8), Some(Yellow));
    }
    for y in 6..9 {
        state.set_cell(Coord::new(0, y), Some(Yellow));
    }
    let (next, mask) = explode(&state);
    assert_eq!(next.score(), state.score() + mask.count() as u32);
    assert!(mask.count() >= 5);
    assert_eq!(next.board().empty_count(), mask.count());
}

#[test]
fn test_fall_conserves_columns_and_settles() {
    let mut rng = CandyRng::seeded(31);
    let mut state = fill_random(&State::new(6, 8).unwrap(), &mut rng);
    // Punch holes in a fixed pattern.
    for (x, y) in [(0, 7), (0, 3), (1, 0), (2, 4), (2, 5), (2, 6), (5, 2), (5, 7)] {
        state.set_cell(Coord::new(x, y), None);
    }

    let (next, fallen) = fall(&state);

    for x in 0..6 {
        assert_eq!(column_multiset(&state, x), column_multiset(&next, x));

        // Non-empty cells keep their top-to-bottom order.
        let before: Vec<Candy> = state.board().column(x).into_iter().flatten().collect();
        let after: Vec<Candy> = next.board().column(x).into_iter().flatten().collect();
        assert_eq!(before, after);

        // Empties sit above every candy.
        let col = next.board().column(x);
        let first_candy = col.iter().position(Option::is_some).unwrap_or(col.len());
        assert!(col[first_candy..].iter().all(Option::is_some));
    }

    // Mask flags only destination cells that now hold a candy.
    for c in fallen.iter_set() {
        assert!(next.board().is_occupied(c));
    }
    assert!(fallen.get(Coord::new(0, 7)));
    assert!(!fallen.get(Coord::new(3, 7)));
}

#[test]
fn test_refill_leaves_no_empty_cells() {
    let mut state = stable_board();
    for x in 0..9 {
        state.set_cell(Coord::new(x, 0), None);
    }
    let (next, filled) = add_missing_candies(&state, &mut CandyRng::seeded(4));
    assert_eq!(next.board().empty_count(), 0);
    assert_eq!(filled.count(), 9);
    assert!((0..9).all(|x| filled.get(Coord::new(x, 0))));
}

#[test]
fn test_swap_roundtrip_restores_grid() {
    let state = stable_board();
    for action in find_valid_moves(&state).into_iter().take(40) {
        let swapped = swap(&state, action).unwrap();
        let back = swap(&swapped, action.reversed()).unwrap();
        assert_eq!(back.board(), state.board());
    }
}

#[test]
fn test_invalid_swaps_are_rejected() {
    let mut state = stable_board();
    state.set_cell(Coord::new(4, 4), None);
    let c = Coord::new;

    let cases = [
        (Action::new(c(3, 3), c(3, 3)), "same_cell"),
        (Action::new(c(0, 0), c(2, 0)), "not_adjacent"),
        (Action::new(c(0, 0), c(1, 1)), "not_adjacent"),
        (Action::new(c(8, 8), c(9, 8)), "out_of_bounds"),
        (Action::new(c(0, -1), c(0, 0)), "out_of_bounds"),
        (Action::new(c(4, 4), c(4, 5)), "empty_cell"),
        (Action::new(c(3, 4), c(4, 4)), "empty_cell"),
    ];
    for (action, code) in cases {
        let err = is_valid_action(&state, action).unwrap_err();
        assert_eq!(err.code(), code, "{}", action);
        assert_eq!(swap(&state, action), Err(err));
    }
}

#[test]
fn test_same_cell_swap_always_invalid() {
    let state = stable_board();
    for y in 0..9 {
        for x in 0..9 {
            let at = Coord::new(x, y);
            assert_eq!(
                is_valid_action(&state, Action::new(at, at)),
                Err(ActionError::SameCell(at))
            );
        }
    }
}

#[test]
fn test_valid_moves_are_raw_adjacency() {
    let board = Board::new(9, 9).unwrap();
    let state = State::from_board(board, 0);
    let moves = find_valid_moves(&state);
    // 9 rows * 8 pairs + 9 columns * 8 pairs, each listed from both ends.
    assert_eq!(moves.len(), 2 * (9 * 8 + 9 * 8));
    // Empty cells are still enumerated.
    assert!(moves.iter().all(|&a| is_valid_action(&state, a).is_err()));
}
