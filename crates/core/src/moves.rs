//! Moves - swap validation, application and neighbour enumeration

use arrayvec::ArrayVec;

use crate::error::ActionError;
use crate::state::State;
use crate::types::{Action, Coord, Direction};

/// Check a proposed swap against the board.
///
/// Rules are checked in order: both ends on the board, distinct cells,
/// orthogonally adjacent, neither end empty. The first violation is reported.
pub fn is_valid_action(state: &State, action: Action) -> Result<(), ActionError> {
    let Action { from, to } = action;
    let board = state.board();

    if !board.contains(from) {
        return Err(ActionError::FromOutOfBounds(from));
    }
    if !board.contains(to) {
        return Err(ActionError::ToOutOfBounds(to));
    }
    if from == to {
        return Err(ActionError::SameCell(from));
    }
    if !from.is_adjacent(to) {
        return Err(ActionError::NotAdjacent { from, to });
    }
    if !board.is_occupied(from) {
        return Err(ActionError::EmptyFrom(from));
    }
    if !board.is_occupied(to) {
        return Err(ActionError::EmptyTo(to));
    }
    Ok(())
}

/// Apply a swap to a copy of `state`.
///
/// Does not resolve anything; matches created by the swap stay on the board.
pub fn swap(state: &State, action: Action) -> Result<State, ActionError> {
    is_valid_action(state, action)?;
    let mut next = state.clone();
    next.swap_cells(action.from, action.to);
    Ok(next)
}

/// In-bounds swaps from one cell, at most one per direction
pub fn neighbor_moves(state: &State, from: Coord) -> ArrayVec<Action, 4> {
    let board = state.board();
    Direction::ALL
        .iter()
        .map(|&dir| Action::towards(from, dir))
        .filter(|a| board.contains(a.to))
        .collect()
}

/// Every in-bounds adjacent swap on the board.
///
/// This is raw adjacency: it does not check for empty cells or whether the
/// swap would produce a match. Each unordered pair appears twice, once from
/// each end.
pub fn find_valid_moves(state: &State) -> Vec<Action> {
    let (width, height) = (state.width(), state.height());
    let mut moves = Vec::with_capacity(width * height * 4);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            moves.extend(neighbor_moves(state, Coord::new(x, y)));
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Candy;

    fn filled(width: usize, height: usize) -> State {
        let mut state = State::new(width, height).unwrap();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let candy = Candy::ALL[((x + 2 * y) % Candy::COUNT as i32) as usize];
                state.set_cell(Coord::new(x, y), Some(candy));
            }
        }
        state
    }

    #[test]
    fn test_rejects_each_rule() {
        let mut state = filled(4, 4);
        state.set_cell(Coord::new(3, 3), None);
        let c = Coord::new;

        assert_eq!(
            is_valid_action(&state, Action::new(c(-1, 0), c(0, 0))),
            Err(ActionError::FromOutOfBounds(c(-1, 0)))
        );
        assert_eq!(
            is_valid_action(&state, Action::new(c(0, 3), c(0, 4))),
            Err(ActionError::ToOutOfBounds(c(0, 4)))
        );
        assert_eq!(
            is_valid_action(&state, Action::new(c(1, 1), c(1, 1))),
            Err(ActionError::SameCell(c(1, 1)))
        );
        assert_eq!(
            is_valid_action(&state, Action::new(c(1, 1), c(2, 2))),
            Err(ActionError::NotAdjacent {
                from: c(1, 1),
                to: c(2, 2)
            })
        );
        assert_eq!(
            is_valid_action(&state, Action::new(c(0, 0), c(2, 0))),
            Err(ActionError::NotAdjacent {
                from: c(0, 0),
                to: c(2, 0)
            })
        );
        assert_eq!(
            is_valid_action(&state, Action::new(c(3, 3), c(3, 2))),
            Err(ActionError::EmptyFrom(c(3, 3)))
        );
        assert_eq!(
            is_valid_action(&state, Action::new(c(2, 3), c(3, 3))),
            Err(ActionError::EmptyTo(c(3, 3)))
        );
        assert_eq!(is_valid_action(&state, Action::new(c(0, 0), c(1, 0))), Ok(()));
    }

    #[test]
    fn test_swap_exchanges_and_leaves_input() {
        let state = filled(3, 3);
        let action = Action::new(Coord::new(0, 0), Coord::new(0, 1));
        let next = swap(&state, action).unwrap();

        assert_eq!(next.get_cell(action.from), state.get_cell(action.to));
        assert_eq!(next.get_cell(action.to), state.get_cell(action.from));
        assert_ne!(next, state);

        let back = swap(&next, action.reversed()).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_neighbor_moves_clip_at_edges() {
        let state = State::new(3, 3).unwrap();
        assert_eq!(neighbor_moves(&state, Coord::new(0, 0)).len(), 2);
        assert_eq!(neighbor_moves(&state, Coord::new(1, 0)).len(), 3);
        assert_eq!(neighbor_moves(&state, Coord::new(1, 1)).len(), 4);
    }

    #[test]
    fn test_find_valid_moves_counts_both_directions() {
        // 3x2 board: 2 rows of 2 pairs plus 3 columns of 1 pair = 7 pairs
        let state = State::new(3, 2).unwrap();
        let moves = find_valid_moves(&state);
        assert_eq!(moves.len(), 14);
        assert!(moves.iter().all(|a| a.from.is_adjacent(a.to)));
        assert!(moves.iter().all(|a| state.board().contains(a.to)));
    }
}
