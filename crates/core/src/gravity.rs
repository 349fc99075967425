//! Gravity - settle candies into the gaps left by an explosion

use crate::mask::Mask;
use crate::state::State;

/// Let candies fall into empty cells below them.
///
/// Each column is scanned bottom to top; an empty cell pulls down the nearest
/// candy above it. Candies keep their relative order within the column. The
/// returned mask flags every destination cell that received a moved candy.
pub fn fall(state: &State) -> (State, Mask) {
    let mut next = state.clone();
    let (width, height) = (next.width(), next.height());
    let mut fallen = Mask::new(width, height);

    let board = next.board_mut();
    for x in 0..width {
        for y in (0..height).rev() {
            let dst = board.idx(x, y);
            if board.cells()[dst].is_some() {
                continue;
            }
            if let Some(src_y) = (0..y).rev().find(|&k| board.cells()[board.idx(x, k)].is_some()) {
                let src = board.idx(x, src_y);
                let cells = board.cells_mut();
                cells[dst] = cells[src].take();
                fallen.mark(x, y);
            }
        }
    }

    (next, fallen)
}
