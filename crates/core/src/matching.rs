//! Match detection and explosion
//!
//! A match is `MIN_RUN` or more consecutive identical candies in one row or one
//! column. Detection slides a `MIN_RUN`-wide window over every row and every
//! column of the unmodified board and marks each window that matches, so longer
//! runs and crossing runs are covered by the union of overlapping windows.
//! Each cleared cell scores one point.

use crate::mask::Mask;
use crate::state::State;
use crate::types::{Cell, MIN_RUN};

/// True when every cell in the window is the same candy
#[inline]
fn window_matches(first: Cell, mut rest: impl Iterator<Item = Cell>) -> bool {
    match first {
        Some(_) => rest.all(|c| c == first),
        None => false,
    }
}

/// Mask of every cell that is part of a horizontal or vertical run
pub fn find_all_exploding(state: &State) -> Mask {
    let board = state.board();
    let (width, height) = (board.width(), board.height());
    let cells = board.cells();
    let mut exploding = Mask::new(width, height);

    // Rows
    if width >= MIN_RUN {
        for y in 0..height {
            for x in 0..=(width - MIN_RUN) {
                let first = cells[board.idx(x, y)];
                if window_matches(first, (1..MIN_RUN).map(|k| cells[board.idx(x + k, y)])) {
                    for k in 0..MIN_RUN {
                        exploding.mark(x + k, y);
                    }
                }
            }
        }
    }

    // Columns
    if height >= MIN_RUN {
        for x in 0..width {
            for y in 0..=(height - MIN_RUN) {
                let first = cells[board.idx(x, y)];
                if window_matches(first, (1..MIN_RUN).map(|k| cells[board.idx(x, y + k)])) {
                    for k in 0..MIN_RUN {
                        exploding.mark(x, y + k);
                    }
                }
            }
        }
    }

    exploding
}

/// Clear every matched cell and add one point per cleared cell.
///
/// Returns the new state and the "destroyed" mask.
pub fn explode(state: &State) -> (State, Mask) {
    let mut next = state.clone();
    let exploding = find_all_exploding(state);

    let width = next.width();
    let mut cleared: u32 = 0;
    for (i, cell) in next.board_mut().cells_mut().iter_mut().enumerate() {
        if exploding.is_marked(i % width, i / width) {
            *cell = None;
            cleared += 1;
        }
    }
    next.add_score(cleared);

    (next, exploding)
}

/// Explode and report whether anything changed.
///
/// `changed` is true iff the score moved, i.e. iff the mask has any flag set.
/// When nothing changed the input state is handed back unchanged.
pub fn explode_and_score(state: &State) -> (State, bool, Mask) {
    let (next, exploded) = explode(state);
    let changed = next.score() != state.score();
    log::trace!("explode: {} cells, score {}", exploded.count(), next.score());

    if changed {
        (next, true, exploded)
    } else {
        (state.clone(), false, exploded)
    }
}
