//! Refill - drop fresh candies into every remaining empty cell

use crate::mask::Mask;
use crate::rng::CandyRng;
use crate::state::State;

/// Fill every empty cell with an independently drawn candy.
///
/// After `fall` the empty cells sit at the top of their columns. The mask
/// flags each filled cell.
pub fn add_missing_candies(state: &State, rng: &mut CandyRng) -> (State, Mask) {
    let mut next = state.clone();
    let (width, height) = (next.width(), next.height());
    let mut filled = Mask::new(width, height);

    let board = next.board_mut();
    for x in 0..width {
        for y in 0..height {
            let i = board.idx(x, y);
            let cell = &mut board.cells_mut()[i];
            if cell.is_none() {
                *cell = Some(rng.next_candy());
                filled.mark(x, y);
            }
        }
    }

    (next, filled)
}

/// Overwrite every cell with a random candy, keeping the score.
pub fn fill_random(state: &State, rng: &mut CandyRng) -> State {
    let mut next = state.clone();
    for cell in next.board_mut().cells_mut() {
        *cell = Some(rng.next_candy());
    }
    next
}
