use serde::{Deserialize, Serialize};

use crate::mask::Mask;
use crate::state::State;
use crate::types::cell_to_u8;

/// Serializable view of a state for presentation layers and logs.
///
/// Cells are numeric codes: 0 is empty, 1..=6 are candy kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub width: usize,
    pub height: usize,
    pub score: u32,
    pub cells: Vec<Vec<u8>>,
}

impl From<&State> for BoardSnapshot {
    fn from(state: &State) -> Self {
        let board = state.board();
        Self {
            width: board.width(),
            height: board.height(),
            score: state.score(),
            cells: board
                .rows()
                .map(|row| row.iter().map(|&c| cell_to_u8(c)).collect())
                .collect(),
        }
    }
}

/// Serializable view of a mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaskSnapshot {
    pub count: usize,
    pub rows: Vec<Vec<bool>>,
}

impl From<&Mask> for MaskSnapshot {
    fn from(mask: &Mask) -> Self {
        Self {
            count: mask.count(),
            rows: mask.rows(),
        }
    }
}
