use crate::types::Coord;

/// Errors raised while constructing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Why a proposed swap was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("source {0} is outside the board")]
    FromOutOfBounds(Coord),

    #[error("destination {0} is outside the board")]
    ToOutOfBounds(Coord),

    #[error("source and destination are the same cell {0}")]
    SameCell(Coord),

    #[error("{from} and {to} are not adjacent")]
    NotAdjacent { from: Coord, to: Coord },

    #[error("source {0} is empty")]
    EmptyFrom(Coord),

    #[error("destination {0} is empty")]
    EmptyTo(Coord),

    #[error("a resolution cycle is still running")]
    ResolutionInFlight,
}

impl ActionError {
    /// Stable machine-readable code
    pub fn code(self) -> &'static str {
        match self {
            ActionError::FromOutOfBounds(_) | ActionError::ToOutOfBounds(_) => "out_of_bounds",
            ActionError::SameCell(_) => "same_cell",
            ActionError::NotAdjacent { .. } => "not_adjacent",
            ActionError::EmptyFrom(_) | ActionError::EmptyTo(_) => "empty_cell",
            ActionError::ResolutionInFlight => "busy",
        }
    }
}
