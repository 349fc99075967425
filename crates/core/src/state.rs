//! Game state module - board plus accumulated score
//!
//! `State` is the unit of snapshotting. Every rule takes a `&State`, clones it,
//! mutates the clone and hands the clone back, so a state given to a hook is
//! never modified behind its back.

use crate::board::Board;
use crate::error::BoardError;
use crate::snapshot::BoardSnapshot;
use crate::types::{Cell, Coord};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    board: Board,
    score: u32,
}

impl State {
    /// Empty board of the given size with a zero score
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(width, height)?,
            score: 0,
        })
    }

    pub fn from_board(board: Board, score: u32) -> Self {
        Self { board, score }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn get_cell(&self, coord: Coord) -> Option<Cell> {
        self.board.get(coord)
    }

    pub fn set_cell(&mut self, coord: Coord, cell: Cell) -> bool {
        self.board.set(coord, cell)
    }

    pub fn swap_cells(&mut self, a: Coord, b: Coord) -> bool {
        self.board.swap_cells(a, b)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(self)
    }
}
