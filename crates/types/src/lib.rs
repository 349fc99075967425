//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental value types used throughout the engine.
//! All types are small `Copy` values with no ownership concerns, making them
//! usable in any context (rules, orchestration, presentation hooks).
//!
//! # Board Dimensions
//!
//! The default board is a 9x9 grid:
//!
//! - **Width**: 9 columns (x indexed 0-8, left to right)
//! - **Height**: 9 rows (y indexed 0-8, top to bottom)
//!
//! Gravity pulls candies towards larger `y` values.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ANIMATION_DELAY_MS` | 200 | Pause between animated phases |
//! | `MAX_SYNC_ROUNDS` | 1000 | Cap on instant resolution rounds |
//!
//! # Examples
//!
//! ```
//! use candy_crush_types::{Action, Candy, Coord, Direction};
//!
//! let candy = Candy::from_str("red").unwrap();
//! assert_eq!(candy, Candy::Red);
//!
//! let from = Coord::new(2, 2);
//! let action = Action::towards(from, Direction::Down);
//! assert_eq!(action.to, Coord::new(2, 3));
//! assert!(action.from.is_adjacent(action.to));
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells (9 columns)
pub const BOARD_WIDTH: usize = 9;

/// Default board height in cells (9 rows)
pub const BOARD_HEIGHT: usize = 9;

/// Shortest run of identical candies that explodes
pub const MIN_RUN: usize = 3;

/// Pause between animated phases (200ms)
pub const ANIMATION_DELAY_MS: u64 = 200;

/// Upper bound on rounds of instant (synchronous) resolution
pub const MAX_SYNC_ROUNDS: u32 = 1000;

/// The six candy kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Candy {
    Red,
    Yellow,
    Green,
    Blue,
    Purple,
    Orange,
}

impl Candy {
    /// Number of candy kinds in the palette
    pub const COUNT: usize = 6;

    /// Every candy kind, in palette order
    pub const ALL: [Candy; Candy::COUNT] = [
        Candy::Red,
        Candy::Yellow,
        Candy::Green,
        Candy::Blue,
        Candy::Purple,
        Candy::Orange,
    ];

    /// Parse candy kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use candy_crush_types::Candy;
    ///
    /// assert_eq!(Candy::from_str("Blue"), Some(Candy::Blue));
    /// assert_eq!(Candy::from_str("o"), Some(Candy::Orange));
    /// assert_eq!(Candy::from_str("teal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" | "r" => Some(Candy::Red),
            "yellow" | "y" => Some(Candy::Yellow),
            "green" | "g" => Some(Candy::Green),
            "blue" | "b" => Some(Candy::Blue),
            "purple" | "p" => Some(Candy::Purple),
            "orange" | "o" => Some(Candy::Orange),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Candy::Red => "red",
            Candy::Yellow => "yellow",
            Candy::Green => "green",
            Candy::Blue => "blue",
            Candy::Purple => "purple",
            Candy::Orange => "orange",
        }
    }

    /// Single-letter tag used by text renderings of the board
    pub fn as_char(&self) -> char {
        match self {
            Candy::Red => 'R',
            Candy::Yellow => 'Y',
            Candy::Green => 'G',
            Candy::Blue => 'B',
            Candy::Purple => 'P',
            Candy::Orange => 'O',
        }
    }

    /// Numeric code 1..=6; 0 is reserved for an empty cell.
    pub fn to_u8(self) -> u8 {
        match self {
            Candy::Red => 1,
            Candy::Yellow => 2,
            Candy::Green => 3,
            Candy::Blue => 4,
            Candy::Purple => 5,
            Candy::Orange => 6,
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell (no candy present)
/// - `Some(Candy)`: Cell holding the specified candy
pub type Cell = Option<Candy>;

/// Numeric code for a cell, as used by snapshots (0 = empty).
pub fn cell_to_u8(cell: Cell) -> u8 {
    cell.map(Candy::to_u8).unwrap_or(0)
}

/// Grid coordinate: `x` is the column, `y` is the row.
///
/// Signed so that neighbours of edge cells can be expressed and rejected
/// by bounds checks instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The cell one step away in `dir`
    pub fn neighbor(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        self.offset(dx, dy)
    }

    /// True when the two coords share one axis and differ by exactly one on the other.
    pub fn is_adjacent(self, other: Coord) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        (dx == 0 && dy == 1) || (dx == 1 && dy == 0)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Swap directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset `(dx, dy)`; `Up` decreases `y`.
    ///
    /// # Examples
    ///
    /// ```
    /// use candy_crush_types::Direction;
    ///
    /// assert_eq!(Direction::Up.offset(), (0, -1));
    /// assert_eq!(Direction::Right.offset(), (1, 0));
    /// ```
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A proposed swap of two cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub from: Coord,
    pub to: Coord,
}

impl Action {
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// Swap `from` with its neighbour in `dir`
    pub fn towards(from: Coord, dir: Direction) -> Self {
        Self {
            from,
            to: from.neighbor(dir),
        }
    }

    /// The same swap with its endpoints exchanged
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Animation step of a resolution cycle
///
/// The cycle runs `Swap -> Explode -> Fall -> Refill -> (Explode | Idle)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Swap,
    Explode,
    Fall,
    Refill,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Swap => "swap",
            Phase::Explode => "explode",
            Phase::Fall => "fall",
            Phase::Refill => "refill",
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            Phase::Idle => 0,
            Phase::Swap => 1,
            Phase::Explode => 2,
            Phase::Fall => 3,
            Phase::Refill => 4,
        }
    }

    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Phase::Idle),
            1 => Some(Phase::Swap),
            2 => Some(Phase::Explode),
            3 => Some(Phase::Fall),
            4 => Some(Phase::Refill),
            _ => None,
        }
    }
}
