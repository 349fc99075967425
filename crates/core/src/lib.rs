//! Core game logic module - pure rules over board snapshots
//!
//! This module contains the board, the game state and every match-3 rule.
//! It has **no dependencies** on presentation, timing or async runtimes, making it:
//!
//! - **Snapshot-safe**: every rule borrows a `State` and returns a fresh one
//! - **Testable**: rules are plain functions over plain data
//! - **Deterministic**: seed a [`CandyRng`] to replay the same refills
//!
//! # Module Structure
//!
//! - [`board`]: width x height grid stored as one flat arena
//! - [`state`]: board plus score, the unit handed to presentation hooks
//! - [`mask`]: per-cell flags reported by each phase
//! - [`matching`]: run detection and explosion scoring
//! - [`gravity`]: column settling after an explosion
//! - [`refill`]: random candies for empty cells
//! - [`moves`]: swap validation and neighbour enumeration
//! - [`rng`]: uniform candy generation
//! - [`snapshot`]: serializable views for logs and presentation layers
//!
//! # Game Rules
//!
//! - **Match**: 3 or more identical candies in a single row or column
//! - **Scoring**: 1 point per cleared cell, regardless of run length
//! - **Gravity**: candies fall straight down, keeping their column order
//! - **Refill**: each empty cell receives an independent uniform candy
//! - **Swap**: two orthogonally adjacent, non-empty cells
//!
//! # Example
//!
//! ```
//! use candy_crush_core::{explode_and_score, fall, add_missing_candies, CandyRng, State};
//! use candy_crush_core::types::{Candy, Coord};
//!
//! let mut state = State::new(4, 4).unwrap();
//! for x in 0..3 {
//!     state.set_cell(Coord::new(x, 3), Some(Candy::Red));
//! }
//!
//! let (state, changed, exploded) = explode_and_score(&state);
//! assert!(changed);
//! assert_eq!(exploded.count(), 3);
//! assert_eq!(state.score(), 3);
//!
//! let (state, _fallen) = fall(&state);
//! let (state, filled) = add_missing_candies(&state, &mut CandyRng::seeded(1));
//! assert_eq!(filled.count(), 16);
//! assert_eq!(state.board().empty_count(), 0);
//! ```

pub mod board;
pub mod error;
pub mod gravity;
pub mod mask;
pub mod matching;
pub mod moves;
pub mod refill;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use candy_crush_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::{ActionError, BoardError};
pub use gravity::fall;
pub use mask::Mask;
pub use matching::{explode, explode_and_score, find_all_exploding};
pub use moves::{find_valid_moves, is_valid_action, neighbor_moves, swap};
pub use refill::{add_missing_candies, fill_random};
pub use rng::CandyRng;
pub use snapshot::{BoardSnapshot, MaskSnapshot};
pub use state::State;
