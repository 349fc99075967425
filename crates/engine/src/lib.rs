//! Resolution engine - sequences the match-3 rules for one game session
//!
//! The [`Engine`] holds the live [`State`](candy_crush_core::State), applies
//! player swaps and resolves the board either instantly or as an animated
//! cycle of phases reported through [`EngineHooks`].
//!
//! # Example
//!
//! ```
//! use candy_crush_engine::{Engine, EngineConfig, NoopHooks};
//! use candy_crush_engine::types::Phase;
//!
//! let engine = Engine::new(EngineConfig::default().with_seed(7), NoopHooks).unwrap();
//! engine.init_random().unwrap();
//!
//! let state = engine.state();
//! assert_eq!(state.score(), 0);
//! assert!(!candy_crush_engine::core::find_all_exploding(&state).any());
//!
//! let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
//! let action = engine.find_valid_moves()[0];
//! rt.block_on(engine.swap_and_resolve(action)).unwrap();
//! assert_eq!(engine.phase(), Phase::Idle);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod hooks;

pub use candy_crush_core as core;
pub use candy_crush_types as types;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::EngineError;
pub use hooks::{EngineHooks, NoopHooks, SleepHooks};
