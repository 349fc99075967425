//! Candy Crush board engine (workspace facade crate).
//!
//! Re-exports the workspace crates as `candy_crush::{types,core,engine}` so
//! callers depend on one package while the implementation lives under `crates/`.

pub use candy_crush_core as core;
pub use candy_crush_engine as engine;
pub use candy_crush_types as types;
