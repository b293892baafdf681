//! Tile Cascade (workspace facade crate).
//!
//! Re-exports the grid engine, the session driver and the shared types under
//! one `tile_cascade::{core,engine,types}` path while the implementation lives
//! in dedicated crates under `crates/`.

pub mod cli;

pub use tile_cascade_core as core;
pub use tile_cascade_engine as engine;
pub use tile_cascade_types as types;
