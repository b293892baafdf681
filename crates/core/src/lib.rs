//! Core grid engine - pure, deterministic, and testable
//!
//! This crate contains the tile-matching and cascade-resolution rules of the
//! match-3 puzzle. It has **no dependencies** on rendering, input, timing, or
//! persistence, making it:
//!
//! - **Deterministic**: every tile comes from a caller-supplied [`TileSource`],
//!   so the same seed and the same swaps give bit-identical boards and scores
//! - **Testable**: engineered boards plus [`ScriptedTiles`] reproduce any cascade
//! - **Bounded**: a swap never resolves for more than [`engine::pass_cap`] passes
//!
//! # Module Structure
//!
//! - [`board`]: square grid of colored cells with drop-offset hints
//! - [`matcher`]: run-length scan for rows and columns, overlap merging
//! - [`cascade`]: removal, per-column gravity and backfill
//! - [`scoring`]: chain-weighted pass scores capped at ×5
//! - [`rng`]: tile generation policy and deterministic sources
//! - [`engine`]: `create_board`, `swap`, and the single-owner [`GridEngine`]
//! - [`snapshot`]: serializable color matrix with an FNV-1a hash
//!
//! # Rules
//!
//! - A **match** is a run of 3+ identical tiles in one row or column
//! - Every pass removes all matched cells at once (overlaps count once)
//! - Gravity compacts each column downward; vacated top cells are refilled
//!   with independent uniform draws, which may start the next pass
//! - A pass scores `removed × 10 × min(depth, 5)`
//!
//! # Example
//!
//! ```
//! use tile_cascade_core::{GridEngine, SimpleRng};
//! use tile_cascade_types::Position;
//!
//! let mut rng = SimpleRng::new(12345);
//! let mut engine = GridEngine::new(6, 6, &mut rng).unwrap();
//!
//! let res = engine
//!     .swap(Position::new(2, 2), Position::new(2, 3), &mut rng)
//!     .unwrap();
//!
//! // The board is always returned filled and match-free
//! assert!(res.final_board.is_filled());
//! assert_eq!(res.passes.len() as u32, res.max_chain_depth);
//! ```

pub mod board;
pub mod cascade;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tile_cascade_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell};
pub use engine::{create_board, swap, CascadePass, GridEngine, Resolution};
pub use error::EngineError;
pub use matcher::{find_matches, has_match, productive_swaps, Match, MatchMask};
pub use rng::{ScriptedTiles, SimpleRng, TileSource};
pub use scoring::{chain_multiplier, pass_score};
pub use snapshot::BoardSnapshot;
