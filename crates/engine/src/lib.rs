//! Session driver for the cascade puzzle
//!
//! Wraps a [`GridEngine`](tile_cascade_core::GridEngine) in the pieces a
//! playable game needs around it: tap selection with neighbor-only swaps, a
//! countdown and play clock, and the running score. Sessions are seeded, so a
//! seed plus a tap log replays a game exactly.

pub mod config;
pub mod session;

pub use tile_cascade_core as core;
pub use tile_cascade_types as types;

pub use config::SessionConfig;
pub use session::{Phase, PuzzleSession, SessionSummary, TapOutcome, GO_BEAT_MS};
