//! Puzzle session - drives one timed game around a grid engine
//!
//! The session is the game-loop side of the contract: it turns taps into swap
//! commands, owns the countdown and play clock, and keeps the running score.
//! The grid engine itself knows nothing about time or totals.

use serde::Serialize;
use tracing::{debug, info};

use tile_cascade_core::error::Result;
use tile_cascade_core::types::Position;
use tile_cascade_core::{BoardSnapshot, GridEngine, Resolution, SimpleRng};

use crate::config::SessionConfig;

/// Length of the final "GO" beat of the countdown
pub const GO_BEAT_MS: u32 = 500;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// 3-2-1-GO before play; taps are ignored
    Countdown,
    Playing,
    /// Time ran out; the board is frozen
    Over,
}

/// What a tap did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    /// Not playing; nothing changed
    Ignored,
    /// First cell chosen
    Selected(Position),
    /// Second tap was not a neighbor of the selection; nothing swapped
    Deselected,
    /// A neighbor of the selection was tapped and the swap resolved
    Swapped(Resolution),
}

/// End-of-session report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub seed: u32,
    pub score: u32,
    pub swaps: u32,
    pub best_chain: u32,
    pub tiles_cleared: u32,
    pub board_hash: u64,
}

/// One timed puzzle game
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    config: SessionConfig,
    engine: GridEngine,
    rng: SimpleRng,
    phase: Phase,
    countdown_remaining_ms: u32,
    time_remaining_ms: u32,
    selected: Option<Position>,
    score: u32,
    swaps: u32,
    /// Deepest cascade seen, in passes
    best_chain: u32,
    tiles_cleared: u32,
}

impl PuzzleSession {
    /// Create a session and deal its board
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = SimpleRng::new(config.seed);
        let engine = GridEngine::new(config.grid_size, config.color_count, &mut rng)?;
        let phase = if config.countdown_ms > 0 {
            Phase::Countdown
        } else if config.duration_ms > 0 {
            Phase::Playing
        } else {
            Phase::Over
        };

        info!(
            seed = config.seed,
            size = config.grid_size,
            colors = config.color_count,
            "session created"
        );

        Ok(Self {
            countdown_remaining_ms: config.countdown_ms,
            time_remaining_ms: config.duration_ms,
            config,
            engine,
            rng,
            phase,
            selected: None,
            score: 0,
            swaps: 0,
            best_chain: 0,
            tiles_cleared: 0,
        })
    }

    /// Start over with a fresh board from the same seed
    pub fn restart(&mut self) -> Result<()> {
        *self = Self::new(self.config.clone())?;
        Ok(())
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn swaps(&self) -> u32 {
        self.swaps
    }

    pub fn best_chain(&self) -> u32 {
        self.best_chain
    }

    pub fn tiles_cleared(&self) -> u32 {
        self.tiles_cleared
    }

    pub fn time_remaining_ms(&self) -> u32 {
        self.time_remaining_ms
    }

    /// Countdown digit to show: `Some(3)`, `Some(2)`, `Some(1)`, then
    /// `Some(0)` for "GO"; `None` once play has started
    pub fn countdown_display(&self) -> Option<u32> {
        if self.phase != Phase::Countdown {
            return None;
        }
        let before_go = self.countdown_remaining_ms.saturating_sub(GO_BEAT_MS);
        Some(before_go.div_ceil(1000))
    }

    /// Advance the clocks. Returns true when the phase changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let before = self.phase;
        let mut left = elapsed_ms;

        if self.phase == Phase::Countdown {
            let used = left.min(self.countdown_remaining_ms);
            self.countdown_remaining_ms -= used;
            left -= used;
            if self.countdown_remaining_ms == 0 {
                self.phase = Phase::Playing;
                info!(duration_ms = self.time_remaining_ms, "session started");
            }
        }

        if self.phase == Phase::Playing {
            self.time_remaining_ms = self.time_remaining_ms.saturating_sub(left);
            if self.time_remaining_ms == 0 {
                self.phase = Phase::Over;
                self.selected = None;
                info!(
                    score = self.score,
                    swaps = self.swaps,
                    best_chain = self.best_chain,
                    "time up"
                );
            }
        }

        self.phase != before
    }

    /// Handle a tap on a cell.
    ///
    /// A second tap always clears the selection. It swaps only when it lands
    /// on an orthogonal neighbor of the selected cell.
    pub fn tap(&mut self, pos: Position) -> Result<TapOutcome> {
        self.engine.board().check_bounds(pos)?;
        if self.phase != Phase::Playing {
            return Ok(TapOutcome::Ignored);
        }

        match self.selected {
            None => {
                self.selected = Some(pos);
                Ok(TapOutcome::Selected(pos))
            }
            Some(sel) => {
                self.selected = None;
                if !sel.is_adjacent(pos) {
                    return Ok(TapOutcome::Deselected);
                }
                let res = self.commit_swap(sel, pos)?;
                Ok(TapOutcome::Swapped(res))
            }
        }
    }

    /// Swap two cells directly, skipping selection and adjacency.
    ///
    /// Returns `None` outside the playing phase.
    pub fn swap(&mut self, a: Position, b: Position) -> Result<Option<Resolution>> {
        if self.phase != Phase::Playing {
            self.engine.board().check_bounds(a)?;
            self.engine.board().check_bounds(b)?;
            return Ok(None);
        }
        self.selected = None;
        self.commit_swap(a, b).map(Some)
    }

    fn commit_swap(&mut self, a: Position, b: Position) -> Result<Resolution> {
        let res = self.engine.swap(a, b, &mut self.rng)?;
        self.swaps += 1;
        self.score = self.score.saturating_add(res.accumulated_score);
        self.tiles_cleared += res.total_removed;
        self.best_chain = self.best_chain.max(res.max_chain_depth);
        debug!(
            swap = self.swaps,
            gained = res.accumulated_score,
            score = self.score,
            "swap committed"
        );
        Ok(res)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.config.seed,
            score: self.score,
            swaps: self.swaps,
            best_chain: self.best_chain,
            tiles_cleared: self.tiles_cleared,
            board_hash: self.snapshot().board_hash,
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.engine.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(seed: u32) -> PuzzleSession {
        let config = SessionConfig {
            countdown_ms: 0,
            ..SessionConfig::default()
        }
        .with_seed(seed);
        PuzzleSession::new(config).unwrap()
    }

    #[test]
    fn test_countdown_digits() {
        let mut s = PuzzleSession::new(SessionConfig::default()).unwrap();
        assert_eq!(s.phase(), Phase::Countdown);
        assert_eq!(s.countdown_display(), Some(3));
        s.tick(1000);
        assert_eq!(s.countdown_display(), Some(2));
        s.tick(1000);
        assert_eq!(s.countdown_display(), Some(1));
        s.tick(1000);
        assert_eq!(s.countdown_display(), Some(0));
        assert!(s.tick(500));
        assert_eq!(s.phase(), Phase::Playing);
        assert_eq!(s.countdown_display(), None);
    }

    #[test]
    fn test_countdown_spill_counts_against_play_time() {
        let mut s = PuzzleSession::new(SessionConfig::default()).unwrap();
        s.tick(3_500 + 250);
        assert_eq!(s.phase(), Phase::Playing);
        assert_eq!(s.time_remaining_ms(), 60_000 - 250);
    }

    #[test]
    fn test_selection_flow() {
        let mut s = playing(5);
        let a = Position::new(1, 1);

        assert_eq!(s.tap(a).unwrap(), TapOutcome::Selected(a));
        assert_eq!(s.tap(a).unwrap(), TapOutcome::Deselected);
        assert_eq!(s.selected(), None);

        // A non-neighbor second tap drops the selection without swapping
        s.tap(a).unwrap();
        let far = Position::new(4, 4);
        let before = s.snapshot();
        assert_eq!(s.tap(far).unwrap(), TapOutcome::Deselected);
        assert_eq!(s.selected(), None);
        assert_eq!(s.swaps(), 0);
        assert_eq!(s.snapshot(), before);

        assert_eq!(s.tap(far).unwrap(), TapOutcome::Selected(far));
        let next = Position::new(4, 5);
        assert!(matches!(s.tap(next).unwrap(), TapOutcome::Swapped(_)));
        assert_eq!(s.swaps(), 1);
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_zero_duration_is_over_immediately() {
        let config = SessionConfig {
            countdown_ms: 0,
            duration_ms: 0,
            ..SessionConfig::default()
        };
        let mut s = PuzzleSession::new(config).unwrap();
        assert_eq!(s.phase(), Phase::Over);
        assert_eq!(s.tap(Position::new(0, 0)).unwrap(), TapOutcome::Ignored);

        let config = SessionConfig {
            duration_ms: 0,
            ..SessionConfig::default()
        };
        let mut s = PuzzleSession::new(config).unwrap();
        assert!(s.tick(3_500));
        assert_eq!(s.phase(), Phase::Over);
    }

    #[test]
    fn test_out_of_bounds_tap_keeps_selection() {
        let mut s = playing(5);
        let a = Position::new(0, 0);
        s.tap(a).unwrap();
        assert!(s.tap(Position::new(0, 9)).is_err());
        assert_eq!(s.selected(), Some(a));
    }

    #[test]
    fn test_restart_deals_same_board_for_same_seed() {
        let mut s = playing(77);
        let first = s.snapshot();
        s.swap(Position::new(0, 0), Position::new(0, 1)).unwrap();
        s.restart().unwrap();
        assert_eq!(s.snapshot(), first);
        assert_eq!(s.score(), 0);
        assert_eq!(s.swaps(), 0);
    }
}
