//! Grid engine - board construction and swap resolution
//!
//! The engine owns no state between calls beyond the board itself. A swap is
//! a single synchronous transaction:
//!
//! ```text
//! Idle -> Resolving(depth 1) -> [match] -> Resolving(depth + 1) -> ... -> [no match] -> Idle
//! ```
//!
//! Any two in-bounds cells may be exchanged. A swap that produces no match is
//! still committed and resolves with zero score; adjacency is a policy of
//! whoever issues the swap.

use tracing::{debug, trace};

use crate::board::{Board, Cell};
use crate::cascade::{clear_matched, collapse_and_refill};
use crate::error::{check_dimensions, Result};
use crate::matcher::{find_matches, has_match, Match, MatchMask};
use crate::rng::TileSource;
use crate::scoring::{display_chain, pass_score};
use crate::snapshot::BoardSnapshot;
use crate::types::Position;

/// One resolution pass of a cascade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadePass {
    /// 1-based chain depth of this pass
    pub depth: u32,
    /// Runs found by the scan that started this pass
    pub matches: Vec<Match>,
    /// Distinct cells emptied, row-major
    pub removed: Vec<Position>,
    pub score: u32,
    /// Board after gravity and backfill, drop offsets included
    pub board: Board,
}

/// Outcome of one swap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub final_board: Board,
    pub accumulated_score: u32,
    /// Passes that found at least one match (0 when the swap matched nothing)
    pub max_chain_depth: u32,
    pub total_removed: u32,
    pub passes: Vec<CascadePass>,
}

impl Resolution {
    /// Chains beyond the first pass, as shown to players
    pub fn chain_count(&self) -> u32 {
        display_chain(self.max_chain_depth)
    }

    pub fn matched(&self) -> bool {
        self.max_chain_depth > 0
    }
}

/// Passes allowed per cell before a cascade counts as runaway
pub const PASS_CAP_PER_CELL: u32 = 64;

/// Hard ceiling on passes per swap: `64 * size²`
///
/// Uniform backfill can keep a cascade going for many passes on small
/// palettes, so the ceiling sits far above anything random play reaches
/// and only trips on a source that repeats a match forever.
pub fn pass_cap(size: u8) -> u32 {
    let n = size as u32;
    (n * n * PASS_CAP_PER_CELL).max(1)
}

/// Create a fresh board with no live match.
///
/// Every cell is drawn uniformly (row-major), then only the cells belonging to
/// a match are re-drawn, round after round, until the board is clean. With
/// independent uniform draws and at least three colors this ends almost
/// surely; a scripted source that keeps repeating a match will not.
pub fn create_board<T>(size: u8, color_count: u8, tiles: &mut T) -> Result<Board>
where
    T: TileSource + ?Sized,
{
    check_dimensions(size, color_count)?;

    let mut board = Board::empty(size, color_count);
    for cell in board.cells_mut() {
        *cell = Cell::tile(tiles.next_tile(color_count));
    }

    let mut rounds = 0u32;
    loop {
        let matches = find_matches(&board);
        if matches.is_empty() {
            break;
        }
        rounds += 1;
        let mask = MatchMask::from_matches(size, &matches);
        trace!(round = rounds, cells = mask.count(), "re-rolling matched cells");
        for pos in mask.positions() {
            *board.cell_mut(pos) = Cell::tile(tiles.next_tile(color_count));
        }
    }

    debug!(size, color_count, rounds, "board created");
    Ok(board)
}

/// Exchange two cells and resolve the resulting cascade to a fixed point.
///
/// Out-of-bounds positions are rejected before anything is touched. Drop
/// offsets left over from the previous call are cleared first.
///
/// # Panics
///
/// Panics if the cascade runs past [`pass_cap`] passes or the final board is
/// not filled and match-free; both mean the engine itself is broken.
pub fn swap<T>(board: &mut Board, a: Position, b: Position, tiles: &mut T) -> Result<Resolution>
where
    T: TileSource + ?Sized,
{
    board.check_bounds(a)?;
    board.check_bounds(b)?;

    board.settle_drops();
    board.swap_cells(a, b);

    let n = board.size();
    let cap = pass_cap(n);
    let mut depth = 0u32;
    let mut accumulated_score = 0u32;
    let mut total_removed = 0u32;
    let mut passes = Vec::new();

    loop {
        let matches = find_matches(board);
        if matches.is_empty() {
            break;
        }

        depth += 1;
        assert!(
            depth <= cap,
            "cascade exceeded {} passes on a {}x{} board",
            cap,
            n,
            n
        );

        let mask = MatchMask::from_matches(n, &matches);
        let removed = clear_matched(board, &mask);
        collapse_and_refill(board, tiles);

        let score = pass_score(removed, depth);
        accumulated_score = accumulated_score.saturating_add(score);
        total_removed += removed;
        debug!(depth, removed, score, runs = matches.len(), "cascade pass");

        passes.push(CascadePass {
            depth,
            removed: mask.positions().collect(),
            matches,
            score,
            board: board.clone(),
        });
    }

    assert!(
        board.is_filled() && !has_match(board),
        "swap resolution left an unsettled board:\n{}",
        board
    );

    if depth > 0 {
        debug!(%a, %b, chain = depth, score = accumulated_score, total_removed, "swap resolved");
    } else {
        trace!(%a, %b, "swap produced no match");
    }

    Ok(Resolution {
        final_board: board.clone(),
        accumulated_score,
        max_chain_depth: depth,
        total_removed,
        passes,
    })
}

/// Single-owner handle around a board
///
/// The board is only reachable mutably through [`GridEngine::swap`], so a
/// caller never observes it mid-cascade.
#[derive(Debug, Clone)]
pub struct GridEngine {
    board: Board,
}

impl GridEngine {
    pub fn new<T>(size: u8, color_count: u8, tiles: &mut T) -> Result<Self>
    where
        T: TileSource + ?Sized,
    {
        Ok(Self {
            board: create_board(size, color_count, tiles)?,
        })
    }

    /// Wrap an existing board (replays, engineered positions)
    pub fn from_board(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn swap<T>(&mut self, a: Position, b: Position, tiles: &mut T) -> Result<Resolution>
    where
        T: TileSource + ?Sized,
    {
        swap(&mut self.board, a, b, tiles)
    }

    /// Advance drop animations by `rows`
    pub fn step_drops(&mut self, rows: i16) {
        self.board.step_drops(rows);
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(&self.board)
    }

    pub fn into_board(self) -> Board {
        self.board
    }
}
