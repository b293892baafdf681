//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, making them usable in any
//! context (grid engine, session driver, headless runner, observers).
//!
//! # Grid Dimensions
//!
//! The reference puzzle uses a square 6x6 grid with 6 tile colors:
//!
//! - **Rows**: indexed `0..size`, row 0 is the top, gravity pulls toward higher rows
//! - **Columns**: indexed `0..size`, left to right
//! - **Colors**: indexed `0..color_count`
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_POINTS` | 10 | Points per removed tile before the chain multiplier |
//! | `MAX_CHAIN_MULTIPLIER` | 5 | Multiplier cap for deep cascades |
//! | `MIN_MATCH_LEN` | 3 | Shortest run that counts as a match |
//!
//! # Session Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_DURATION_MS` | 60000 | Play time before the session ends |
//! | `DEFAULT_COUNTDOWN_MS` | 3500 | 3-2-1 countdown plus the "GO" beat |
//!
//! # Examples
//!
//! ```
//! use tile_cascade_types::{Axis, Position, DEFAULT_GRID_SIZE};
//!
//! let a = Position::new(2, 3);
//! let b = Position::new(2, 4);
//! assert!(a.is_adjacent(b));
//! assert!(a.in_bounds(DEFAULT_GRID_SIZE));
//!
//! // Step along an axis
//! assert_eq!(a.offset(Axis::Column, 2), Position::new(4, 3));
//! ```

use serde::{Deserialize, Serialize};

/// Reference grid edge length (6x6)
pub const DEFAULT_GRID_SIZE: u8 = 6;

/// Reference number of tile colors
pub const DEFAULT_COLOR_COUNT: u8 = 6;

/// Smallest grid edge that can hold a match
pub const MIN_GRID_SIZE: u8 = 3;

/// Largest supported grid edge
pub const MAX_GRID_SIZE: u8 = 16;

/// Fewest colors for which random generation terminates
pub const MIN_COLOR_COUNT: u8 = 3;

/// Largest supported palette
pub const MAX_COLOR_COUNT: u8 = 16;

/// Shortest run of identical tiles that is removed
pub const MIN_MATCH_LEN: u8 = 3;

/// Points awarded per removed tile at chain depth 1
pub const BASE_POINTS: u32 = 10;

/// Chain multiplier ceiling
pub const MAX_CHAIN_MULTIPLIER: u32 = 5;

/// Session play time (60s)
pub const DEFAULT_DURATION_MS: u32 = 60_000;

/// Pre-game countdown: three 1s beats and a 500ms "GO"
pub const DEFAULT_COUNTDOWN_MS: u32 = 3_500;

/// Fixed timestep used by the headless runner (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Grid coordinate
///
/// `row` grows downward, `col` grows to the right. Both are plain indices and
/// carry no board size; use [`Position::in_bounds`] before addressing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Position of the `idx`-th cell of a row-major `size` x `size` grid
    pub fn from_index(idx: usize, size: u8) -> Self {
        let n = size as usize;
        Self::new((idx / n) as u8, (idx % n) as u8)
    }

    /// Check whether the position lies on a `size` x `size` grid
    pub fn in_bounds(&self, size: u8) -> bool {
        self.row < size && self.col < size
    }

    /// Orthogonal neighbor test (Manhattan distance of exactly 1)
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_cascade_types::Position;
    ///
    /// let p = Position::new(1, 1);
    /// assert!(p.is_adjacent(Position::new(0, 1)));
    /// assert!(p.is_adjacent(Position::new(1, 2)));
    /// assert!(!p.is_adjacent(Position::new(2, 2)));
    /// assert!(!p.is_adjacent(p));
    /// ```
    pub fn is_adjacent(&self, other: Position) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr + dc == 1
    }

    /// Step `n` cells along an axis (row axis moves right, column axis moves down)
    pub fn offset(&self, axis: Axis, n: u8) -> Self {
        match axis {
            Axis::Row => Self::new(self.row, self.col + n),
            Axis::Column => Self::new(self.row + n, self.col),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction of a run of tiles
///
/// - **Row**: cells share a row, run extends to the right
/// - **Column**: cells share a column, run extends downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }
}
