//! Recoverable engine errors
//!
//! Only caller mistakes are represented here. Broken engine invariants (a
//! runaway cascade, a board returned with a live match) are panics.

use thiserror::Error;

use crate::types::{Position, MAX_COLOR_COUNT, MAX_GRID_SIZE, MIN_COLOR_COUNT, MIN_GRID_SIZE};

/// Errors reported by board construction and swaps
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A swap target lies outside the grid; the board is left untouched
    #[error("position {pos} is outside the {size}x{size} grid")]
    OutOfBounds { pos: Position, size: u8 },

    /// Grid edge outside the supported range
    #[error("grid size {0} must be within {}..={}", MIN_GRID_SIZE, MAX_GRID_SIZE)]
    InvalidDimensions(u8),

    /// Palette size outside the supported range
    #[error("color count {0} must be within {}..={}", MIN_COLOR_COUNT, MAX_COLOR_COUNT)]
    InvalidColorCount(u8),

    /// A literal board could not be loaded
    #[error("invalid board: {0}")]
    InvalidBoard(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Validate grid parameters shared by every constructor
pub fn check_dimensions(size: u8, color_count: u8) -> Result<()> {
    if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        return Err(EngineError::InvalidDimensions(size));
    }
    if !(MIN_COLOR_COUNT..=MAX_COLOR_COUNT).contains(&color_count) {
        return Err(EngineError::InvalidColorCount(color_count));
    }
    Ok(())
}
