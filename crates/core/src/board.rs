//! Board module - manages the tile grid
//!
//! The board is a square `size` x `size` grid of colored tiles.
//! Uses a flat row-major vector for cache locality; the grid never changes
//! shape after construction.
//! Coordinates: `Position { row, col }` where row 0 is the top and gravity
//! pulls tiles toward higher rows.

use crate::error::{check_dimensions, EngineError, Result};
use crate::types::Position;

/// One grid cell
///
/// `color` is `None` only while a resolution pass is in flight (between
/// removal and refill). `drop_offset` is a presentation hint in rows: a
/// negative value means the tile is still that many rows above its resting
/// row. It never takes part in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub color: Option<u8>,
    pub drop_offset: i16,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        color: None,
        drop_offset: 0,
    };

    pub const fn tile(color: u8) -> Self {
        Self {
            color: Some(color),
            drop_offset: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none()
    }
}

/// The puzzle grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    color_count: u8,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with every cell empty.
    ///
    /// Only the engine hands out boards, and never in this state; callers go
    /// through [`crate::engine::create_board`] or [`Board::from_color_rows`].
    pub(crate) fn empty(size: u8, color_count: u8) -> Self {
        let n = size as usize;
        Self {
            size,
            color_count,
            cells: vec![Cell::EMPTY; n * n],
        }
    }

    /// Build a board from a literal color matrix (row 0 first)
    ///
    /// The matrix must be square, every color must be below `color_count`, and
    /// the usual dimension limits apply. A matrix that already contains a match
    /// is accepted; the next swap will resolve it.
    pub fn from_color_rows(rows: &[Vec<u8>], color_count: u8) -> Result<Self> {
        let size = u8::try_from(rows.len())
            .map_err(|_| EngineError::InvalidBoard(format!("{} rows", rows.len())))?;
        check_dimensions(size, color_count)?;

        let mut board = Self::empty(size, color_count);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != rows.len() {
                return Err(EngineError::InvalidBoard(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    rows.len()
                )));
            }
            for (c, &color) in row.iter().enumerate() {
                if color >= color_count {
                    return Err(EngineError::InvalidBoard(format!(
                        "color {} at ({}, {}) exceeds palette of {}",
                        color, r, c, color_count
                    )));
                }
                board.cells[r * size as usize + c] = Cell::tile(color);
            }
        }
        Ok(board)
    }

    /// Calculate flat index for an in-bounds position
    #[inline(always)]
    pub(crate) fn index(&self, pos: Position) -> usize {
        pos.row as usize * self.size as usize + pos.col as usize
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn color_count(&self) -> u8 {
        self.color_count
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.in_bounds(self.size)
    }

    /// Check a caller-supplied position
    pub fn check_bounds(&self, pos: Position) -> Result<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                pos,
                size: self.size,
            })
        }
    }

    /// Get cell at position
    /// Returns None if out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.cells[self.index(pos)])
        } else {
            None
        }
    }

    /// Tile color at position, `None` when out of bounds or empty
    pub fn color_at(&self, pos: Position) -> Option<u8> {
        self.get(pos).and_then(|cell| cell.color)
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        let idx = self.index(pos);
        &mut self.cells[idx]
    }

    /// Exchange the contents of two in-bounds cells
    pub(crate) fn swap_cells(&mut self, a: Position, b: Position) {
        let ia = self.index(a);
        let ib = self.index(b);
        self.cells.swap(ia, ib);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size as usize)
    }

    /// True when no cell is empty
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Convert to a color matrix for display and assertions.
    ///
    /// Empty cells only exist mid-resolution, so a settled board always
    /// converts; an empty cell maps to `u8::MAX`.
    pub fn to_color_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.color.unwrap_or(u8::MAX)).collect())
            .collect()
    }

    /// Move every drop offset `rows` steps toward zero
    pub fn step_drops(&mut self, rows: i16) {
        let rows = rows.max(0);
        for cell in &mut self.cells {
            if cell.drop_offset < 0 {
                cell.drop_offset = (cell.drop_offset + rows).min(0);
            } else if cell.drop_offset > 0 {
                cell.drop_offset = (cell.drop_offset - rows).max(0);
            }
        }
    }

    /// Zero every drop offset
    pub fn settle_drops(&mut self) {
        for cell in &mut self.cells {
            cell.drop_offset = 0;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.cells.iter().all(|cell| cell.drop_offset == 0)
    }
}

impl std::fmt::Display for Board {
    /// One line per row, colors as digits/letters (`.` for empty)
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const GLYPHS: &[u8; 16] = b"0123456789abcdef";
        for row in self.rows() {
            for cell in row {
                let ch = match cell.color {
                    Some(c) => GLYPHS[c as usize % GLYPHS.len()] as char,
                    None => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
