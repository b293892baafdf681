//! Cascade step - removal, gravity and backfill
//!
//! One resolution pass is: empty the matched cells, let every column fall,
//! then refill the vacated top rows from the tile source. Columns are
//! independent. A tile that falls `k` rows keeps `drop_offset = -k` so the
//! renderer can animate it; backfilled tiles fall from above the board by the
//! number of cells their column lost.

use arrayvec::ArrayVec;

use crate::board::{Board, Cell};
use crate::matcher::MatchMask;
use crate::rng::TileSource;
use crate::types::{Position, MAX_GRID_SIZE};

/// Empty every marked cell; returns how many cells were newly emptied
pub fn clear_matched(board: &mut Board, mask: &MatchMask) -> u32 {
    let mut removed = 0;
    for pos in mask.positions() {
        let cell = board.cell_mut(pos);
        if !cell.is_empty() {
            *cell = Cell::EMPTY;
            removed += 1;
        }
    }
    removed
}

/// Compact each column downward and backfill its top.
///
/// Uses a bottom-up two-pointer pass per column with a stack buffer, then
/// draws fresh tiles for rows `0..vacated` in top-down order, left column
/// first. Returns the number of tiles generated.
pub fn collapse_and_refill<T>(board: &mut Board, tiles: &mut T) -> u32
where
    T: TileSource + ?Sized,
{
    let n = board.size();
    let colors = board.color_count();
    let mut generated = 0u32;

    for col in 0..n {
        // Survivors bottom to top, remembering where each came from.
        let mut survivors: ArrayVec<(u8, u8), { MAX_GRID_SIZE as usize }> = ArrayVec::new();
        for row in (0..n).rev() {
            let pos = Position::new(row, col);
            if let Some(color) = board.color_at(pos) {
                survivors.push((row, color));
            }
        }

        let mut write_row = n;
        for &(from_row, color) in &survivors {
            write_row -= 1;
            *board.cell_mut(Position::new(write_row, col)) = Cell {
                color: Some(color),
                drop_offset: -((write_row - from_row) as i16),
            };
        }

        let vacated = write_row;
        for row in 0..vacated {
            *board.cell_mut(Position::new(row, col)) = Cell {
                color: Some(tiles.next_tile(colors)),
                drop_offset: -(vacated as i16),
            };
            generated += 1;
        }
    }

    generated
}
