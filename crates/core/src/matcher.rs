//! Match detection
//!
//! A match is a maximal run of at least [`MIN_MATCH_LEN`] identical, non-empty
//! tiles in a single row or column. Rows and columns are scanned
//! independently with a run-length pass, so one scan is O(size²).
//! Overlapping runs (an L or T shape) are reported separately and merged by
//! [`MatchMask`], which is what removal works from.

use serde::Serialize;

use crate::board::Board;
use crate::types::{Axis, Position, MIN_MATCH_LEN};

/// A maximal run of identical tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Match {
    pub axis: Axis,
    /// Leftmost (row axis) or topmost (column axis) cell
    pub start: Position,
    pub len: u8,
    pub color: u8,
}

impl Match {
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len).map(move |i| self.start.offset(self.axis, i))
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions().any(|p| p == pos)
    }
}

/// Set union of matched positions, one flag per cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchMask {
    size: u8,
    marked: Vec<bool>,
    count: u32,
}

impl MatchMask {
    pub fn new(size: u8) -> Self {
        let n = size as usize;
        Self {
            size,
            marked: vec![false; n * n],
            count: 0,
        }
    }

    /// Build the deduplicated mask for a batch of matches
    pub fn from_matches(size: u8, matches: &[Match]) -> Self {
        let mut mask = Self::new(size);
        for m in matches {
            for pos in m.positions() {
                mask.mark(pos);
            }
        }
        mask
    }

    /// Mark a position; returns false if it was already marked
    pub fn mark(&mut self, pos: Position) -> bool {
        let idx = pos.row as usize * self.size as usize + pos.col as usize;
        if self.marked[idx] {
            return false;
        }
        self.marked[idx] = true;
        self.count += 1;
        true
    }

    pub fn is_marked(&self, pos: Position) -> bool {
        pos.in_bounds(self.size)
            && self.marked[pos.row as usize * self.size as usize + pos.col as usize]
    }

    /// Number of distinct marked cells
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Marked positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.marked
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(move |(idx, _)| Position::from_index(idx, self.size))
    }
}

/// Scan one line of the board and report its runs.
///
/// `at(i)` yields the color of the i-th cell along the line.
fn scan_line(
    len: u8,
    axis: Axis,
    origin: impl Fn(u8) -> Position,
    at: impl Fn(u8) -> Option<u8>,
    out: &mut Vec<Match>,
) {
    let mut start = 0u8;
    while start < len {
        let color = at(start);
        let mut end = start + 1;
        if let Some(c) = color {
            while end < len && at(end) == Some(c) {
                end += 1;
            }
            let run = end - start;
            if run >= MIN_MATCH_LEN {
                out.push(Match {
                    axis,
                    start: origin(start),
                    len: run,
                    color: c,
                });
            }
        }
        start = end;
    }
}

/// Find every match on the board: rows top to bottom, then columns left to right
pub fn find_matches(board: &Board) -> Vec<Match> {
    let mut out = Vec::new();
    let n = board.size();

    for row in 0..n {
        scan_line(
            n,
            Axis::Row,
            |i| Position::new(row, i),
            |i| board.color_at(Position::new(row, i)),
            &mut out,
        );
    }
    for col in 0..n {
        scan_line(
            n,
            Axis::Column,
            |i| Position::new(i, col),
            |i| board.color_at(Position::new(i, col)),
            &mut out,
        );
    }
    out
}

/// Cheap check for any live match without collecting runs
pub fn has_match(board: &Board) -> bool {
    let n = board.size();
    let run_at = |a: Position, b: Position, c: Position| match board.color_at(a) {
        Some(color) => board.color_at(b) == Some(color) && board.color_at(c) == Some(color),
        None => false,
    };

    for row in 0..n {
        for col in 0..n {
            let p = Position::new(row, col);
            if col + 2 < n && run_at(p, p.offset(Axis::Row, 1), p.offset(Axis::Row, 2)) {
                return true;
            }
            if row + 2 < n && run_at(p, p.offset(Axis::Column, 1), p.offset(Axis::Column, 2)) {
                return true;
            }
        }
    }
    false
}

/// Every orthogonal swap that would create at least one match, row-major.
///
/// Used for hints and by automated players; an empty result means the board
/// has no productive move left.
pub fn productive_swaps(board: &Board) -> Vec<(Position, Position)> {
    let n = board.size();
    let mut probe = board.clone();
    let mut out = Vec::new();

    for row in 0..n {
        for col in 0..n {
            let a = Position::new(row, col);
            for axis in [Axis::Row, Axis::Column] {
                let b = a.offset(axis, 1);
                if !board.contains(b) || board.color_at(a) == board.color_at(b) {
                    continue;
                }
                probe.swap_cells(a, b);
                if has_match(&probe) {
                    out.push((a, b));
                }
                probe.swap_cells(a, b);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(literal: &str, colors: u8) -> Board {
        let rows: Vec<Vec<u8>> = literal
            .split_whitespace()
            .map(|r| r.bytes().map(|b| b - b'0').collect())
            .collect();
        Board::from_color_rows(&rows, colors).unwrap()
    }

    #[test]
    fn test_no_matches_on_diagonal_pattern() {
        let b = board("012012 120120 201201 012012 120120 201201", 3);
        assert!(find_matches(&b).is_empty());
        assert!(!has_match(&b));
    }

    #[test]
    fn test_row_run_is_one_match_regardless_of_length() {
        let b = board("00001 12120 21212 12121 21210", 3);
        let matches = find_matches(&b);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].axis, Axis::Row);
        assert_eq!(matches[0].start, Position::new(0, 0));
        assert_eq!(matches[0].len, 4);
        assert_eq!(matches[0].color, 0);
        assert!(has_match(&b));
    }

    #[test]
    fn test_column_run_at_bottom_edge() {
        let b = board("012 102 212", 3);
        let matches = find_matches(&b);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].axis, Axis::Column);
        assert_eq!(matches[0].start, Position::new(0, 2));
        assert_eq!(matches[0].len, 3);
    }

    #[test]
    fn test_overlapping_runs_are_deduplicated() {
        // T shape: row 0 cols 0..3 and column 1 rows 0..3 share (0, 1)
        let b = board("111 010 212", 3);
        let matches = find_matches(&b);
        assert_eq!(matches.len(), 2);

        let mask = MatchMask::from_matches(3, &matches);
        assert_eq!(mask.count(), 5);
        assert!(mask.is_marked(Position::new(0, 1)));
        assert!(!mask.is_marked(Position::new(1, 0)));
        assert_eq!(mask.positions().count(), 5);
    }

    #[test]
    fn test_match_positions() {
        let m = Match {
            axis: Axis::Column,
            start: Position::new(1, 4),
            len: 3,
            color: 2,
        };
        let cells: Vec<_> = m.positions().collect();
        assert_eq!(
            cells,
            vec![Position::new(1, 4), Position::new(2, 4), Position::new(3, 4)]
        );
        assert!(m.contains(Position::new(2, 4)));
        assert!(!m.contains(Position::new(4, 4)));
    }

    #[test]
    fn test_productive_swaps() {
        // Swapping (0, 2) down brings a third 0 into row 0
        let b = board("001 120 201", 3);
        assert!(!has_match(&b));
        let swaps = productive_swaps(&b);
        assert!(swaps.contains(&(Position::new(0, 2), Position::new(1, 2))));
        for (a, c) in swaps {
            assert!(a.is_adjacent(c));
        }

        let stuck = board("012 120 201", 3);
        assert!(productive_swaps(&stuck).is_empty());
    }

    #[test]
    fn test_two_runs_in_one_row() {
        let b = board("000111 121212 212121 121212 212121 121212", 3);
        let matches: Vec<_> = find_matches(&b)
            .into_iter()
            .filter(|m| m.axis == Axis::Row)
            .collect();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[1].start, Position::new(0, 3));
        assert_eq!(matches[1].color, 1);
    }
}
