use serde::Serialize;

use crate::board::Board;

/// Compact, serializable view of a settled board
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BoardSnapshot {
    pub size: u8,
    pub color_count: u8,
    /// Row-major colors; `u8::MAX` marks an empty cell
    pub colors: Vec<u8>,
    /// FNV-1a 64 over `colors`
    pub board_hash: u64,
}

impl BoardSnapshot {
    pub fn capture(board: &Board) -> Self {
        let colors: Vec<u8> = board
            .cells()
            .iter()
            .map(|c| c.color.unwrap_or(u8::MAX))
            .collect();
        let board_hash = fnv1a64(colors.iter().copied());
        Self {
            size: board.size(),
            color_count: board.color_count(),
            colors,
            board_hash,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.colors.chunks(self.size as usize)
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self::capture(board)
    }
}

fn fnv1a64(bytes: impl Iterator<Item = u8>) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}
