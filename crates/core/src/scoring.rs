//! Scoring module - chain-weighted cascade scoring
//!
//! Each resolution pass scores by tiles removed, not by matches found:
//! `removed * BASE_POINTS * min(depth, MAX_CHAIN_MULTIPLIER)`.
//! A five-long run scores the same as five tiles spread over two runs.

use crate::types::{BASE_POINTS, MAX_CHAIN_MULTIPLIER};

/// Multiplier for the pass at `depth` (1-based), capped at ×5
pub fn chain_multiplier(depth: u32) -> u32 {
    depth.clamp(1, MAX_CHAIN_MULTIPLIER)
}

/// Points for one resolution pass
pub fn pass_score(removed: u32, depth: u32) -> u32 {
    removed
        .saturating_mul(BASE_POINTS)
        .saturating_mul(chain_multiplier(depth))
}

/// Chain count shown to players: the first pass is not itself a chain
pub fn display_chain(max_depth: u32) -> u32 {
    max_depth.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_caps_at_five() {
        assert_eq!(chain_multiplier(1), 1);
        assert_eq!(chain_multiplier(4), 4);
        assert_eq!(chain_multiplier(5), 5);
        assert_eq!(chain_multiplier(6), 5);
        assert_eq!(chain_multiplier(40), 5);
    }

    #[test]
    fn test_pass_scores() {
        assert_eq!(pass_score(3, 1), 30);
        assert_eq!(pass_score(4, 2), 80);
        assert_eq!(pass_score(3, 5), 150);
        assert_eq!(pass_score(3, 6), 150);
        assert_eq!(pass_score(0, 3), 0);
    }

    #[test]
    fn test_two_pass_chain_total() {
        assert_eq!(pass_score(3, 1) + pass_score(4, 2), 110);
    }

    #[test]
    fn test_display_chain() {
        assert_eq!(display_chain(0), 0);
        assert_eq!(display_chain(1), 0);
        assert_eq!(display_chain(3), 2);
    }
}
