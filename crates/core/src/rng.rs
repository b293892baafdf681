//! RNG module - tile generation policy
//!
//! Every tile the engine creates (initial fill, re-rolls, backfill) is drawn
//! from a caller-supplied [`TileSource`]. Draws are independent and uniform;
//! nothing steers a draw away from forming a match, which is what lets a
//! backfill start a chain.
//!
//! Also provides a simple LCG for deterministic play and a scripted source
//! for engineered boards.

use rand::{Rng, RngCore};

/// Anything that can produce tile colors
pub trait TileSource {
    /// Next color in `[0, color_count)`
    fn next_tile(&mut self, color_count: u8) -> u8;
}

impl<R: RngCore> TileSource for R {
    fn next_tile(&mut self, color_count: u8) -> u8 {
        self.gen_range(0..color_count)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    fn step(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RngCore for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // The low bits of a power-of-two LCG cycle quickly; hand out the high half.
        let hi = self.step() >> 16;
        let lo = self.step() >> 16;
        (hi << 16) | lo
    }

    fn next_u64(&mut self) -> u64 {
        ((self.next_u32() as u64) << 32) | self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Replays a fixed color sequence, wrapping around at the end
///
/// Colors are reduced modulo the requested palette so a script never yields
/// an out-of-range tile.
#[derive(Debug, Clone)]
pub struct ScriptedTiles {
    colors: Vec<u8>,
    cursor: usize,
}

impl ScriptedTiles {
    /// Create a scripted source.
    ///
    /// # Panics
    ///
    /// Panics if `colors` is empty.
    pub fn new(colors: impl Into<Vec<u8>>) -> Self {
        let colors = colors.into();
        assert!(!colors.is_empty(), "scripted tile sequence must not be empty");
        Self { colors, cursor: 0 }
    }

    /// Number of tiles handed out so far
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl TileSource for ScriptedTiles {
    fn next_tile(&mut self, color_count: u8) -> u8 {
        let color = self.colors[self.cursor % self.colors.len()];
        self.cursor += 1;
        color % color_count
    }
}
