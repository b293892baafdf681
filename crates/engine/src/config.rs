//! Session configuration
//!
//! Defaults reproduce the reference puzzle: 6x6 grid, 6 colors, one minute of
//! play after a 3-2-1-GO countdown.

use tile_cascade_core::error::{check_dimensions, Result};
use tile_cascade_core::types::{
    DEFAULT_COLOR_COUNT, DEFAULT_COUNTDOWN_MS, DEFAULT_DURATION_MS, DEFAULT_GRID_SIZE,
};

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub grid_size: u8,
    pub color_count: u8,
    pub duration_ms: u32,
    pub countdown_ms: u32,
    pub seed: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            color_count: DEFAULT_COLOR_COUNT,
            duration_ms: DEFAULT_DURATION_MS,
            countdown_ms: DEFAULT_COUNTDOWN_MS,
            seed: 1,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    ///
    /// - `CASCADE_GRID_SIZE`, `CASCADE_COLORS`
    /// - `CASCADE_DURATION_MS`, `CASCADE_COUNTDOWN_MS`
    /// - `CASCADE_SEED`
    ///
    /// Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        use std::env;

        fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
            env::var(key).ok().and_then(|s| s.trim().parse().ok())
        }

        let defaults = Self::default();
        Self {
            grid_size: parsed("CASCADE_GRID_SIZE").unwrap_or(defaults.grid_size),
            color_count: parsed("CASCADE_COLORS").unwrap_or(defaults.color_count),
            duration_ms: parsed("CASCADE_DURATION_MS").unwrap_or(defaults.duration_ms),
            countdown_ms: parsed("CASCADE_COUNTDOWN_MS").unwrap_or(defaults.countdown_ms),
            seed: parsed("CASCADE_SEED").unwrap_or(defaults.seed),
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Check grid parameters before a board is built
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.grid_size, self.color_count)
    }
}
