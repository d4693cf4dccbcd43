//! Game configuration: grid size, gravity, seed, palette.

use crate::types::{Palette, DEFAULT_COLS, DEFAULT_ROWS, GRAVITY_MS, MIN_GRID_EDGE, PALETTE};

/// Session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub gravity_ms: u32,
    /// RNG seed; `None` lets the binary pick one from the clock
    pub seed: Option<u32>,
    /// The single color table shared by pieces, grid and view
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            gravity_ms: GRAVITY_MS,
            seed: None,
            palette: PALETTE,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `BLOCKTRIS_ROWS`, `BLOCKTRIS_COLS`: grid size (min 4)
    /// - `BLOCKTRIS_GRAVITY_MS`: gravity interval (min 1)
    /// - `BLOCKTRIS_SEED`: RNG seed (must fit in a `u32`)
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        let rows = parsed("BLOCKTRIS_ROWS")
            .map(|v| v as usize)
            .unwrap_or(defaults.rows);
        let cols = parsed("BLOCKTRIS_COLS")
            .map(|v| v as usize)
            .unwrap_or(defaults.cols);
        let gravity_ms = parsed("BLOCKTRIS_GRAVITY_MS")
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(defaults.gravity_ms);
        let seed = parsed("BLOCKTRIS_SEED").and_then(|v| u32::try_from(v).ok());

        Self {
            rows,
            cols,
            gravity_ms,
            seed,
            palette: defaults.palette,
        }
        .normalized()
    }

    /// Clamp values into the ranges the core relies on.
    pub fn normalized(mut self) -> Self {
        self.rows = self.rows.max(MIN_GRID_EDGE);
        self.cols = self.cols.max(MIN_GRID_EDGE);
        self.gravity_ms = self.gravity_ms.max(1);
        self
    }
}
