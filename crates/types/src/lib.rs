//! Shared types module - data structures and constants used by every crate
//!
//! Everything here is plain data with no game logic, so the core, the input
//! mapping and the terminal view can all agree on the same vocabulary.
//!
//! # Grid Dimensions
//!
//! Canonical playfield dimensions (overridable through `GameConfig`):
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Cols**: 10 (indexed 0-9, left to right)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_MS` | 1000 | Interval between gravity steps |
//! | `FRAME_MS` | 16 | Redraw / input poll interval (~60 FPS) |
//!
//! # Cells and Colors
//!
//! A grid cell is a [`Cell`]: `0` is empty, `1..=N` is the 1-based index of
//! a [`PALETTE`] color. The palette is the only color table in the program.
//!
//! # Examples
//!
//! ```
//! use blocktris_types::{PieceKind, PALETTE, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//!
//! // Palette indices are 1-based, 0 means empty.
//! assert_eq!(PALETTE.index_of("red"), Some(1));
//! assert_eq!(PALETTE.color(5).map(|c| c.name), Some("yellow"));
//! assert_eq!(PALETTE.color(0), None);
//!
//! assert_eq!(DEFAULT_ROWS, 20);
//! assert_eq!(DEFAULT_COLS, 10);
//! ```

use serde::Serialize;

/// Default grid height in rows
pub const DEFAULT_ROWS: usize = 20;

/// Default grid width in columns
pub const DEFAULT_COLS: usize = 10;

/// Smallest grid edge that still fits every shape in every orientation
pub const MIN_GRID_EDGE: usize = 4;

/// Gravity interval (1000ms = one row per second)
pub const GRAVITY_MS: u32 = 1000;

/// Frame interval for redraw and input polling (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Highest column tried when the default spawn anchor is blocked.
///
/// Alternate anchors are scanned from column 0 up to and including this one.
pub const SPAWN_SCAN_MAX_COL: i32 = 6;

/// Line clear scoring table, indexed by rows cleared in one pass
///
/// - 0 rows: 0 points
/// - 1 row: 40 points
/// - 2 rows: 100 points
/// - 3 rows: 300 points
/// - 4 rows: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// A cell on the grid: `EMPTY` or a 1-based palette index
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A named palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub rgb: Rgb,
}

/// Ordered, immutable color table
///
/// Index `i` (1-based) of a grid cell selects `colors[i - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: &'static [PaletteColor],
}

/// The game palette: red, green, blue, purple, yellow
pub const PALETTE: Palette = Palette {
    colors: &[
        PaletteColor {
            name: "red",
            rgb: Rgb::new(220, 60, 60),
        },
        PaletteColor {
            name: "green",
            rgb: Rgb::new(80, 200, 100),
        },
        PaletteColor {
            name: "blue",
            rgb: Rgb::new(70, 110, 230),
        },
        PaletteColor {
            name: "purple",
            rgb: Rgb::new(160, 80, 200),
        },
        PaletteColor {
            name: "yellow",
            rgb: Rgb::new(240, 210, 70),
        },
    ],
};

impl Palette {
    /// Number of colors (the highest valid cell value)
    pub const fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// 1-based index of a color by name (case-insensitive)
    pub fn index_of(&self, name: &str) -> Option<Cell> {
        self.colors
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
            .map(|i| (i + 1) as Cell)
    }

    /// Look up a color by 1-based cell value. `EMPTY` and out-of-range values yield `None`.
    pub fn color(&self, index: Cell) -> Option<&PaletteColor> {
        let i = (index as usize).checked_sub(1)?;
        self.colors.get(i)
    }

    /// Whether `cell` is a legal grid value for this palette
    pub fn is_valid_cell(&self, cell: Cell) -> bool {
        (cell as usize) <= self.colors.len()
    }
}

/// The seven tetromino shape templates
///
/// Templates are row-major 0/1 matrices, top row first:
///
/// ```text
/// I  ####      O  ##     T  .#.    J  #..    L  ..#    S  .##    Z  ##.
///               ##          ###       ###       ###       ##.       .##
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in template order (the order random selection indexes into)
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// The 0/1 template for this kind
    pub fn template(&self) -> &'static [&'static [u8]] {
        match self {
            PieceKind::I => &[&[1, 1, 1, 1]],
            PieceKind::O => &[&[1, 1], &[1, 1]],
            PieceKind::T => &[&[0, 1, 0], &[1, 1, 1]],
            PieceKind::J => &[&[1, 0, 0], &[1, 1, 1]],
            PieceKind::L => &[&[0, 0, 1], &[1, 1, 1]],
            PieceKind::S => &[&[0, 1, 1], &[1, 1, 0]],
            PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
        }
    }
}

/// Player actions that drive the live piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down
    MoveDown,
    /// Rotate piece 90° clockwise (with kick fallback)
    Rotate,
    /// Drop piece to the lowest valid row
    HardDrop,
}

/// Event emitted by the session when a piece locks or the game ends.
///
/// Serialized as one JSON object per line by the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A piece locked; `points` were added for `rows_cleared` rows.
    Locked {
        kind: PieceKind,
        rows_cleared: u32,
        points: u32,
        score: u32,
    },
    /// No room to spawn the next piece. Emitted once per session.
    GameOver { score: u32 },
}
