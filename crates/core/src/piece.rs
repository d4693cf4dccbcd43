//! Piece module - the live falling tetromino
//!
//! A [`Piece`] owns its shape matrix, color index and anchor, plus a cached
//! list of absolute cell coordinates. Every mutation goes through a method
//! that recomputes the cache, so `cells()` is always consistent with
//! `(shape, anchor)`.
//!
//! Pieces never write to the grid. They validate candidate positions
//! against it, treating their own current footprint as free, and the grid
//! reflects the result (see [`Grid::move_piece`](crate::grid::Grid::move_piece)).

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::shape::{Shape, KICK_OFFSETS, MAX_SHAPE_CELLS};
use crate::types::{Cell, Palette, PieceKind};

/// Absolute grid coordinate. Rows grow downward, columns grow rightward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn offset(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }
}

/// Absolute coordinates of a piece's occupied cells
pub type PieceCells = ArrayVec<Pos, MAX_SHAPE_CELLS>;

/// Active falling piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: Cell,
    shape: Shape,
    anchor: Pos,
    cells: PieceCells,
}

impl Piece {
    /// Build a piece of `kind` at its spawn anchor for a grid `cols` wide.
    ///
    /// `color` is a palette color name. An unknown name, or none, picks a
    /// uniformly random palette color instead.
    pub fn new<R: RandomSource + ?Sized>(
        kind: PieceKind,
        color: Option<&str>,
        palette: &Palette,
        cols: usize,
        rng: &mut R,
    ) -> Self {
        let color = color
            .and_then(|name| palette.index_of(name))
            .unwrap_or_else(|| random_color(palette, rng));
        Self::with_color_index(kind, color, cols)
    }

    /// Random kind with a random color
    pub fn random<R: RandomSource + ?Sized>(palette: &Palette, cols: usize, rng: &mut R) -> Self {
        let kind = PieceKind::ALL[rng.next_below(PieceKind::ALL.len())];
        Self::new(kind, None, palette, cols, rng)
    }

    /// Build a piece with an explicit 1-based palette index.
    pub fn with_color_index(kind: PieceKind, color: Cell, cols: usize) -> Self {
        let shape = Shape::for_kind(kind, color);
        let anchor = spawn_anchor(&shape, cols);
        let mut piece = Self {
            kind,
            color,
            shape,
            anchor,
            cells: PieceCells::new(),
        };
        piece.recompute_cells();
        piece
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Cell {
        self.color
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn anchor(&self) -> Pos {
        self.anchor
    }

    /// Absolute coordinates of the occupied cells
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    /// Rebuild the cached coordinates from shape and anchor.
    pub fn recompute_cells(&mut self) {
        self.cells = cells_at(&self.shape, self.anchor);
    }

    /// True iff every candidate is on the grid and on a free cell.
    ///
    /// Cells listed in `ignore` count as free, which lets a piece that is
    /// already reflected in the grid move through its own footprint.
    pub fn validate_move(candidate: &[Pos], grid: &Grid, ignore: &[Pos]) -> bool {
        candidate.iter().all(|&pos| grid.is_free(pos, ignore))
    }

    /// Whether this piece, unchanged in shape, would fit at `anchor`.
    ///
    /// Its own footprint is not ignored: this is the spawn check.
    pub fn fits_at(&self, anchor: Pos, grid: &Grid) -> bool {
        Self::validate_move(&cells_at(&self.shape, anchor), grid, &[])
    }

    /// Translate by `dx` columns and `dy` rows if the target is valid.
    pub fn try_move(&mut self, dx: i32, dy: i32, grid: &Grid) -> bool {
        let candidate: PieceCells = self.cells.iter().map(|p| p.offset(dy, dx)).collect();
        if !Self::validate_move(&candidate, grid, &self.cells) {
            return false;
        }
        self.anchor = self.anchor.offset(dy, dx);
        self.cells = candidate;
        true
    }

    /// Rotate 90° clockwise, trying each kick offset in order.
    ///
    /// Returns false and leaves the piece untouched if no offset fits.
    pub fn rotate(&mut self, grid: &Grid) -> bool {
        let rotated = self.shape.rotated_cw();
        for &(drow, dcol) in KICK_OFFSETS.iter() {
            let anchor = self.anchor.offset(drow, dcol);
            let candidate = cells_at(&rotated, anchor);
            if Self::validate_move(&candidate, grid, &self.cells) {
                self.shape = rotated;
                self.anchor = anchor;
                self.cells = candidate;
                return true;
            }
        }
        false
    }

    /// Move down until the next step would be invalid. Returns rows dropped.
    pub fn drop_to_bottom(&mut self, grid: &Grid) -> u32 {
        let mut rows = 0;
        while self.try_move(0, 1, grid) {
            rows += 1;
        }
        rows
    }

    pub(crate) fn set_anchor(&mut self, anchor: Pos) {
        self.anchor = anchor;
        self.recompute_cells();
    }
}

/// Top row, horizontally centered (rounding left)
fn spawn_anchor(shape: &Shape, cols: usize) -> Pos {
    Pos::new(0, (cols.saturating_sub(shape.width()) / 2) as i32)
}

fn cells_at(shape: &Shape, anchor: Pos) -> PieceCells {
    shape
        .occupied()
        .map(|(r, c)| anchor.offset(r as i32, c as i32))
        .collect()
}

fn random_color<R: RandomSource + ?Sized>(palette: &Palette, rng: &mut R) -> Cell {
    (rng.next_below(palette.color_count()) + 1) as Cell
}
