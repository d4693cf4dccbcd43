//! Grid module - the cell matrix, score and alive flag
//!
//! The grid is `rows x cols` cells in a flat row-major `Vec`. A cell is
//! `EMPTY` or a 1-based palette index. Coordinates are `(row, col)` with
//! row 0 at the top.
//!
//! The live piece is reflected in the matrix. All writes of piece cells go
//! through this type, and [`Grid::move_piece`] clears the old footprint and
//! stamps the new one in a single call.

use arrayvec::ArrayVec;

use crate::piece::{Piece, PieceCells, Pos};
use crate::types::{Cell, Palette, EMPTY, LINE_SCORES, PALETTE, SPAWN_SCAN_MAX_COL};

/// Most rows a single clearing pass removes (the tallest piece is 4 rows)
pub const MAX_ROWS_PER_CLEAR: usize = LINE_SCORES.len() - 1;

/// Result of one row-clearing pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineClear {
    /// Indices of the removed rows, top to bottom (pre-clear numbering)
    pub rows: ArrayVec<usize, MAX_ROWS_PER_CLEAR>,
    /// Points added by this pass
    pub points: u32,
    /// Running total after this pass
    pub score: u32,
}

impl LineClear {
    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

/// The game grid
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
    palette: Palette,
    score: u32,
    alive: bool,
}

impl Grid {
    /// Create an empty grid using the game palette
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_palette(rows, cols, PALETTE)
    }

    pub fn with_palette(rows: usize, cols: usize, palette: Palette) -> Self {
        Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
            palette,
            score: 0,
            alive: true,
        }
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_game_over(&self) -> bool {
        !self.alive
    }

    /// Cell at (row, col), `None` if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set cell at (row, col).
    /// Returns false if out of bounds or `cell` is not a palette value.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        if !self.palette.is_valid_cell(cell) {
            return false;
        }
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_in_bounds(&self, pos: Pos) -> bool {
        self.index(pos.row, pos.col).is_some()
    }

    /// In bounds and either empty or one of the `ignore` cells
    pub fn is_free(&self, pos: Pos, ignore: &[Pos]) -> bool {
        match self.get(pos.row, pos.col) {
            Some(EMPTY) => true,
            Some(_) => ignore.contains(&pos),
            None => false,
        }
    }

    /// Row slice, `None` if out of range
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// A row is complete when none of its cells are empty
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|&c| c != EMPTY))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the piece's color at each of its cells.
    ///
    /// Returns false, writing nothing, if any cell is out of bounds.
    pub fn place_piece(&mut self, piece: &Piece) -> bool {
        if !piece.cells().iter().all(|&p| self.is_in_bounds(p)) {
            return false;
        }
        self.write_cells(piece.cells(), piece.color());
        true
    }

    /// Place a freshly built piece.
    ///
    /// Tries the piece's own spawn anchor, then row-0 anchors at columns
    /// `0..=SPAWN_SCAN_MAX_COL` in increasing order. If none fits, the grid
    /// is marked not alive and false is returned.
    pub fn place_spawn(&mut self, piece: &mut Piece) -> bool {
        if !self.alive {
            return false;
        }

        let default = piece.anchor();
        let candidates =
            std::iter::once(default).chain((0..=SPAWN_SCAN_MAX_COL).map(|col| Pos::new(default.row, col)));

        for anchor in candidates {
            if piece.fits_at(anchor, self) {
                piece.set_anchor(anchor);
                self.write_cells(piece.cells(), piece.color());
                return true;
            }
        }

        self.alive = false;
        false
    }

    /// Reset the piece's current cells to empty.
    pub fn clear_piece_cells(&mut self, piece: &Piece) {
        self.write_cells(piece.cells(), EMPTY);
    }

    /// Run a piece transform and reflect it in the matrix.
    ///
    /// `op` sees the grid with the piece still stamped in; pieces validate
    /// against it ignoring their own footprint. When `op` returns true the
    /// old footprint is cleared and the new one stamped before returning.
    pub fn move_piece(&mut self, piece: &mut Piece, op: impl FnOnce(&mut Piece, &Grid) -> bool) -> bool {
        let before: PieceCells = piece.cells().iter().copied().collect();
        if !op(piece, self) {
            return false;
        }
        self.write_cells(&before, EMPTY);
        self.write_cells(piece.cells(), piece.color());
        true
    }

    /// Remove complete rows in one pass and score it.
    ///
    /// Remaining rows keep their order and drop down; as many empty rows as
    /// were removed appear at the top. Uses a two-pointer compaction with
    /// `copy_within` (no allocation).
    ///
    /// At most [`MAX_ROWS_PER_CLEAR`] rows are removed, the lowest first.
    /// Any further full rows stay in place for the next pass.
    pub fn clear_completed_rows(&mut self) -> LineClear {
        let mut rows = ArrayVec::<usize, MAX_ROWS_PER_CLEAR>::new();
        let width = self.cols;
        let mut write_row = self.rows;

        // Scan from bottom to top
        for read_row in (0..self.rows).rev() {
            if !rows.is_full() && self.is_row_full(read_row) {
                rows.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    self.cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        // Clear the vacated rows at the top
        self.cells[..write_row * width].fill(EMPTY);

        rows.reverse();
        let points = LINE_SCORES[rows.len()];
        self.score = self.score.saturating_add(points);

        LineClear {
            rows,
            points,
            score: self.score,
        }
    }

    fn write_cells(&mut self, cells: &[Pos], value: Cell) {
        for &p in cells {
            if let Some(i) = self.index(p.row, p.col) {
                self.cells[i] = value;
            }
        }
    }

    /// Build a grid from rows of cells, for tests and fixtures.
    ///
    /// # Panics
    ///
    /// If rows are ragged or a value is outside the palette.
    pub fn from_rows(rows: &[&[Cell]]) -> Self {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut grid = Self::new(rows.len(), cols);
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "ragged row {}", r);
            for (c, &cell) in row.iter().enumerate() {
                assert!(grid.set(r as i32, c as i32, cell), "bad cell {} at ({}, {})", cell, r, c);
            }
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_ROWS, crate::types::DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(20, 10);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(0, 9), Some(9));
        assert_eq!(grid.index(1, 0), Some(10));
        assert_eq!(grid.index(19, 9), Some(199));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(0, 10), None);
        assert_eq!(grid.index(20, 0), None);
    }

    #[test]
    fn test_set_rejects_values_outside_palette() {
        let mut grid = Grid::new(4, 4);
        assert!(grid.set(0, 0, 5));
        assert!(!grid.set(0, 0, 6));
        assert_eq!(grid.get(0, 0), Some(5));
    }

    #[test]
    fn test_move_piece_keeps_matrix_in_sync() {
        let mut grid = Grid::new(20, 10);
        let mut piece = Piece::with_color_index(PieceKind::O, 2, 10);
        assert!(grid.place_spawn(&mut piece));

        assert!(grid.move_piece(&mut piece, |p, g| p.try_move(0, 1, g)));
        assert_eq!(grid.get(0, 4), Some(EMPTY));
        assert_eq!(grid.get(1, 4), Some(2));
        assert_eq!(grid.get(2, 5), Some(2));
        assert_eq!(grid.cells().iter().filter(|&&c| c != EMPTY).count(), 4);
    }

    #[test]
    fn test_move_piece_failure_leaves_matrix() {
        let mut grid = Grid::new(20, 10);
        let mut piece = Piece::with_color_index(PieceKind::O, 2, 10);
        assert!(grid.place_spawn(&mut piece));
        let before = grid.clone();

        assert!(!grid.move_piece(&mut piece, |p, g| p.try_move(0, -1, g)));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_clear_piece_cells() {
        let mut grid = Grid::new(20, 10);
        let piece = Piece::with_color_index(PieceKind::T, 1, 10);
        assert!(grid.place_piece(&piece));
        grid.clear_piece_cells(&piece);
        assert!(grid.cells().iter().all(|&c| c == EMPTY));
    }

    #[test]
    fn test_cleared_rows_are_reported_top_to_bottom() {
        let mut grid = Grid::from_rows(&[
            &[0, 0, 0],
            &[1, 1, 1],
            &[0, 2, 0],
            &[3, 3, 3],
        ]);
        let clear = grid.clear_completed_rows();
        assert_eq!(clear.rows.as_slice(), &[1, 3]);
        assert_eq!(clear.points, 100);
        assert_eq!(grid.row(3), Some(&[0, 2, 0][..]));
    }

    #[test]
    fn test_clear_removes_at_most_four_rows_per_pass() {
        let mut grid = Grid::new(6, 4);
        for row in 1..6 {
            for col in 0..4 {
                grid.set(row, col, 2);
            }
        }

        let clear = grid.clear_completed_rows();
        assert_eq!(clear.rows.as_slice(), &[2, 3, 4, 5]);
        assert_eq!(clear.points, 1200);
        // The fifth full row dropped to the bottom, untouched.
        assert!(grid.is_row_full(5));
        assert_eq!(grid.cells().iter().filter(|&&c| c != EMPTY).count(), 4);

        let clear = grid.clear_completed_rows();
        assert_eq!(clear.count(), 1);
        assert_eq!(clear.score, 1240);
        assert!(grid.cells().iter().all(|&c| c == EMPTY));
    }
}
