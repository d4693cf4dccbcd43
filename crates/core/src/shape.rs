//! Shape module - piece matrices, clockwise rotation and the kick table
//!
//! A [`Shape`] is a small row-major matrix of cells: `EMPTY` or the piece's
//! color index. Shapes are built by stamping a color onto a
//! [`PieceKind`] template and rotated by transposing then reversing each row.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, EMPTY};

/// Largest shape matrix (4x4)
pub const MAX_SHAPE_CELLS: usize = 16;

/// Offsets `(row, col)` tried, in order, when placing a rotated shape:
/// no offset, one column right, one column left, one row down, one row up.
///
/// The same list is used for every orientation (no per-state kick data).
pub const KICK_OFFSETS: [(i32, i32); 5] = [(0, 0), (0, 1), (0, -1), (1, 0), (-1, 0)];

/// Row-major matrix of `EMPTY` / color cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    height: usize,
    width: usize,
    cells: ArrayVec<Cell, MAX_SHAPE_CELLS>,
}

impl Shape {
    /// Stamp `color` onto every `1` of a 0/1 template.
    ///
    /// Ragged template rows are padded with empty cells.
    ///
    /// # Panics
    ///
    /// If the template is larger than 16 cells.
    pub fn from_template(template: &[&[u8]], color: Cell) -> Self {
        let height = template.len();
        let width = template.iter().map(|row| row.len()).max().unwrap_or(0);
        assert!(
            height * width <= MAX_SHAPE_CELLS,
            "template {}x{} exceeds shape capacity",
            height,
            width
        );

        let mut cells = ArrayVec::new();
        for row in template {
            for col in 0..width {
                let value = row.get(col).copied().unwrap_or(0);
                cells.push(if value == 1 { color } else { EMPTY });
            }
        }

        Self {
            height,
            width,
            cells,
        }
    }

    /// Shape for a piece kind in spawn orientation
    pub fn for_kind(kind: PieceKind, color: Cell) -> Self {
        Self::from_template(kind.template(), color)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell at (row, col), `None` outside the matrix
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Offsets `(row, col)` of every occupied cell, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell != EMPTY)
            .map(move |(i, _)| (i / width, i % width))
    }

    /// The shape rotated 90° clockwise.
    ///
    /// Transpose, then reverse each row: `new[r][c] = old[height - 1 - c][r]`.
    pub fn rotated_cw(&self) -> Self {
        let height = self.width;
        let width = self.height;
        let mut cells = ArrayVec::new();
        for r in 0..height {
            for c in 0..width {
                cells.push(self.cells[(self.height - 1 - c) * self.width + r]);
            }
        }
        Self {
            height,
            width,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(shape: &Shape) -> Vec<Vec<Cell>> {
        (0..shape.height())
            .map(|r| (0..shape.width()).map(|c| shape.get(r, c).unwrap()).collect())
            .collect()
    }

    #[test]
    fn test_stamps_color_on_occupied_cells() {
        let shape = Shape::for_kind(PieceKind::T, 3);
        assert_eq!(rows(&shape), vec![vec![0, 3, 0], vec![3, 3, 3]]);
    }

    #[test]
    fn test_occupied_offsets() {
        let shape = Shape::for_kind(PieceKind::S, 1);
        let cells: Vec<_> = shape.occupied().collect();
        assert_eq!(cells, vec![(0, 1), (0, 2), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_rotate_t_clockwise() {
        // .#.      #.
        // ###  ->  ##
        //          #.
        let shape = Shape::for_kind(PieceKind::T, 1).rotated_cw();
        assert_eq!(rows(&shape), vec![vec![1, 0], vec![1, 1], vec![1, 0]]);
    }

    #[test]
    fn test_rotate_j_clockwise() {
        // #..      ##
        // ###  ->  #.
        //          #.
        let shape = Shape::for_kind(PieceKind::J, 2).rotated_cw();
        assert_eq!(rows(&shape), vec![vec![2, 2], vec![2, 0], vec![2, 0]]);
    }

    #[test]
    fn test_rotate_i_changes_dimensions() {
        let flat = Shape::for_kind(PieceKind::I, 1);
        let tall = flat.rotated_cw();
        assert_eq!((tall.height(), tall.width()), (4, 1));
        assert_eq!(tall.rotated_cw().width(), 4);
    }

    #[test]
    fn test_four_rotations_is_identity() {
        for kind in PieceKind::ALL {
            let shape = Shape::for_kind(kind, 4);
            let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(back, shape, "{:?}", kind);
        }
    }

    #[test]
    fn test_ragged_template_is_padded() {
        let shape = Shape::from_template(&[&[1, 1, 1], &[1]], 5);
        assert_eq!(rows(&shape), vec![vec![5, 5, 5], vec![5, 0, 0]]);
    }

    #[test]
    fn test_get_out_of_range() {
        let shape = Shape::for_kind(PieceKind::O, 1);
        assert_eq!(shape.get(2, 0), None);
        assert_eq!(shape.get(0, 2), None);
    }
}
