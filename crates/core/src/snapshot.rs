//! Read-only view of a session for rendering.

use crate::types::{Cell, PieceKind, EMPTY};

/// Snapshot of everything the view draws
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major cells, live piece included
    pub cells: Vec<Cell>,
    pub active: Option<PieceKind>,
    pub score: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Cell at (row, col); out-of-range reads are empty
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.cols {
            return EMPTY;
        }
        self.cells[row * self.cols + col]
    }

    /// The score line shown under the board
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
}
