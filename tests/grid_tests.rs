//! Grid tests: row clearing, scoring, spawn placement

use blocktris::core::{Grid, Piece, Pos};
use blocktris::types::{PieceKind, EMPTY, LINE_SCORES};

/// 8x4 grid with the bottom `full` rows complete and a marker above them.
fn grid_with_full_rows(full: usize) -> Grid {
    let mut grid = Grid::new(8, 4);
    for row in 8 - full..8 {
        for col in 0..4 {
            assert!(grid.set(row as i32, col, 1));
        }
    }
    // Partial rows that must survive and keep their order.
    grid.set(0, 0, 2);
    grid.set(1, 3, 3);
    grid
}

#[test]
fn test_clear_k_rows_scores_table_value() {
    for k in 0..=4 {
        let mut grid = grid_with_full_rows(k);
        let clear = grid.clear_completed_rows();

        assert_eq!(clear.count(), k, "k = {}", k);
        assert_eq!(clear.points, LINE_SCORES[k]);
        assert_eq!(grid.score(), LINE_SCORES[k]);

        // The two marker rows dropped by k, everything else empty.
        assert_eq!(grid.get(k as i32, 0), Some(2));
        assert_eq!(grid.get(k as i32 + 1, 3), Some(3));
        let filled = grid.cells().iter().filter(|&&c| c != EMPTY).count();
        assert_eq!(filled, 2);
    }
}

#[test]
fn test_clear_without_full_rows_changes_nothing() {
    let mut grid = grid_with_full_rows(0);
    let before = grid.clone();
    let clear = grid.clear_completed_rows();
    assert_eq!(clear.count(), 0);
    assert_eq!(clear.points, 0);
    assert_eq!(grid, before);
}

#[test]
fn test_second_clear_is_a_no_op() {
    let mut grid = grid_with_full_rows(3);
    grid.clear_completed_rows();
    let after_first = grid.clone();

    let clear = grid.clear_completed_rows();
    assert_eq!(clear.count(), 0);
    assert_eq!(grid, after_first);
    assert_eq!(grid.score(), 300);
}

#[test]
fn test_non_adjacent_full_rows() {
    let mut grid = Grid::from_rows(&[
        &[0, 0, 0, 0],
        &[4, 4, 4, 4],
        &[0, 5, 0, 0],
        &[4, 4, 4, 4],
        &[1, 0, 0, 1],
    ]);
    let clear = grid.clear_completed_rows();
    assert_eq!(clear.rows.as_slice(), &[1, 3]);
    assert_eq!(grid.row(2), Some(&[0, 0, 0, 0][..]));
    assert_eq!(grid.row(3), Some(&[0, 5, 0, 0][..]));
    assert_eq!(grid.row(4), Some(&[1, 0, 0, 1][..]));
}

#[test]
fn test_scores_accumulate_across_passes() {
    let mut grid = grid_with_full_rows(1);
    grid.clear_completed_rows();
    for col in 0..4 {
        grid.set(7, col, 5);
    }
    let clear = grid.clear_completed_rows();
    assert_eq!(clear.points, 40);
    assert_eq!(clear.score, 80);
}

#[test]
fn test_spawn_uses_default_anchor_when_free() {
    let mut grid = Grid::new(20, 10);
    let mut piece = Piece::with_color_index(PieceKind::O, 1, 10);
    assert!(grid.place_spawn(&mut piece));
    assert_eq!(piece.anchor(), Pos::new(0, 4));
    for (r, c) in [(0, 4), (0, 5), (1, 4), (1, 5)] {
        assert_eq!(grid.get(r, c), Some(1));
    }
}

#[test]
fn test_spawn_scans_columns_from_left() {
    let mut grid = Grid::new(20, 10);
    for col in 3..10 {
        grid.set(0, col, 2);
    }
    let mut piece = Piece::with_color_index(PieceKind::O, 1, 10);
    assert!(grid.place_spawn(&mut piece));
    assert_eq!(piece.anchor(), Pos::new(0, 0));
    assert!(grid.is_alive());
}

#[test]
fn test_spawn_scan_stops_at_column_six() {
    let mut grid = Grid::new(20, 10);
    // Columns 8 and 9 are free, but no scanned anchor reaches them.
    for col in 0..8 {
        grid.set(0, col, 2);
    }
    let before: Vec<u8> = grid.cells().to_vec();

    let mut piece = Piece::with_color_index(PieceKind::O, 1, 10);
    assert!(!grid.place_spawn(&mut piece));
    assert!(grid.is_game_over());
    assert_eq!(grid.cells(), &before[..]);
}
