use blocktris::core::{GameConfig, SequenceRng, Session};
use blocktris::term::{BoardView, SurfaceLayout, Viewport};
use blocktris::types::PALETTE;

fn view_for(viewport: Viewport) -> BoardView {
    BoardView::new(SurfaceLayout::from_viewport(viewport, 20, 10), PALETTE)
}

#[test]
fn term_view_renders_border_and_score() {
    let session = Session::new(GameConfig::default(), SequenceRng::new(vec![1, 0]));
    // surface 22 rows => cells 2x1, frame 22x22, one blank row above
    let vp = Viewport::new(22, 25);
    let fb = view_for(vp).render(&session.snapshot(), vp);

    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 22).unwrap().ch, '└');
    assert_eq!(fb.get(21, 22).unwrap().ch, '┘');
    assert!(fb.row_text(23).contains("Score: 0"));
}

#[test]
fn term_view_fills_piece_cells_two_columns_wide() {
    let session = Session::new(GameConfig::default(), SequenceRng::new(vec![1, 0]));
    let vp = Viewport::new(22, 25);
    let fb = view_for(vp).render(&session.snapshot(), vp);

    let red = PALETTE.color(1).unwrap().rgb;
    // O at cols 4-5 => x = 1 + 4 * 2 .. 1 + 6 * 2, rows 0-1 => y = 2, 3
    for y in 2..4 {
        for x in 9..13 {
            let glyph = fb.get(x, y).unwrap();
            assert_eq!(glyph.ch, '█', "({}, {})", x, y);
            assert_eq!(glyph.style.fg, red);
        }
    }
    let empty = fb.get(7, 2).unwrap();
    assert_eq!(empty.ch, '·');
    assert!(empty.style.dim);
}

#[test]
fn term_view_layout_is_fixed_after_creation() {
    let view = view_for(Viewport::new(80, 24));
    let session = Session::new(GameConfig::default(), SequenceRng::new(vec![1, 0]));

    // A bigger viewport later does not grow the cells.
    let fb = view.render(&session.snapshot(), Viewport::new(200, 60));
    assert_eq!(view.layout().cell_w, 2);
    assert_eq!(view.layout().cell_h, 1);
    assert_eq!(fb.width(), 200);
}
