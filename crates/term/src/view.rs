//! BoardView: draws a `GameSnapshot` into a framebuffer.
//!
//! Pure, no I/O. The surface is sized once from the viewport the game
//! starts in: its height is whatever the viewport leaves after the border
//! and the score line, and its width is half that in cell units, doubled
//! in terminal columns for the 2:1 glyph aspect.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Style};
use crate::types::{Cell, Palette, Rgb, EMPTY};

const BORDER: u16 = 2;
const SCORE_LINE: u16 = 1;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Size of the drawing surface and of one grid cell, in terminal units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceLayout {
    pub surface_w: u16,
    pub surface_h: u16,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl SurfaceLayout {
    pub fn from_viewport(viewport: Viewport, rows: usize, cols: usize) -> Self {
        let surface_h = viewport.height.saturating_sub(BORDER + SCORE_LINE);
        // height * 0.5 cells, two terminal columns per cell
        let surface_w = (surface_h / 2) * 2;

        let rows = rows.max(1) as u16;
        let cols = cols.max(1) as u16;
        Self {
            surface_w,
            surface_h,
            cell_w: (surface_w / cols).max(1),
            cell_h: (surface_h / rows).max(1),
        }
    }

    /// Board width in terminal columns
    pub fn board_w(&self, cols: usize) -> u16 {
        self.cell_w.saturating_mul(cols as u16)
    }

    /// Board height in terminal rows
    pub fn board_h(&self, rows: usize) -> u16 {
        self.cell_h.saturating_mul(rows as u16)
    }
}

pub struct BoardView {
    layout: SurfaceLayout,
    palette: Palette,
}

impl BoardView {
    pub fn new(layout: SurfaceLayout, palette: Palette) -> Self {
        Self { layout, palette }
    }

    pub fn layout(&self) -> SurfaceLayout {
        self.layout
    }

    /// Render into an existing framebuffer, resized to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let board_w = self.layout.board_w(snap.cols);
        let board_h = self.layout.board_h(snap.rows);
        let frame_w = board_w.saturating_add(BORDER);
        let frame_h = board_h.saturating_add(BORDER);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + SCORE_LINE) / 2;

        let border = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(start_x + 1, start_y + 1, board_w, board_h, ' ', Style::new(BOARD_BG, BOARD_BG));
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let x = start_x + 1 + col as u16 * self.layout.cell_w;
                let y = start_y + 1 + row as u16 * self.layout.cell_h;
                let (ch, style) = self.cell_glyph(snap.cell(row, col));
                fb.fill_rect(x, y, self.layout.cell_w, self.layout.cell_h, ch, style);
            }
        }

        let score = snap.score_text();
        let score_x = start_x + frame_w.saturating_sub(score.chars().count() as u16) / 2;
        fb.put_str(score_x, start_y + frame_h, &score, Style::default().bold());

        if snap.game_over {
            let text = "Game Over";
            let x = start_x + frame_w.saturating_sub(text.len() as u16) / 2;
            let y = start_y + frame_h / 2;
            let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(120, 30, 30)).bold();
            fb.put_str(x, y, text, style);
        }
    }

    /// Allocate a fresh framebuffer and render into it.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn cell_glyph(&self, cell: Cell) -> (char, Style) {
        if cell == EMPTY {
            return ('·', Style::new(Rgb::new(90, 90, 100), BOARD_BG).dim());
        }
        match self.palette.color(cell) {
            Some(color) => ('█', Style::new(color.rgb, BOARD_BG).bold()),
            None => ('?', Style::default()),
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put(x, y, '┌', style);
    fb.put(x + w - 1, y, '┐', style);
    fb.put(x, y + h - 1, '└', style);
    fb.put(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put(x + dx, y, '─', style);
        fb.put(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put(x, y + dy, '│', style);
        fb.put(x + w - 1, y + dy, '│', style);
    }
}
