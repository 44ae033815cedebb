//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The whole scene - board frame, locked cells, falling piece, preview,
//! score - is drawn relative to one origin that carries the current shake
//! offset, so impact jitter moves everything uniformly.

use crate::core::{enumerate_cells, GameState};
use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Fixed preview slot, in board coordinates: just right of the playfield,
/// anchored at the visible top.
const PREVIEW_ANCHOR: (i8, i8) = (BOARD_WIDTH + 1, BOARD_HEIGHT - 1);

/// A lightweight terminal renderer for the game scene.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        // Scene origin: centered, then shifted by the shake offset. Cells
        // pushed off-screen are clipped by the framebuffer.
        let (jx, jy) = state.shake_offset();
        let origin_x = (viewport.width.saturating_sub(frame_w) / 2) as i32 + jx.round() as i32;
        let origin_y = (viewport.height.saturating_sub(frame_h) / 2) as i32 + jy.round() as i32;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        self.draw_border(&mut fb, origin_x, origin_y, frame_w, frame_h, border);

        // Playfield: locked cells over a dotted background.
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                match state.board().get(x, y) {
                    Some(kind) => {
                        self.draw_board_cell(&mut fb, origin_x, origin_y, x, y, kind);
                    }
                    None => {
                        self.fill_cell(&mut fb, origin_x, origin_y, x, y, '·', bg);
                    }
                }
            }
        }

        // Falling piece. Cells above the visible top are not drawn.
        let falling = state.falling();
        for (x, y) in state.falling_cells() {
            if y >= 0 && y < BOARD_HEIGHT {
                self.draw_board_cell(&mut fb, origin_x, origin_y, x, y, falling.kind);
            }
        }

        // Next-piece preview in its fixed board-relative slot.
        let next = state.next_kind();
        let (px, py) = PREVIEW_ANCHOR;
        for (x, y) in enumerate_cells(px, py, next, Rotation::North) {
            self.draw_board_cell(&mut fb, origin_x, origin_y, x, y, next);
        }

        // Score readout, fixed-width so the layout never shifts.
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        self.put_str_at(&mut fb, origin_x + 1, origin_y - 1, "SCORE", label);
        self.put_str_at(
            &mut fb,
            origin_x + 7,
            origin_y - 1,
            &state.score_string(),
            CellStyle::default(),
        );
        self.put_str_at(
            &mut fb,
            origin_x + frame_w as i32 + 2,
            origin_y,
            "NEXT",
            label,
        );

        fb
    }

    /// Terminal position of the top-left of a board cell, or None when the
    /// jittered origin pushes it above or left of the screen.
    fn cell_pos(&self, origin_x: i32, origin_y: i32, x: i8, y: i8) -> Option<(u16, u16)> {
        let px = origin_x + 1 + (x as i32) * self.cell_w as i32;
        // Logical y grows upward; terminal rows grow downward.
        let py = origin_y + 1 + ((BOARD_HEIGHT - 1 - y) as i32) * self.cell_h as i32;
        if px < 0 || py < 0 {
            return None;
        }
        Some((px as u16, py as u16))
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: i32,
        origin_y: i32,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if let Some((px, py)) = self.cell_pos(origin_x, origin_y, x, y) {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
        }
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: i32,
        origin_y: i32,
        x: i8,
        y: i8,
        kind: PieceKind,
    ) {
        let fg = match kind {
            PieceKind::I => Rgb::new(80, 220, 220),
            PieceKind::J => Rgb::new(80, 120, 220),
            PieceKind::L => Rgb::new(255, 165, 0),
            PieceKind::O => Rgb::new(240, 220, 80),
        };
        let style = CellStyle {
            fg,
            bg: Rgb::new(30, 30, 40),
            bold: true,
        };
        self.fill_cell(fb, origin_x, origin_y, x, y, '█', style);
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        origin_x: i32,
        origin_y: i32,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        self.put_char_at(fb, origin_x, origin_y, '┌', style);
        self.put_char_at(fb, origin_x + w as i32 - 1, origin_y, '┐', style);
        self.put_char_at(fb, origin_x, origin_y + h as i32 - 1, '└', style);
        self.put_char_at(
            fb,
            origin_x + w as i32 - 1,
            origin_y + h as i32 - 1,
            '┘',
            style,
        );

        for dx in 1..w as i32 - 1 {
            self.put_char_at(fb, origin_x + dx, origin_y, '─', style);
            self.put_char_at(fb, origin_x + dx, origin_y + h as i32 - 1, '─', style);
        }
        for dy in 1..h as i32 - 1 {
            self.put_char_at(fb, origin_x, origin_y + dy, '│', style);
            self.put_char_at(fb, origin_x + w as i32 - 1, origin_y + dy, '│', style);
        }
    }

    fn put_char_at(&self, fb: &mut FrameBuffer, x: i32, y: i32, ch: char, style: CellStyle) {
        if x >= 0 && y >= 0 {
            fb.put_char(x as u16, y as u16, ch, style);
        }
    }

    fn put_str_at(&self, fb: &mut FrameBuffer, x: i32, y: i32, s: &str, style: CellStyle) {
        if y < 0 {
            return;
        }
        // Clip characters to the left of the screen individually.
        for (i, ch) in s.chars().enumerate() {
            self.put_char_at(fb, x + i as i32, y, ch, style);
        }
    }
}
