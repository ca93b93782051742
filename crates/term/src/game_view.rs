//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{encode_u32, CellStyle, FrameBuffer, Rgb};
use crate::types::GRID_SIZE;

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

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits up to six digits per tile and compensates for the
        // typical terminal glyph aspect ratio.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully overwritten.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let board_px_w = (GRID_SIZE as u16) * self.cell_w;
        let board_px_h = (GRID_SIZE as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;
        // Score line, gap, frame, gap, controls line.
        let block_h = frame_h + 4;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(block_h) / 2;
        let grid_y = start_y + 2;

        self.draw_score(fb, viewport, start_y, snap.score);

        let border = CellStyle {
            fg: Rgb::new(187, 173, 160),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        self.draw_border(fb, start_x, grid_y, frame_w, frame_h, border);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = snap.cells[row][col];
                self.draw_tile(
                    fb,
                    start_x + 1,
                    grid_y + 1,
                    col as u16,
                    row as u16,
                    value,
                    snap.game_over,
                );
            }
        }

        self.draw_controls(fb, viewport, grid_y + frame_h + 1);

        if snap.game_over {
            self.draw_game_over(fb, start_x, grid_y, frame_w, frame_h, snap.score);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_score(&self, fb: &mut FrameBuffer, viewport: Viewport, y: u16, score: u32) {
        let label = CellStyle {
            fg: Rgb::new(238, 228, 218),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let text_w = 6 + u32_width(score);
        let x = viewport.width.saturating_sub(text_w) / 2;
        fb.put_str(x, y, "SCORE ", label);
        fb.put_u32(x + 6, y, score, label);
    }

    fn draw_controls(&self, fb: &mut FrameBuffer, viewport: Viewport, y: u16) {
        let hint = "arrows move · r restart · q quit";
        let style = CellStyle {
            fg: Rgb::new(140, 130, 120),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };
        let text_w = hint.chars().count() as u16;
        let x = viewport.width.saturating_sub(text_w) / 2;
        fb.put_str(x, y, hint, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        col: u16,
        row: u16,
        value: u32,
        game_over: bool,
    ) {
        let style = if game_over && value != 0 {
            // Every tile flips to the alarm color on game over.
            CellStyle {
                fg: Rgb::new(249, 246, 242),
                bg: Rgb::new(190, 60, 60),
                bold: true,
                dim: false,
            }
        } else {
            let (fg, bg) = tile_colors(value);
            CellStyle {
                fg,
                bg,
                bold: value >= 8,
                dim: false,
            }
        };

        let px = origin_x + col * self.cell_w;
        let py = origin_y + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        if value != 0 {
            let text_w = u32_width(value);
            let tx = px + self.cell_w.saturating_sub(text_w) / 2;
            let ty = py + self.cell_h / 2;
            fb.put_u32(tx, ty, value, style);
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        score: u32,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(120, 30, 30),
            bold: true,
            dim: false,
        };

        let mid_y = start_y + frame_h / 2;

        let banner = " GAME OVER ";
        let banner_w = banner.chars().count() as u16;
        let x = start_x + frame_w.saturating_sub(banner_w) / 2;
        fb.put_str(x, mid_y.saturating_sub(1), banner, style);

        let text_w = 14 + u32_width(score);
        let x = start_x + frame_w.saturating_sub(text_w) / 2;
        fb.put_str(x, mid_y, " FINAL SCORE ", style);
        fb.put_u32(x + 13, mid_y, score, style);
        fb.put_char(x + 13 + u32_width(score), mid_y, ' ', style);
    }
}

/// Printed width of a number in digits.
fn u32_width(value: u32) -> u16 {
    let mut buf = [0u8; 10];
    encode_u32(value, &mut buf) as u16
}

/// Classic 2048 palette: (fg, bg) per tile value.
fn tile_colors(value: u32) -> (Rgb, Rgb) {
    let dark = Rgb::new(119, 110, 101);
    let light = Rgb::new(249, 246, 242);
    match value {
        0 => (Rgb::new(140, 130, 120), Rgb::new(205, 193, 180)),
        2 => (dark, Rgb::new(238, 228, 218)),
        4 => (dark, Rgb::new(237, 224, 200)),
        8 => (light, Rgb::new(242, 177, 121)),
        16 => (light, Rgb::new(245, 149, 99)),
        32 => (light, Rgb::new(246, 124, 95)),
        64 => (light, Rgb::new(246, 94, 59)),
        128 => (light, Rgb::new(237, 207, 114)),
        256 => (light, Rgb::new(237, 204, 97)),
        512 => (light, Rgb::new(237, 200, 80)),
        1024 => (light, Rgb::new(237, 197, 63)),
        2048 => (light, Rgb::new(237, 194, 46)),
        _ => (light, Rgb::new(60, 58, 50)),
    }
}
