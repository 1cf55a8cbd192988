//! GameView: maps a [`BoardView`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::board_view::BoardView;
use crate::brush::BrushConverter;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Extra lines shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView {
    pub mode: &'static str,
    pub batches: u64,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    brush: BrushConverter,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            brush: BrushConverter::default(),
        }
    }

    pub fn with_brush(mut self, brush: BrushConverter) -> Self {
        self.brush = brush;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        view: &BoardView,
        status: Option<&StatusView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let board_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Board row 0 is the floor, so it lands on the last screen row.
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                let color = view.color(x, y).unwrap_or(self.brush.background());
                let style = self.brush.convert(color);
                let px = start_x + 1 + x as u16 * self.cell_w;
                let py = start_y + 1 + (BOARD_HEIGHT as u16 - 1 - y as u16) * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
            }
        }

        if let Some(status) = status {
            self.draw_side_panel(fb, status, viewport, start_x + frame_w + 2, start_y);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, view: &BoardView, status: Option<&StatusView>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(view, status, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        fb.set(x, y, style.glyph('┌'));
        fb.set(x + w - 1, y, style.glyph('┐'));
        fb.set(x, y + h - 1, style.glyph('└'));
        fb.set(x + w - 1, y + h - 1, style.glyph('┘'));
        for dx in 1..w - 1 {
            fb.set(x + dx, y, style.glyph('─'));
            fb.set(x + dx, y + h - 1, style.glyph('─'));
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, style.glyph('│'));
            fb.set(x + w - 1, y + dy, style.glyph('│'));
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        status: &StatusView,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();
        let dim = CellStyle {
            dim: true,
            ..value
        };

        fb.put_str(panel_x, start_y, "MODE", label);
        fb.put_str(panel_x, start_y + 1, status.mode, value);
        fb.put_str(panel_x, start_y + 3, "BATCHES", label);
        fb.put_u64(panel_x, start_y + 4, status.batches, value);
        fb.put_str(panel_x, start_y + 6, "←→↓ move", dim);
        fb.put_str(panel_x, start_y + 7, "q   quit", dim);
    }
}
