//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so layout is unit-testable.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BlockColor, COLS, ROWS};

const BOARD_BG: Rgb = Rgb::new(0, 0, 0);
const GRID_LINE: Rgb = Rgb::new(128, 128, 128);

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

/// Board layout inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRect {
    /// Top-left corner of the border.
    pub x: u16,
    pub y: u16,
    /// Border size including the frame itself.
    pub w: u16,
    pub h: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square on common terminal fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Where the bordered board lands in `viewport` (centered).
    pub fn board_rect(&self, viewport: Viewport) -> BoardRect {
        let w = COLS as u16 * self.cell_w + 2;
        let h = ROWS as u16 * self.cell_h + 2;
        BoardRect {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let rect = self.board_rect(viewport);
        self.draw_border(fb, rect);

        for y in 0..ROWS as i8 {
            for x in 0..COLS as i8 {
                match snap.grid.get(x, y).flatten() {
                    Some(color) => self.draw_block(fb, rect, x as u16, y as u16, color),
                    None => self.draw_empty(fb, rect, x as u16, y as u16),
                }
            }
        }

        // Cells above the top edge are not drawn.
        for (x, y) in snap.active.cells() {
            if x >= 0 && x < COLS as i8 && y >= 0 && y < ROWS as i8 {
                self.draw_block(fb, rect, x as u16, y as u16, snap.active.color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, rect);

        if snap.game_over() {
            self.draw_overlay_text(fb, rect, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, rect: BoardRect) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), BOARD_BG);
        let (x, y, w, h) = (rect.x, rect.y, rect.w, rect.h);

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

    fn draw_empty(&self, fb: &mut FrameBuffer, rect: BoardRect, x: u16, y: u16) {
        let style = CellStyle::new(GRID_LINE, BOARD_BG);
        self.fill_cell(fb, rect, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, rect: BoardRect, x: u16, y: u16, color: BlockColor) {
        let style = CellStyle::new(color.rgb().into(), BOARD_BG).bold();
        self.fill_cell(fb, rect, x, y, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        rect: BoardRect,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = rect.x + 1 + x * self.cell_w;
        let py = rect.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        rect: BoardRect,
    ) {
        let panel_x = rect.x.saturating_add(rect.w).saturating_add(2);
        if panel_x.saturating_add(8) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BOARD_BG);

        let mut y = rect.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, value);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, rect: BoardRect, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = rect.x.saturating_add(rect.w.saturating_sub(text_w) / 2);
        let y = rect.y.saturating_add(rect.h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), BOARD_BG).bold();
        fb.put_str(x, y, text, style);
    }
}
