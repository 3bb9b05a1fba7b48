//! GameView: maps the playfield and falling piece into a terminal framebuffer.
//!
//! This module is pure (no I/O) and never mutates game state. It can be unit-tested.

use crate::core::{ActivePiece, PieceSource, PlayField, Session};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceColor, COLUMNS, ROWS};

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);

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

/// Counters and flags shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusView {
    pub pieces_locked: u32,
    pub lines_cleared: u32,
    pub game_over: bool,
}

impl StatusView {
    pub fn of<S: PieceSource>(session: &Session<S>) -> Self {
        Self {
            pieces_locked: session.pieces_locked(),
            lines_cleared: session.lines_cleared(),
            game_over: session.is_game_over(),
        }
    }
}

/// A lightweight terminal renderer for the playfield.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a session into an existing framebuffer.
    pub fn render_session_into<S: PieceSource>(
        &self,
        session: &Session<S>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        self.render_into(
            session.field(),
            Some(session.active()),
            StatusView::of(session),
            viewport,
            fb,
        );
    }

    /// Render the field and falling piece into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        field: &PlayField,
        active: Option<&ActivePiece>,
        status: StatusView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let field_px_w = (COLUMNS as u16) * self.cell_w;
        let field_px_h = (ROWS as u16) * self.cell_h;
        let frame_w = field_px_w + 2;
        let frame_h = field_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle::plain(Rgb::new(80, 80, 90), FIELD_BG);
        let border = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, field_px_w, field_px_h, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells.
        for y in 0..ROWS as usize {
            for (x, cell) in field.row(y).iter().enumerate() {
                match cell {
                    Some(color) => {
                        self.draw_field_cell(fb, start_x, start_y, x as u16, y as u16, *color)
                    }
                    None => self.draw_empty_cell(fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        // Falling piece. Cells above the field are not drawn.
        if let Some(piece) = active {
            for (x, y) in piece.cells() {
                if x >= 0 && x < COLUMNS as i8 && y >= 0 && y < ROWS as i8 {
                    self.draw_field_cell(fb, start_x, start_y, x as u16, y as u16, piece.color());
                }
            }
        }

        self.draw_side_panel(fb, status, viewport, start_x, start_y, frame_w);

        if status.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<S: PieceSource>(&self, session: &Session<S>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_session_into(session, viewport, &mut fb);
        fb
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            dim: true,
            ..CellStyle::plain(Rgb::new(90, 90, 100), FIELD_BG)
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_field_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        color: PieceColor,
    ) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(color.into(), FIELD_BG)
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        status: StatusView,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let help = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "PIECES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, status.pieces_locked, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, status.lines_cleared, value);
        y = y.saturating_add(2);

        for line in ["<- -> move", "v    drop", "r    restart", "q    quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        fb.put_str(x, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    fn top_left() -> GameView {
        GameView::new(1, 1).with_anchor_y(AnchorY::Top)
    }

    #[test]
    fn locked_cells_use_their_color() {
        let mut field = PlayField::new();
        field.set_cell(0, 19, PieceColor::Green);

        let mut fb = FrameBuffer::new(12, 22);
        top_left().render_into(&field, None, StatusView::default(), Viewport::new(12, 22), &mut fb);

        // One column of border, then the field.
        let cell = fb.get(1, 20).unwrap_or_default();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::new(0, 255, 0));
        assert_eq!(fb.get(2, 20).map(|c| c.ch), Some('·'));
    }

    #[test]
    fn piece_cells_above_the_field_are_skipped() {
        let field = PlayField::new();
        let piece = ActivePiece::at(ShapeKind::T, PieceColor::Red, 0, -1);

        let mut fb = FrameBuffer::new(12, 22);
        top_left().render_into(
            &field,
            Some(&piece),
            StatusView::default(),
            Viewport::new(12, 22),
            &mut fb,
        );

        // T bottom row lands on field row 0; its top cell is hidden.
        assert_eq!(fb.row_text(1), "│███·······│");
        assert_eq!(fb.row_text(0), "┌──────────┐");
    }
}
