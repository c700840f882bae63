//! LifeView: maps a `core::Session` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The grid is usually larger than the terminal, so only a window around the
//! cursor is drawn. Each grid cell is `cell_w` terminal columns wide.

use crate::core::{patterns, Session};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Mode, Orientation};

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

/// Front-end state that is drawn but not owned by the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewState<'a> {
    pub cursor: (i32, i32),
    /// Highlighted entry of the pattern menu
    pub menu_index: usize,
    /// One-line message for the status row (e.g. a failed load)
    pub status: Option<&'a str>,
}

const BG: Rgb = Rgb::new(20, 20, 28);
const BLACK: Rgb = Rgb::new(0, 0, 0);

const ALIVE: Style = Style::new(Rgb::new(110, 230, 120), BG).bold();
const DEAD: Style = Style::new(Rgb::new(70, 70, 85), BG).dim();
const PREVIEW: Style = Style::new(Rgb::new(240, 210, 90), BG);
const CURSOR_BG: Rgb = Rgb::new(90, 90, 140);
const BORDER: Style = Style::new(Rgb::new(200, 200, 200), BLACK);
const LABEL: Style = Style::new(Rgb::new(220, 220, 220), BLACK).bold();
const VALUE: Style = Style::new(Rgb::new(200, 200, 200), BLACK);
const HIGHLIGHT: Style = Style::new(Rgb::new(0, 0, 0), Rgb::new(200, 200, 120));

pub struct LifeView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Side panel width in terminal columns.
    panel_w: u16,
}

impl Default for LifeView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            panel_w: 26,
        }
    }
}

/// Top-left grid coordinate of a window of `visible` cells that keeps `cursor` in view
pub fn scroll_origin(cursor: i32, visible: u32, extent: u32) -> i32 {
    if extent <= visible {
        return 0;
    }
    let max = (extent - visible) as i32;
    (cursor - (visible / 2) as i32).clamp(0, max)
}

impl LifeView {
    pub fn new(cell_w: u16, panel_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            panel_w,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        session: &Session,
        ui: &ViewState<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Style::default().glyph(' '));

        let grid = session.grid();
        let show_panel = viewport.width >= self.panel_w + 8;
        let board_avail = if show_panel {
            viewport.width - self.panel_w
        } else {
            viewport.width
        };

        let want_w = (grid.width().min(u16::MAX as u32) as u16)
            .saturating_mul(self.cell_w)
            .saturating_add(2);
        let want_h = (grid.height().min(u16::MAX as u32) as u16).saturating_add(2);
        let frame_w = want_w.min(board_avail);
        // Last row is reserved for the status line.
        let frame_h = want_h.min(viewport.height.saturating_sub(1));
        if frame_w < 3 || frame_h < 3 {
            return;
        }

        let cols = ((frame_w - 2) / self.cell_w) as u32;
        let rows = (frame_h - 2) as u32;
        let origin_x = scroll_origin(ui.cursor.0, cols, grid.width());
        let origin_y = scroll_origin(ui.cursor.1, rows, grid.height());

        fb.fill_rect(1, 1, frame_w - 2, frame_h - 2, DEAD.glyph(' '));

        for row in 0..rows {
            for col in 0..cols {
                let (gx, gy) = (origin_x + col as i32, origin_y + row as i32);
                let glyph = if grid.is_alive(gx, gy) {
                    ALIVE.glyph('█')
                } else if grid.contains(gx, gy) {
                    DEAD.glyph('·')
                } else {
                    continue;
                };
                self.put_cell(fb, col as u16, row as u16, glyph);
            }
        }

        // Pattern preview at the cursor.
        if let Some(pattern) = session.selected_pattern() {
            for (dx, dy) in patterns::rotate(pattern, session.orientation()) {
                let (gx, gy) = (ui.cursor.0 + dx, ui.cursor.1 + dy);
                if let Some((col, row)) = visible_pos(gx, gy, origin_x, origin_y, cols, rows) {
                    if grid.contains(gx, gy) {
                        self.put_cell(fb, col, row, PREVIEW.glyph('░'));
                    }
                }
            }
        }

        // Cursor keeps the underlying glyph, only the background changes.
        if let Some((col, row)) =
            visible_pos(ui.cursor.0, ui.cursor.1, origin_x, origin_y, cols, rows)
        {
            let px = 1 + col * self.cell_w;
            let py = 1 + row;
            for dx in 0..self.cell_w {
                if let Some(mut g) = fb.get(px + dx, py) {
                    g.style.bg = CURSOR_BG;
                    fb.put(px + dx, py, g);
                }
            }
        }

        draw_border(fb, 0, 0, frame_w, frame_h);

        if show_panel {
            self.draw_side_panel(fb, session, ui, viewport, frame_w + 2);
        }

        if session.mode() == Mode::Paused {
            draw_overlay_text(fb, frame_w, frame_h, "PAUSED");
        }

        if let Some(status) = ui.status {
            fb.put_str(0, viewport.height - 1, status, VALUE);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &Session, ui: &ViewState<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, ui, viewport, &mut fb);
        fb
    }

    fn put_cell(&self, fb: &mut FrameBuffer, col: u16, row: u16, glyph: crate::fb::Glyph) {
        fb.fill_rect(1 + col * self.cell_w, 1 + row, self.cell_w, 1, glyph);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        ui: &ViewState<'_>,
        viewport: Viewport,
        panel_x: u16,
    ) {
        let bottom = viewport.height.saturating_sub(1);
        let mut y = 0u16;
        let mut field = |fb: &mut FrameBuffer, label: &str, value: &str| {
            if y + 1 >= bottom {
                return;
            }
            fb.put_str(panel_x, y, label, LABEL);
            fb.put_str(panel_x, y + 1, value, VALUE);
            y += 3;
        };

        field(fb, "MODE", &session.mode().as_str().to_uppercase());
        field(fb, "SPEED", &format!("{} gps", session.speed()));
        field(fb, "DIRECTION", direction_label(session.orientation()));
        field(fb, "DRAW MODE", if session.draw_mode() { "ON" } else { "OFF" });
        field(
            fb,
            "GEN / POP",
            &format!("{} / {}", session.generation(), session.population()),
        );
        field(fb, "CURSOR", &format!("{}, {}", ui.cursor.0, ui.cursor.1));

        if y >= bottom {
            return;
        }
        fb.put_str(panel_x, y, "PATTERNS", LABEL);
        y += 1;

        let selected = session.selected_pattern().map(|p| p.name);
        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
            if y >= bottom {
                break;
            }
            let marker = if selected == Some(pattern.name) { '*' } else { ' ' };
            let line = format!("{marker} {}", pattern.label);
            let style = if i == ui.menu_index { HIGHLIGHT } else { VALUE };
            fb.put_str(panel_x, y, &line, style);
            y += 1;
        }
    }
}

fn visible_pos(
    gx: i32,
    gy: i32,
    origin_x: i32,
    origin_y: i32,
    cols: u32,
    rows: u32,
) -> Option<(u16, u16)> {
    let (col, row) = (gx - origin_x, gy - origin_y);
    (col >= 0 && row >= 0 && (col as u32) < cols && (row as u32) < rows)
        .then_some((col as u16, row as u16))
}

fn direction_label(o: Orientation) -> &'static str {
    match o {
        Orientation::Right => "RIGHT",
        Orientation::Down => "DOWN",
        Orientation::Left => "LEFT",
        Orientation::Up => "UP",
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put(x, y, BORDER.glyph('┌'));
    fb.put(x + w - 1, y, BORDER.glyph('┐'));
    fb.put(x, y + h - 1, BORDER.glyph('└'));
    fb.put(x + w - 1, y + h - 1, BORDER.glyph('┘'));

    for dx in 1..w - 1 {
        fb.put(x + dx, y, BORDER.glyph('─'));
        fb.put(x + dx, y + h - 1, BORDER.glyph('─'));
    }
    for dy in 1..h - 1 {
        fb.put(x, y + dy, BORDER.glyph('│'));
        fb.put(x + w - 1, y + dy, BORDER.glyph('│'));
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, frame_w: u16, frame_h: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = frame_w.saturating_sub(text_w) / 2;
    fb.put_str(x, frame_h / 2, text, Style::new(Rgb::new(255, 255, 255), BLACK).bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_origin_centers_and_clamps() {
        // Whole grid fits.
        assert_eq!(scroll_origin(7, 20, 10), 0);
        // Cursor near the start.
        assert_eq!(scroll_origin(2, 10, 100), 0);
        // Centered.
        assert_eq!(scroll_origin(50, 10, 100), 45);
        // Cursor near the end.
        assert_eq!(scroll_origin(99, 10, 100), 90);
    }

    #[test]
    fn visible_pos_rejects_outside_window() {
        assert_eq!(visible_pos(5, 5, 5, 5, 2, 2), Some((0, 0)));
        assert_eq!(visible_pos(7, 5, 5, 5, 2, 2), None);
        assert_eq!(visible_pos(4, 5, 5, 5, 2, 2), None);
    }
}
