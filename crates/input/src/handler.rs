//! Cursor and pattern-menu state for the terminal front end.
//!
//! Translates [`KeyAction`]s into engine [`Command`]s. The only state kept here
//! is presentational: where the cursor is and which menu entry is highlighted.

use crate::map::KeyAction;
use crate::types::Command;

/// What the handler needs to know about the session for one key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    pub width: u32,
    pub height: u32,
    /// A pattern is selected and waits for an anchor
    pub placing: bool,
    pub draw_mode: bool,
}

#[derive(Debug, Clone)]
pub struct InputHandler {
    cursor: (i32, i32),
    menu_index: usize,
    pattern_names: Vec<&'static str>,
}

impl InputHandler {
    pub fn new(pattern_names: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            cursor: (0, 0),
            menu_index: 0,
            pattern_names: pattern_names.into_iter().collect(),
        }
    }

    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    pub fn highlighted_pattern(&self) -> Option<&'static str> {
        self.pattern_names.get(self.menu_index).copied()
    }

    /// Keep the cursor inside a (possibly resized) grid
    pub fn clamp_cursor(&mut self, width: u32, height: u32) {
        let max_x = width.saturating_sub(1).min(i32::MAX as u32) as i32;
        let max_y = height.saturating_sub(1).min(i32::MAX as u32) as i32;
        self.cursor = (self.cursor.0.clamp(0, max_x), self.cursor.1.clamp(0, max_y));
    }

    pub fn handle(&mut self, action: KeyAction, ctx: InputContext) -> Option<Command> {
        self.clamp_cursor(ctx.width, ctx.height);
        let (x, y) = self.cursor;

        match action {
            KeyAction::Command(cmd) => Some(cmd),
            KeyAction::MoveCursor { dx, dy } => {
                self.cursor = (x + dx, y + dy);
                self.clamp_cursor(ctx.width, ctx.height);
                let (x, y) = self.cursor;
                ctx.draw_mode.then_some(Command::PaintCell { x, y })
            }
            KeyAction::ToggleAtCursor => Some(Command::ToggleCell { x, y }),
            KeyAction::NextPattern => {
                if !self.pattern_names.is_empty() {
                    self.menu_index = (self.menu_index + 1) % self.pattern_names.len();
                }
                None
            }
            KeyAction::PrevPattern => {
                let len = self.pattern_names.len();
                if len > 0 {
                    self.menu_index = (self.menu_index + len - 1) % len;
                }
                None
            }
            KeyAction::Confirm => {
                if ctx.placing {
                    Some(Command::ReleaseAt { x, y })
                } else {
                    self.highlighted_pattern()
                        .map(|name| Command::SelectPattern(name.to_string()))
                }
            }
        }
    }
}
