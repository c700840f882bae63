//! Key mapping from terminal events to front-end actions.
//!
//! Each engine command gets its own key; no key is shared between commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the front end to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// A command that needs no cursor context
    Command(Command),
    /// Move the cursor by one cell
    MoveCursor { dx: i32, dy: i32 },
    /// Flip the cell under the cursor
    ToggleAtCursor,
    /// Highlight the next pattern in the menu
    NextPattern,
    /// Highlight the previous pattern in the menu
    PrevPattern,
    /// Select the highlighted pattern, or drop the selected one at the cursor
    Confirm,
}

/// Map keyboard input to front-end actions.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyAction> {
    let action = match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') => KeyAction::MoveCursor { dx: -1, dy: 0 },
        KeyCode::Right | KeyCode::Char('l') => KeyAction::MoveCursor { dx: 1, dy: 0 },
        KeyCode::Up | KeyCode::Char('k') => KeyAction::MoveCursor { dx: 0, dy: -1 },
        KeyCode::Down | KeyCode::Char('j') => KeyAction::MoveCursor { dx: 0, dy: 1 },

        // Cell editing and placement
        KeyCode::Char(' ') => KeyAction::ToggleAtCursor,
        KeyCode::Tab => KeyAction::NextPattern,
        KeyCode::BackTab => KeyAction::PrevPattern,
        KeyCode::Enter => KeyAction::Confirm,

        // Session commands
        KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Command(Command::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => KeyAction::Command(Command::Pause),
        KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Command(Command::Clear),
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Command(Command::Randomize),
        KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Command(Command::Save),
        KeyCode::Char('L') => KeyAction::Command(Command::Load),
        KeyCode::Char('+') | KeyCode::Char('=') => KeyAction::Command(Command::SpeedUp),
        KeyCode::Char('-') | KeyCode::Char('_') => KeyAction::Command(Command::SpeedDown),
        KeyCode::Char('o') | KeyCode::Char('O') => KeyAction::Command(Command::ToggleOrientation),
        KeyCode::Char('m') | KeyCode::Char('M') => KeyAction::Command(Command::ToggleDrawMode),

        _ => return None,
    };

    // Ctrl-C is quit, never clear.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    Some(action)
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
