//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The default grid matches a 1000x750 pixel board drawn with 10 pixel cells:
//!
//! - **Width**: 100 columns (indexed 0-99)
//! - **Height**: 75 rows (indexed 0-74)
//!
//! Grids of any non-zero size can be created; these are only defaults.
//!
//! # Speed
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_SPEED` | 10 | Initial generations per second |
//! | `MIN_SPEED` | 1 | Slowest allowed speed |
//! | `MAX_SPEED` | 60 | Fastest allowed speed |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{Command, Mode, Orientation, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! // Orientation cycles right -> down -> left -> up
//! let orientation = Orientation::Right;
//! assert_eq!(orientation.next(), Orientation::Down);
//!
//! // Parse a command name
//! let cmd = Command::from_str("speedUp").unwrap();
//! assert_eq!(cmd, Command::SpeedUp);
//!
//! assert_eq!(Mode::default(), Mode::Edit);
//! assert_eq!(DEFAULT_WIDTH, 100);
//! assert_eq!(DEFAULT_HEIGHT, 75);
//! ```

/// Default grid width in cells
pub const DEFAULT_WIDTH: u32 = 100;

/// Default grid height in cells
pub const DEFAULT_HEIGHT: u32 = 75;

/// Initial generation speed (generations per second)
pub const DEFAULT_SPEED: u32 = 10;

/// Slowest generation speed
pub const MIN_SPEED: u32 = 1;

/// Fastest generation speed
pub const MAX_SPEED: u32 = 60;

/// Default snapshot file name used by save/load
pub const DEFAULT_SAVE_PATH: &str = "game_of_life.sav";

/// Size of the snapshot header (width + height, both u32 LE)
pub const SNAPSHOT_HEADER_LEN: usize = 8;

/// Milliseconds between generations at the given speed.
///
/// Speeds outside `[MIN_SPEED, MAX_SPEED]` are clamped first.
///
/// ```
/// use tui_life_types::tick_interval_ms;
///
/// assert_eq!(tick_interval_ms(10), 100);
/// assert_eq!(tick_interval_ms(0), 1000);
/// ```
pub fn tick_interval_ms(speed: u32) -> u32 {
    1000 / speed.clamp(MIN_SPEED, MAX_SPEED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_defaults() {
        assert_eq!(DEFAULT_WIDTH, 100);
        assert_eq!(DEFAULT_HEIGHT, 75);
        assert_eq!(DEFAULT_SPEED, 10);
        assert_eq!(MIN_SPEED, 1);
        assert_eq!(MAX_SPEED, 60);
        assert_eq!(DEFAULT_SAVE_PATH, "game_of_life.sav");
    }

    #[test]
    fn tick_interval_is_clamped() {
        assert_eq!(tick_interval_ms(1), 1000);
        assert_eq!(tick_interval_ms(60), 16);
        assert_eq!(tick_interval_ms(500), 16);
    }

    #[test]
    fn orientation_cycle_has_order_four() {
        let mut o = Orientation::Right;
        for _ in 0..4 {
            o = o.next();
        }
        assert_eq!(o, Orientation::Right);
        assert_eq!(Orientation::Right.next().next(), Orientation::Left);
    }

    #[test]
    fn command_names_roundtrip() {
        for cmd in [
            Command::Start,
            Command::Pause,
            Command::Clear,
            Command::Randomize,
            Command::Save,
            Command::Load,
            Command::SpeedUp,
            Command::SpeedDown,
            Command::ToggleOrientation,
            Command::ToggleDrawMode,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
        assert_eq!(Command::from_str("toggleCell"), None);
    }
}

/// A single cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// The other state
    pub fn flipped(self) -> Self {
        match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }

    /// Snapshot byte for this state (0 dead, 1 alive)
    pub fn as_byte(self) -> u8 {
        match self {
            CellState::Dead => 0,
            CellState::Alive => 1,
        }
    }

    /// Parse a snapshot byte; anything other than 0 or 1 is rejected
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0 => Some(CellState::Dead),
            1 => Some(CellState::Alive),
            _ => None,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

/// Placement orientation for patterns
///
/// - **Right**: Canonical (stored) orientation
/// - **Down**: (x, y) -> (y, -x)
/// - **Left**: (x, y) -> (-x, -y)
/// - **Up**: (x, y) -> (-y, x)
///
/// The cycle goes: Right → Down → Left → Up → Right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Right,
    Down,
    Left,
    Up,
}

impl Orientation {
    /// All orientations in cycle order
    pub const ALL: [Orientation; 4] = [
        Orientation::Right,
        Orientation::Down,
        Orientation::Left,
        Orientation::Up,
    ];

    /// Advance to the next orientation in the cycle
    ///
    /// ```
    /// use tui_life_types::Orientation;
    ///
    /// assert_eq!(Orientation::Right.next(), Orientation::Down);
    /// assert_eq!(Orientation::Down.next(), Orientation::Left);
    /// assert_eq!(Orientation::Left.next(), Orientation::Up);
    /// assert_eq!(Orientation::Up.next(), Orientation::Right);
    /// ```
    pub fn next(&self) -> Self {
        match self {
            Orientation::Right => Orientation::Down,
            Orientation::Down => Orientation::Left,
            Orientation::Left => Orientation::Up,
            Orientation::Up => Orientation::Right,
        }
    }

    /// Map a single offset through this orientation's transform
    ///
    /// ```
    /// use tui_life_types::Orientation;
    ///
    /// assert_eq!(Orientation::Right.apply((2, 1)), (2, 1));
    /// assert_eq!(Orientation::Down.apply((2, 1)), (1, -2));
    /// assert_eq!(Orientation::Left.apply((2, 1)), (-2, -1));
    /// assert_eq!(Orientation::Up.apply((2, 1)), (-1, 2));
    /// ```
    pub fn apply(&self, (x, y): (i32, i32)) -> (i32, i32) {
        match self {
            Orientation::Right => (x, y),
            Orientation::Down => (y, -x),
            Orientation::Left => (-x, -y),
            Orientation::Up => (-y, x),
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Right => "right",
            Orientation::Down => "down",
            Orientation::Left => "left",
            Orientation::Up => "up",
        }
    }
}

/// Observable session mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Initial mode: not running, cells editable
    #[default]
    Edit,
    /// Generations advance on every tick
    Running,
    /// Stopped after having been started
    Paused,
    /// A pattern is selected and waits for an anchor point
    DragPlacing,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Edit => "edit",
            Mode::Running => "running",
            Mode::Paused => "paused",
            Mode::DragPlacing => "placing",
        }
    }
}

/// Commands accepted by the session controller
///
/// The terminal front end translates key events into these; nothing else
/// reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Clear,
    Randomize,
    Save,
    Load,
    SpeedUp,
    SpeedDown,
    ToggleOrientation,
    ToggleDrawMode,
    /// Flip a single cell
    ToggleCell { x: i32, y: i32 },
    /// Set a single cell alive (draw mode)
    PaintCell { x: i32, y: i32 },
    /// Pick a catalog pattern by name and wait for an anchor
    SelectPattern(String),
    /// Stamp the selected pattern at the anchor
    ReleaseAt { x: i32, y: i32 },
}

impl Command {
    /// Parse an argument-free command from its camelCase name
    ///
    /// Commands that carry coordinates or names are not parseable from a bare name.
    ///
    /// ```
    /// use tui_life_types::Command;
    ///
    /// assert_eq!(Command::from_str("start"), Some(Command::Start));
    /// assert_eq!(Command::from_str("toggleOrientation"), Some(Command::ToggleOrientation));
    /// assert_eq!(Command::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(Command::Start),
            "pause" => Some(Command::Pause),
            "clear" => Some(Command::Clear),
            "randomize" => Some(Command::Randomize),
            "save" => Some(Command::Save),
            "load" => Some(Command::Load),
            "speedup" => Some(Command::SpeedUp),
            "speeddown" => Some(Command::SpeedDown),
            "toggleorientation" => Some(Command::ToggleOrientation),
            "toggledrawmode" => Some(Command::ToggleDrawMode),
            _ => None,
        }
    }

    /// camelCase command name
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Pause => "pause",
            Command::Clear => "clear",
            Command::Randomize => "randomize",
            Command::Save => "save",
            Command::Load => "load",
            Command::SpeedUp => "speedUp",
            Command::SpeedDown => "speedDown",
            Command::ToggleOrientation => "toggleOrientation",
            Command::ToggleDrawMode => "toggleDrawMode",
            Command::ToggleCell { .. } => "toggleCell",
            Command::PaintCell { .. } => "paintCell",
            Command::SelectPattern(_) => "selectPattern",
            Command::ReleaseAt { .. } => "releaseAt",
        }
    }
}
