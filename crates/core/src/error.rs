//! Error taxonomy for the simulation core.

use thiserror::Error;

/// Errors reported by grid access, snapshot decoding and session commands.
///
/// None of these are fatal: every failing operation leaves the session
/// in the state it had before the call.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfRange {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    #[error("corrupt snapshot: {0}")]
    CorruptData(String),
    #[error("unknown pattern: {0}")]
    InvalidPatternName(String),
    #[error("snapshot i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
