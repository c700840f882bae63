//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the Game of Life rules, the pattern catalog, snapshot
//! persistence and the session controller. It has **no dependencies** on the
//! terminal, making it:
//!
//! - **Deterministic**: Same seed produces identical random soups
//! - **Testable**: Unit tests for every rule and edge case
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size cell matrix with bounds-checked access
//! - [`rules`]: bounded-boundary neighbor counting and the B3/S23 step
//! - [`patterns`]: seed pattern catalog, orientation transforms, clipping placement
//! - [`rng`]: seedable LCG implementing the `rand` traits
//! - [`snapshot`]: fixed little-endian binary layout for save/load
//! - [`session`]: the controller that owns the grid and interprets commands
//!
//! # Rules
//!
//! - A live cell with 2 or 3 live neighbors survives, otherwise it dies
//! - A dead cell with exactly 3 live neighbors becomes alive
//! - Cells outside the grid are permanently dead (no wraparound)
//!
//! # Example
//!
//! ```
//! use tui_life_core::Session;
//! use tui_life_types::{Command, Mode};
//!
//! let mut session = Session::new(10, 10, 12345);
//!
//! // Drop a glider near the top-left corner and let it fly
//! session.apply(Command::SelectPattern("glider".into())).unwrap();
//! session.apply(Command::ReleaseAt { x: 1, y: 1 }).unwrap();
//! session.apply(Command::Start).unwrap();
//! assert_eq!(session.mode(), Mode::Running);
//!
//! assert!(session.tick());
//! assert_eq!(session.generation(), 1);
//! assert_eq!(session.population(), 5);
//! ```

pub mod error;
pub mod grid;
pub mod patterns;
pub mod rng;
pub mod rules;
pub mod session;
pub mod snapshot;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use error::{LifeError, Result};
pub use grid::GridState;
pub use patterns::{lookup, place, rotate, Pattern, PATTERNS};
pub use rng::SimpleRng;
pub use rules::{count_live_neighbors, step};
pub use session::Session;
