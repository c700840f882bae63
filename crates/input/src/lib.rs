//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond key
//! events. It maps `crossterm` key events into [`KeyAction`]s and turns those
//! into [`crate::types::Command`]s using the cursor and pattern-menu state
//! kept by [`InputHandler`].

pub mod handler;
pub mod map;

pub use tui_life_types as types;

pub use handler::{InputContext, InputHandler};
pub use map::{handle_key_event, should_quit, KeyAction};
