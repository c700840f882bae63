//! Terminal renderer for the Life front end.
//!
//! This is a small rendering layer that avoids widget/layout libraries and
//! instead renders into a framebuffer that is flushed to the terminal.
//!
//! - [`life_view`] turns a session plus cursor state into glyphs (pure)
//! - [`renderer`] writes framebuffers to the terminal, diffing frames
//! - cells are drawn 2 characters wide to keep them roughly square

pub mod fb;
pub mod life_view;
pub mod renderer;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use life_view::{scroll_origin, LifeView, ViewState, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
