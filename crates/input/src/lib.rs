//! Terminal input module.
//!
//! Maps `crossterm` key events onto the three [`types::Direction`] values the
//! board understands. Every other key is ignored, except the quit keys which
//! the runner checks separately.

pub mod map;

pub use tetris_board_types as types;

pub use map::{map_key, should_quit};
