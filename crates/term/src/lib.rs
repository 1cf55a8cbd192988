//! Terminal presentation module.
//!
//! A thin consumer of the board's change stream:
//!
//! - [`BoardView`] mirrors the board from a snapshot plus applied batches
//! - [`BrushConverter`] turns board colours into terminal styles
//! - [`GameView`] lays the mirror out into a [`FrameBuffer`]
//! - [`TerminalRenderer`] flushes frames to the terminal, redrawing only what changed
//!
//! Nothing here can mutate the board.

pub mod board_view;
pub mod brush;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_board_core as core;
pub use tetris_board_types as types;

pub use board_view::BoardView;
pub use brush::{BrushConverter, BACKGROUND};
pub use fb::{CellStyle, FrameBuffer, Glyph};
pub use game_view::{GameView, StatusView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
