//! Falling-piece board prototype (workspace facade crate).
//!
//! Re-exports the member crates under `tetris_board::{core,engine,input,term,types}`
//! and hosts the pieces of the binary that are worth testing on their own:
//! argument parsing and the headless JSON-lines sink.

pub mod cli;
pub mod headless;

pub use tetris_board_core as core;
pub use tetris_board_engine as engine;
pub use tetris_board_input as input;
pub use tetris_board_term as term;
pub use tetris_board_types as types;
