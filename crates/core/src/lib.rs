//! Core board logic - pure, deterministic, and testable
//!
//! This crate contains the grid, the piece description, and the shift algorithm.
//! It has **zero dependencies** on timers, channels, UI, or I/O, making it:
//!
//! - **Deterministic**: The same sequence of shifts always yields the same batches
//! - **Testable**: Every rule is exercised by plain unit tests
//! - **Fast**: Shifts and repaints never allocate
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, seed cells, piece spawn and shift with change tracking
//! - [`piece`]: 4x4 occupancy masks and the single spawnable shape
//! - [`rng`]: LCG used by the random repaint demo
//!
//! # Rules
//!
//! This is a falling-piece prototype, not a full game:
//!
//! - **No collision**: A moving piece overwrites whatever it passes over
//! - **No line clears, scoring or rotation**
//! - **Silent clipping**: Cells outside the board are skipped, never reported
//!
//! # Example
//!
//! ```
//! use tetris_board_core::{next_piece, Board};
//! use tetris_board_core::types::{Direction, Rgb, SPAWN_POSITION};
//!
//! let mut board = Board::new();
//! assert_eq!(board.get(1, 0), Some(Some(Rgb::CYAN)));
//!
//! board.spawn_piece(next_piece(), SPAWN_POSITION);
//! let changes = board.shift_piece(0, -1).unwrap();
//! assert_eq!(changes.len(), 4);
//!
//! // Sideways input produces its own batch
//! let changes = board.handle_input(Direction::Left).unwrap();
//! assert!(!changes.is_empty());
//! ```

pub mod board;
pub mod piece;
pub mod rng;

pub use tetris_board_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, CellState, Occupant, SEED_CELLS};
pub use piece::{mask_offset, next_piece, Piece, PieceMask, J_MASK, J_PIECE};
pub use rng::SimpleRng;
