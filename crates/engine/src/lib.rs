//! Engine module - drives the board over time.
//!
//! Bridges the pure [`core`] board with tokio: a single task owns the board,
//! advances it on a fixed cadence, and publishes one [`types::CellChanges`]
//! batch per shift. Presentation layers subscribe to those batches and push
//! input directions back through a bounded channel.
//!
//! # Tasks and channels
//!
//! ```text
//!  input (mpsc) ──▶ GameLoop task ──▶ ChangeNotifier (broadcast) ──▶ subscribers
//!  stop (oneshot) ─┘
//! ```
//!
//! - The loop suspends exactly once per tick, in its pause
//! - Input received during the pause is applied right away as its own batch
//! - Dropping the [`GameSession`] drops the stop sender, which also ends the loop
//!
//! # Example
//!
//! ```no_run
//! use tetris_board_engine::{GameConfig, GameSession};
//! use tetris_board_engine::types::Direction;
//!
//! # async fn demo() -> Result<(), tetris_board_engine::SessionError> {
//! let session = GameSession::start(GameConfig::default());
//! let mut changes = session.subscribe();
//!
//! let queued = session.send_input(Direction::Left).await;
//! assert!(queued, "loop ended before the input was queued");
//! if let Some(batch) = changes.recv().await {
//!     println!("{} cells changed", batch.len());
//! }
//!
//! let board = session.stop().await?;
//! # let _ = board;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod game_loop;
pub mod notifier;
pub mod session;

pub use tetris_board_core as core;
pub use tetris_board_types as types;

pub use config::{GameConfig, LoopMode};
pub use error::{ConfigError, SessionError};
pub use game_loop::GameLoop;
pub use notifier::{ChangeNotifier, Subscription};
pub use session::GameSession;
