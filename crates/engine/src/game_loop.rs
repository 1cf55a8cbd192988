//! Timer-driven game loop.
//!
//! The loop owns the [`Board`] and is the only thing that mutates it. Each tick
//! it applies one shift (or repaint), publishes the resulting batch, and then
//! suspends for the configured interval. The pause is the single suspension
//! point: while waiting it also applies queued input directions, each as its
//! own shift and batch, and watches for the stop signal.

use log::{debug, info};
use tokio::sync::{mpsc, oneshot};

use crate::config::{GameConfig, LoopMode};
use crate::core::{next_piece, Board, SimpleRng};
use crate::notifier::ChangeNotifier;
use crate::types::{CellChanges, Direction};

/// How a pause ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pause {
    Elapsed,
    Stopped,
}

pub struct GameLoop {
    board: Board,
    config: GameConfig,
    notifier: ChangeNotifier,
    rng: SimpleRng,
    ticks: u64,
    pieces: u64,
}

impl GameLoop {
    pub fn new(config: GameConfig, board: Board, notifier: ChangeNotifier) -> Self {
        let rng = SimpleRng::new(config.seed);
        Self {
            board,
            config,
            notifier,
            rng,
            ticks: 0,
            pieces: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Timer-driven ticks applied so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Pieces spawned so far
    pub fn pieces(&self) -> u64 {
        self.pieces
    }

    /// Put a fresh piece at the spawn point.
    pub fn spawn(&mut self) {
        self.board.spawn_piece(next_piece(), self.config.spawn);
        self.pieces += 1;
        debug!(
            "spawned piece #{} at {:?}",
            self.pieces, self.config.spawn
        );
    }

    /// Shift the falling piece one row down and publish the batch.
    ///
    /// Returns true while the piece is still above the floor row.
    pub fn fall_step(&mut self) -> bool {
        self.ticks += 1;
        if let Some(changes) = self.board.shift_piece(0, -1) {
            self.publish(changes);
        }
        self.above_floor()
    }

    /// Repaint every cell from the RNG and publish the batch.
    pub fn repaint_step(&mut self) {
        self.ticks += 1;
        let rng = &mut self.rng;
        let changes = self.board.repaint_with(|_, _| rng.next_cell());
        self.publish(changes);
    }

    /// Apply one input direction immediately, outside the timer cadence.
    pub fn apply_input(&mut self, direction: Direction) {
        if let Some(changes) = self.board.handle_input(direction) {
            self.publish(changes);
        }
    }

    fn above_floor(&self) -> bool {
        self.board.position().1 > self.config.floor_y
    }

    fn publish(&self, changes: CellChanges) {
        self.notifier.publish(changes);
    }

    /// Run until the stop signal fires (or its sender is dropped).
    ///
    /// Returns the board as it was when the loop stopped.
    pub async fn run(
        mut self,
        mut input_rx: mpsc::Receiver<Direction>,
        mut stop_rx: oneshot::Receiver<()>,
    ) -> Board {
        info!(
            "game loop started: mode={} tick={}ms",
            self.config.mode.as_str(),
            self.config.tick_ms
        );

        match self.config.mode {
            LoopMode::Falling => 'session: loop {
                self.spawn();
                loop {
                    self.fall_step();
                    if self.pause(&mut input_rx, &mut stop_rx).await == Pause::Stopped {
                        break 'session;
                    }
                    // Input during the pause may have moved the piece too
                    if !self.above_floor() {
                        break;
                    }
                }
            },
            LoopMode::RandomFill => loop {
                self.repaint_step();
                if self.pause(&mut input_rx, &mut stop_rx).await == Pause::Stopped {
                    break;
                }
            },
        }

        info!(
            "game loop stopped after {} ticks, {} pieces",
            self.ticks, self.pieces
        );
        self.board
    }

    async fn pause(
        &mut self,
        input_rx: &mut mpsc::Receiver<Direction>,
        stop_rx: &mut oneshot::Receiver<()>,
    ) -> Pause {
        let sleep = tokio::time::sleep(self.config.tick());
        tokio::pin!(sleep);
        let mut inputs_open = true;

        loop {
            tokio::select! {
                biased;
                _ = &mut *stop_rx => return Pause::Stopped,
                received = input_rx.recv(), if inputs_open => match received {
                    Some(direction) => self.apply_input(direction),
                    None => inputs_open = false,
                },
                _ = &mut sleep => return Pause::Elapsed,
            }
        }
    }
}
