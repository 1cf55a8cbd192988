//! Game session - a running [`GameLoop`] task plus the handles to talk to it.
//!
//! Presentation code never touches the board directly: it subscribes to change
//! batches and forwards input directions through a bounded channel.

use log::debug;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::config::GameConfig;
use crate::core::Board;
use crate::error::SessionError;
use crate::game_loop::GameLoop;
use crate::notifier::{ChangeNotifier, Subscription};
use crate::types::Direction;

pub struct GameSession {
    input_tx: mpsc::Sender<Direction>,
    notifier: ChangeNotifier,
    stop_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<Board>,
}

impl GameSession {
    /// Start a loop on a freshly seeded board.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(config: GameConfig) -> Self {
        let notifier = ChangeNotifier::new(config.notify_capacity);
        Self::spawn(config, Board::new(), notifier)
    }

    /// Start a loop on `board`, publishing through `notifier`.
    ///
    /// Subscribe on `notifier` beforehand to be sure of seeing the first batch.
    pub fn spawn(config: GameConfig, board: Board, notifier: ChangeNotifier) -> Self {
        let (input_tx, input_rx) = mpsc::channel(config.max_pending_input.max(1));
        let (stop_tx, stop_rx) = oneshot::channel();

        let game = GameLoop::new(config, board, notifier.clone());
        let task = tokio::spawn(game.run(input_rx, stop_rx));

        Self {
            input_tx,
            notifier,
            stop_tx: Some(stop_tx),
            task,
        }
    }

    pub fn subscribe(&self) -> Subscription {
        self.notifier.subscribe()
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    /// Sender for input directions; can be handed to an input thread.
    pub fn input(&self) -> mpsc::Sender<Direction> {
        self.input_tx.clone()
    }

    /// Queue a direction without waiting. Returns false if the queue is full
    /// or the loop has ended.
    pub fn try_send_input(&self, direction: Direction) -> bool {
        match self.input_tx.try_send(direction) {
            Ok(()) => true,
            Err(e) => {
                debug!("dropped input {}: {}", direction.as_str(), e);
                false
            }
        }
    }

    /// Queue a direction, waiting for room. Returns false if the loop has ended.
    pub async fn send_input(&self, direction: Direction) -> bool {
        self.input_tx.send(direction).await.is_ok()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Signal the loop to stop at its next pause and wait for it.
    pub async fn stop(mut self) -> Result<Board, SessionError> {
        if let Some(stop_tx) = self.stop_tx.take() {
            // The loop may already be gone; the join below reports that.
            let _ = stop_tx.send(());
        }
        Ok(self.task.await?)
    }
}
