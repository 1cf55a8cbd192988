//! Falling-piece board runner (default binary).
//!
//! Interactive mode draws the board with crossterm and forwards arrow keys to
//! the game loop; `headless` prints change batches as JSON lines instead.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::runtime::Runtime;

use tetris_board::cli::{parse_args, RunMode};
use tetris_board::core::Board;
use tetris_board::engine::{ChangeNotifier, GameConfig, GameSession};
use tetris_board::headless::run_headless;
use tetris_board::input::{map_key, should_quit};
use tetris_board::term::{BoardView, FrameBuffer, GameView, StatusView, TerminalRenderer, Viewport};

/// How long to wait for a key before checking for new batches
const INPUT_POLL_MS: u64 = 16;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_args(&args)?;
    let mut config = GameConfig::from_env()?;
    opts.apply(&mut config);

    let rt = Runtime::new()?;
    match opts.run {
        RunMode::Headless { ticks } => {
            let mut stdout = io::stdout().lock();
            rt.block_on(run_headless(config, ticks, &mut stdout))?;
            Ok(())
        }
        RunMode::Interactive => {
            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run(&rt, config, &mut term);

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
    }
}

fn run(rt: &Runtime, config: GameConfig, term: &mut TerminalRenderer) -> Result<()> {
    let _guard = rt.enter();

    let board = Board::new();
    let mut view = BoardView::from_board(&board);
    let notifier = ChangeNotifier::new(config.notify_capacity);
    let mut changes = notifier.subscribe();
    let mode = config.mode.as_str();
    let session = GameSession::spawn(config, board, notifier);

    let game_view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut drawn: Option<(u64, u64)> = None;

    loop {
        while let Some(batch) = changes.try_recv() {
            view.apply(&batch);
        }

        let key = (view.revision(), view.batches());
        if drawn != Some(key) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let status = StatusView {
                mode,
                batches: view.batches(),
            };
            game_view.render_into(&view, Some(&status), Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            drawn = Some(key);
        }

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(direction) = map_key(key) {
                        session.try_send_input(direction);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    drawn = None;
                }
                _ => {}
            }
        }
    }

    rt.block_on(session.stop())?;
    Ok(())
}
