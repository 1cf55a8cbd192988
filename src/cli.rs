//! Command-line arguments.
//!
//! ```text
//! tetris-board [--mode falling|random]
//! tetris-board headless [--ticks N] [--mode falling|random]
//! ```

use anyhow::{anyhow, Result};

use crate::engine::{GameConfig, LoopMode};

/// Batches printed by `headless` when `--ticks` is not given
pub const DEFAULT_HEADLESS_TICKS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Draw the board in the terminal and read the keyboard
    Interactive,
    /// Print the first `ticks` batches as JSON lines and exit
    Headless { ticks: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub run: RunMode,
    pub mode: Option<LoopMode>,
}

impl CliOptions {
    /// Apply command-line overrides on top of an environment config.
    ///
    /// Switching mode also switches to that mode's default tick.
    pub fn apply(&self, config: &mut GameConfig) {
        if let Some(mode) = self.mode {
            if mode != config.mode {
                config.mode = mode;
                config.tick_ms = mode.default_tick_ms();
            }
        }
    }
}

pub fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut rest = args;
    let mut run = RunMode::Interactive;
    if rest.first().map(String::as_str) == Some("headless") {
        run = RunMode::Headless {
            ticks: DEFAULT_HEADLESS_TICKS,
        };
        rest = &rest[1..];
    }

    let mut mode = None;
    let mut i = 0usize;
    while i < rest.len() {
        match rest[i].as_str() {
            "--mode" => {
                i += 1;
                let v = rest
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --mode"))?;
                mode = Some(
                    LoopMode::from_str(v).ok_or_else(|| anyhow!("invalid --mode value: {}", v))?,
                );
            }
            "--ticks" => {
                let RunMode::Headless { ticks } = &mut run else {
                    return Err(anyhow!("--ticks is only valid with `headless`"));
                };
                i += 1;
                let v = rest
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --ticks"))?;
                *ticks = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("invalid --ticks value: {}", v))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(CliOptions { run, mode })
}
