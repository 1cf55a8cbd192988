//! Headless sink: streams change batches as JSON lines.
//!
//! One line per batch:
//!
//! ```text
//! {"batch":2,"changes":[{"x":5,"y":19,"color":null},{"x":6,"y":19,"color":null},{"x":5,"y":16,"color":"#00008b"},{"x":6,"y":18,"color":"#00008b"}]}
//! ```

use std::io::Write;

use anyhow::Result;
use log::info;
use serde::Serialize;

use crate::core::Board;
use crate::engine::{ChangeNotifier, GameConfig, GameSession};
use crate::types::{CellChanges, Rgb};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchLine {
    pub batch: u64,
    pub changes: Vec<ChangeLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeLine {
    pub x: i8,
    pub y: i8,
    /// `#rrggbb`, or null for an emptied cell
    pub color: Option<String>,
}

pub fn hex_color(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

pub fn batch_line(batch: u64, changes: &CellChanges) -> BatchLine {
    BatchLine {
        batch,
        changes: changes
            .iter()
            .map(|c| ChangeLine {
                x: c.x,
                y: c.y,
                color: c.color.map(hex_color),
            })
            .collect(),
    }
}

/// Run a session on a fresh board, write its first `ticks` batches to `out`,
/// then stop it and return the final board.
pub async fn run_headless(config: GameConfig, ticks: usize, out: &mut impl Write) -> Result<Board> {
    let notifier = ChangeNotifier::new(config.notify_capacity);
    let mut changes = notifier.subscribe();
    let session = GameSession::spawn(config, Board::new(), notifier);

    let mut written = 0u64;
    while (written as usize) < ticks {
        let Some(batch) = changes.recv().await else {
            break;
        };
        written += 1;
        serde_json::to_writer(&mut *out, &batch_line(written, &batch))?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    let board = session.stop().await?;
    info!("headless run wrote {} batches", written);
    Ok(board)
}
