//! BoardView: a display-side mirror of the board.
//!
//! Starts from a board snapshot and is then kept current purely by applying
//! change batches. Empty cells are stored as the background colour, so the
//! view never needs to know what "empty" means.

use crate::brush::BACKGROUND;
use crate::core::Board;
use crate::types::{Cell, CellChanges, Rgb, BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Display colours, `x + WIDTH * y`
    colors: [Rgb; BOARD_CELLS],
    /// Bumped whenever an applied batch changed at least one colour
    revision: u64,
    batches: u64,
}

impl BoardView {
    /// Mirror of a row-major board snapshot.
    pub fn from_cells(cells: &[Cell; BOARD_CELLS]) -> Self {
        let mut colors = [BACKGROUND; BOARD_CELLS];
        for (dst, cell) in colors.iter_mut().zip(cells.iter()) {
            *dst = cell.unwrap_or(BACKGROUND);
        }
        Self {
            colors,
            revision: 0,
            batches: 0,
        }
    }

    pub fn from_board(board: &Board) -> Self {
        Self::from_cells(&board.snapshot())
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some(x as usize + BOARD_WIDTH as usize * y as usize)
    }

    pub fn color(&self, x: i8, y: i8) -> Option<Rgb> {
        Self::index(x, y).map(|i| self.colors[i])
    }

    /// Apply one batch. Returns how many displayed colours actually changed;
    /// out-of-range entries are ignored.
    pub fn apply(&mut self, changes: &CellChanges) -> usize {
        self.batches += 1;
        let mut changed = 0;
        for change in changes {
            let Some(i) = Self::index(change.x, change.y) else {
                continue;
            };
            let color = change.color.unwrap_or(BACKGROUND);
            if self.colors[i] != color {
                self.colors[i] = color;
                changed += 1;
            }
        }
        if changed > 0 {
            self.revision += 1;
        }
        changed
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Batches applied so far, including ones that changed nothing
    pub fn batches(&self) -> u64 {
        self.batches
    }
}
