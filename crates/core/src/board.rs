//! Board module - manages the game grid and the falling piece
//!
//! The board is a 10x20 grid where each cell is empty or painted with a colour.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (bottom to top). New pieces spawn with their box origin at (5, 18).
//!
//! Moving the piece is purely geometric: the old footprint is cleared, the
//! origin advances, and the whole 4x4 box is repainted at the new origin.
//! Nothing checks whether the target cells were already occupied, so a moving
//! piece overwrites whatever it passes over. Out-of-bounds cells are skipped.

use arrayvec::ArrayVec;

use crate::piece::{mask_offset, Piece};
use crate::types::{
    Cell, CellChange, CellChanges, Direction, Rgb, BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH,
    PIECE_MASK_LEN, SPAWN_POSITION,
};

/// Who painted an occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupant {
    /// Part of the currently falling piece
    Piece,
    /// Seed cells and the leftovers of earlier pieces
    Settled,
}

/// Tagged content of a board cell.
///
/// Only the colour is observable through [`CellChanges`]; the owner tag is
/// bookkeeping that shifting never consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Occupied { color: Rgb, owner: Occupant },
}

impl CellState {
    pub fn color(&self) -> Cell {
        match self {
            CellState::Empty => None,
            CellState::Occupied { color, .. } => Some(*color),
        }
    }

    pub fn settled(cell: Cell) -> Self {
        match cell {
            Some(color) => CellState::Occupied {
                color,
                owner: Occupant::Settled,
            },
            None => CellState::Empty,
        }
    }
}

/// Cells that are pre-painted on every new board.
pub const SEED_CELLS: [(i8, i8, Rgb); 4] = [
    (0, 0, Rgb::RED),
    (1, 0, Rgb::CYAN),
    (2, 0, Rgb::YELLOW),
    (3, 0, Rgb::RED),
];

/// A shift writes at most the occupied cells of the old footprint plus the
/// whole box at the new origin.
const MAX_TOUCHED: usize = 2 * PIECE_MASK_LEN;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [CellState; BOARD_CELLS],
    /// Falling piece, if one has been spawned
    active: Option<Piece>,
    /// Box origin of the falling piece
    position: (i8, i8),
}

impl Board {
    /// Create a new board holding only the seed cells
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (x, y, color) in SEED_CELLS {
            board.set(x, y, Some(color));
        }
        board
    }

    /// Create a board with every cell empty
    pub fn empty() -> Self {
        Self {
            cells: [CellState::Empty; BOARD_CELLS],
            active: None,
            position: SPAWN_POSITION,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell colour at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx].color())
    }

    /// Get tagged cell state at position (x, y)
    pub fn state(&self, x: i8, y: i8) -> Option<CellState> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y); painted cells count as settled.
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = CellState::settled(cell);
                true
            }
            None => false,
        }
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Colour of every cell, row-major
    pub fn snapshot(&self) -> [Cell; BOARD_CELLS] {
        let mut out = [None; BOARD_CELLS];
        for (dst, src) in out.iter_mut().zip(self.cells.iter()) {
            *dst = src.color();
        }
        out
    }

    /// The falling piece, if any
    pub fn active_piece(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// Box origin of the falling piece
    pub fn position(&self) -> (i8, i8) {
        self.position
    }

    /// Absolute coordinates of the falling piece's occupied cells, including
    /// ones that currently hang outside the board.
    pub fn footprint(&self) -> ArrayVec<(i8, i8), PIECE_MASK_LEN> {
        let mut out = ArrayVec::new();
        if let Some(piece) = &self.active {
            let (x0, y0) = self.position;
            for (px, py) in piece.occupied_offsets() {
                if let (Some(x), Some(y)) = (x0.checked_add(px), y0.checked_add(py)) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    /// Row of the lowest occupied piece cell
    pub fn lowest_piece_y(&self) -> Option<i8> {
        self.footprint().iter().map(|&(_, y)| y).min()
    }

    /// Make `piece` the falling piece with its origin at `at`.
    ///
    /// Nothing is painted until the first shift. Cells still painted by the
    /// previous piece are handed over to the settled stack.
    pub fn spawn_piece(&mut self, piece: Piece, at: (i8, i8)) {
        for (x, y) in self.footprint() {
            if let Some(idx) = Self::index(x, y) {
                if let CellState::Occupied { owner, .. } = &mut self.cells[idx] {
                    *owner = Occupant::Settled;
                }
            }
        }
        self.active = Some(piece);
        self.position = at;
    }

    /// Translate an input direction into a shift of the falling piece.
    pub fn handle_input(&mut self, direction: Direction) -> Option<CellChanges> {
        let (dx, dy) = direction.delta();
        self.shift_piece(dx, dy)
    }

    /// Move the falling piece by (dx, dy).
    ///
    /// Returns the cells whose colour differs from before the shift, ordered by
    /// the phase that last changed them: clear-phase cells first, then
    /// fill-phase cells. Cells that end up with the colour they started with
    /// are not reported. Returns None if no piece is active.
    ///
    /// The origin may leave the board in any direction; once it reaches the
    /// i8 limits further shifts that way leave it in place and report nothing.
    pub fn shift_piece(&mut self, dx: i8, dy: i8) -> Option<CellChanges> {
        let piece = self.active?;
        let mut log = ShiftLog::default();

        // Clear the current footprint
        let (x0, y0) = self.position;
        for (px, py) in piece.occupied_offsets() {
            self.paint(&mut log, x0.checked_add(px), y0.checked_add(py), CellState::Empty);
        }

        // Saturate at the i8 limits; a wrapped origin would reappear on the board.
        self.position = (x0.saturating_add(dx), y0.saturating_add(dy));

        // Repaint the whole box at the new origin
        let (x1, y1) = self.position;
        for i in 0..PIECE_MASK_LEN {
            let (px, py) = mask_offset(i);
            let state = if piece.is_occupied(i) {
                CellState::Occupied {
                    color: piece.color(),
                    owner: Occupant::Piece,
                }
            } else {
                CellState::Empty
            };
            self.paint(&mut log, x1.checked_add(px), y1.checked_add(py), state);
        }

        Some(log.net_changes(&self.cells))
    }

    /// Overwrite every cell with the value `f` picks for it.
    ///
    /// Returns the cells whose colour changed, in row-major order.
    pub fn repaint_with(&mut self, mut f: impl FnMut(i8, i8) -> Cell) -> CellChanges {
        let mut changes = CellChanges::new();
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                let cell = f(x, y);
                if let Some(idx) = Self::index(x, y) {
                    if self.cells[idx].color() != cell {
                        changes.push(CellChange::new(x, y, cell));
                    }
                    self.cells[idx] = CellState::settled(cell);
                }
            }
        }
        changes
    }

    /// Write `state` at (x, y) and log the write if it changed the colour.
    /// Out-of-bounds (or overflowing) coordinates are skipped.
    fn paint(&mut self, log: &mut ShiftLog, x: Option<i8>, y: Option<i8>, state: CellState) {
        let (Some(x), Some(y)) = (x, y) else {
            return;
        };
        let Some(idx) = Self::index(x, y) else {
            return;
        };
        let before = self.cells[idx].color();
        if before != state.color() {
            log.record(idx, x, y, before);
        }
        self.cells[idx] = state;
    }
}

/// Colour-changing writes made during one shift.
#[derive(Default)]
struct ShiftLog {
    /// Every colour-changing write, in order
    writes: ArrayVec<(usize, i8, i8), MAX_TOUCHED>,
    /// Colour of each written cell before the shift started
    original: ArrayVec<(usize, Cell), MAX_TOUCHED>,
}

impl ShiftLog {
    fn record(&mut self, idx: usize, x: i8, y: i8, before: Cell) {
        if !self.original.iter().any(|&(i, _)| i == idx) {
            self.original.push((idx, before));
        }
        self.writes.push((idx, x, y));
    }

    /// One change per cell whose final colour differs from its original,
    /// positioned at that cell's last write.
    fn net_changes(&self, cells: &[CellState; BOARD_CELLS]) -> CellChanges {
        let mut changes = CellChanges::new();
        for (n, &(idx, x, y)) in self.writes.iter().enumerate() {
            let rewritten_later = self.writes[n + 1..].iter().any(|&(i, ..)| i == idx);
            if rewritten_later {
                continue;
            }
            let now = cells[idx].color();
            let was = self
                .original
                .iter()
                .find(|&&(i, _)| i == idx)
                .map(|&(_, c)| c);
            if was != Some(now) {
                changes.push(CellChange::new(x, y, now));
            }
        }
        changes
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
