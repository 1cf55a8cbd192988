//! Shared types module - board dimensions, colours, input and change records
//!
//! Everything here is plain data with no I/O, so it can be used by the pure
//! simulation core, the async loop, and any presentation layer alike.
//!
//! # Coordinates
//!
//! The playfield is 10 columns by 20 rows. `x` grows to the right and `y` grows
//! **upward**: row 0 is the floor and row 19 is the top of the board. Pieces spawn
//! near the top and move toward row 0.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_TICK_MS` | 500 | Pause between gravity shifts of the falling piece |
//! | `RANDOM_FILL_TICK_MS` | 10 | Pause between full-board repaints in the random demo |
//! | `FLOOR_Y` | 0 | A piece stops falling once its origin reaches this row |
//!
//! # Examples
//!
//! ```
//! use tetris_board_types::{CellChange, CellChanges, Direction, Rgb, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//!
//! // Parse input (case-insensitive)
//! assert_eq!(Direction::from_str("Left"), Some(Direction::Left));
//! assert_eq!(Direction::from_str("up"), None);
//! assert_eq!(Direction::Down.delta(), (0, -1));
//!
//! // Build a batch
//! let mut batch = CellChanges::new();
//! batch.push(CellChange::new(2, 3, Some(Rgb::RED)));
//! assert_eq!(batch.len(), 1);
//! ```

use arrayvec::ArrayVec;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Number of cells in a piece's 4x4 bounding box
pub const PIECE_MASK_LEN: usize = 16;

/// Side length of a piece's bounding box
pub const PIECE_BOX_SIZE: i8 = 4;

/// Bounding-box origin of a freshly spawned piece (x, y)
pub const SPAWN_POSITION: (i8, i8) = (5, 18);

/// Pause between gravity shifts in the falling-piece loop
pub const FALL_TICK_MS: u32 = 500;

/// Pause between repaints in the random-fill demo loop
pub const RANDOM_FILL_TICK_MS: u32 = 10;

/// Row at which a falling piece stops and the next one spawns
pub const FLOOR_Y: i8 = 0;

/// 24-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const DARK_BLUE: Rgb = Rgb::new(0, 0, 139);
    pub const DARK_GRAY: Rgb = Rgb::new(169, 169, 169);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
    pub const PURPLE: Rgb = Rgb::new(128, 0, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colours used by the random-fill demo.
pub const PALETTE: [Rgb; 7] = [
    Rgb::RED,
    Rgb::CYAN,
    Rgb::YELLOW,
    Rgb::DARK_BLUE,
    Rgb::GREEN,
    Rgb::ORANGE,
    Rgb::PURPLE,
];

/// A cell on the board
///
/// - `None`: Empty cell
/// - `Some(Rgb)`: Cell painted with that colour
pub type Cell = Option<Rgb>;

/// Input directions understood by the board
///
/// Anything else coming from an input device is simply not representable and
/// gets dropped at the mapping layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move piece one column left
    Left,
    /// Move piece one column right
    Right,
    /// Move piece one row down
    Down,
}

impl Direction {
    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_board_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("DOWN"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("rotate"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }

    /// Shift applied to the piece origin, in board space (y grows upward)
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
        }
    }
}

/// New value of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub x: i8,
    pub y: i8,
    pub color: Cell,
}

impl CellChange {
    pub const fn new(x: i8, y: i8, color: Cell) -> Self {
        Self { x, y, color }
    }
}

/// Ordered batch of cell changes produced by one shift or tick.
///
/// A batch never names the same cell twice, so its capacity is bounded by the
/// number of board cells and it never allocates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellChanges {
    changes: ArrayVec<CellChange, BOARD_CELLS>,
}

impl CellChanges {
    pub fn new() -> Self {
        Self {
            changes: ArrayVec::new(),
        }
    }

    /// Append a change. Changes past capacity are dropped.
    pub fn push(&mut self, change: CellChange) {
        let pushed = self.changes.try_push(change);
        debug_assert!(pushed.is_ok(), "cell change batch overflow");
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn as_slice(&self) -> &[CellChange] {
        &self.changes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CellChange> {
        self.changes.iter()
    }
}

impl<'a> IntoIterator for &'a CellChanges {
    type Item = &'a CellChange;
    type IntoIter = std::slice::Iter<'a, CellChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

impl FromIterator<CellChange> for CellChanges {
    fn from_iter<I: IntoIterator<Item = CellChange>>(iter: I) -> Self {
        let mut batch = CellChanges::new();
        for change in iter {
            batch.push(change);
        }
        batch
    }
}
