//! Pieces module - 4x4 occupancy masks
//!
//! A piece is a row-major mask of 16 booleans over a 4x4 bounding box plus one
//! fill colour. Mask index `i` sits at box offset `(i % 4, i / 4)`, so row 0 of
//! the mask is the bottom row of the box in board space.

use crate::types::{Rgb, PIECE_BOX_SIZE, PIECE_MASK_LEN};

/// Occupancy of a piece's bounding box, row-major
pub type PieceMask = [bool; PIECE_MASK_LEN];

/// Offset of a mask cell relative to the piece origin
pub type MaskOffset = (i8, i8);

/// J-like shape: a three-tall column with a foot to the right on top.
///
/// ```text
/// row 2: X X . .
/// row 1: X . . .
/// row 0: X . . .
/// ```
pub const J_MASK: PieceMask = [
    true, false, false, false, //
    true, false, false, false, //
    true, true, false, false, //
    false, false, false, false, //
];

/// The only piece the spawner produces.
pub const J_PIECE: Piece = Piece::new(J_MASK, Rgb::DARK_BLUE);

/// Immutable falling shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    mask: PieceMask,
    color: Rgb,
}

impl Piece {
    pub const fn new(mask: PieceMask, color: Rgb) -> Self {
        Self { mask, color }
    }

    pub fn mask(&self) -> &PieceMask {
        &self.mask
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Whether mask cell `i` is occupied. Indices past the mask are empty.
    pub fn is_occupied(&self, i: usize) -> bool {
        self.mask.get(i).copied().unwrap_or(false)
    }

    /// Number of occupied mask cells
    pub fn cell_count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }

    /// Offsets of occupied mask cells, in mask order
    pub fn occupied_offsets(&self) -> impl Iterator<Item = MaskOffset> + '_ {
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, &occupied)| occupied)
            .map(|(i, _)| mask_offset(i))
    }
}

/// Box offset of mask index `i`
#[inline(always)]
pub fn mask_offset(i: usize) -> MaskOffset {
    let side = PIECE_BOX_SIZE as usize;
    ((i % side) as i8, (i / side) as i8)
}

/// Produce the next piece to spawn.
pub fn next_piece() -> Piece {
    J_PIECE
}
