//! RNG module - deterministic random colours for the repaint demo
//!
//! A simple LCG keeps the random-fill loop reproducible from a seed, which
//! matters more for tests than statistical quality does.

use crate::types::{Cell, PALETTE};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far less periodic than the low ones
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Pick a palette colour, or empty with the same odds as any one colour.
    pub fn next_cell(&mut self) -> Cell {
        let pick = self.next_range(PALETTE.len() as u32 + 1) as usize;
        PALETTE.get(pick).copied()
    }
}
