//! Colour-to-style conversion for board cells.

use crate::fb::CellStyle;
use crate::types::{Cell, Rgb};

/// Colour shown for empty cells
pub const BACKGROUND: Rgb = Rgb::DARK_GRAY;

/// Turns board colours into terminal styles.
///
/// Conversion is one-way: a style cannot be mapped back to a board colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushConverter {
    background: Rgb,
}

impl Default for BrushConverter {
    fn default() -> Self {
        Self::new(BACKGROUND)
    }
}

impl BrushConverter {
    pub const fn new(background: Rgb) -> Self {
        Self { background }
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Solid style painted with `color`.
    pub fn convert(&self, color: Rgb) -> CellStyle {
        CellStyle::solid(color)
    }

    /// Like [`convert`](Self::convert), with empty cells drawn as background.
    pub fn convert_cell(&self, cell: Cell) -> CellStyle {
        self.convert(cell.unwrap_or(self.background))
    }

    /// Not supported; nothing in the view layer writes styles back.
    pub fn convert_back(&self, _style: CellStyle) -> Rgb {
        unimplemented!("BrushConverter only converts colours to styles")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_colour_to_solid_style() {
        let brush = BrushConverter::default();
        let style = brush.convert(Rgb::RED);
        assert_eq!(style.fg, Rgb::RED);
        assert_eq!(style.bg, Rgb::RED);
    }

    #[test]
    fn empty_cell_uses_background() {
        let brush = BrushConverter::default();
        assert_eq!(brush.convert_cell(None), CellStyle::solid(BACKGROUND));
        assert_eq!(brush.convert_cell(Some(Rgb::CYAN)), CellStyle::solid(Rgb::CYAN));
    }

    #[test]
    #[should_panic(expected = "only converts colours to styles")]
    fn convert_back_is_unsupported() {
        let brush = BrushConverter::default();
        brush.convert_back(CellStyle::default());
    }
}
