use std::fmt;

use crate::color::{Color, Palette};
use crate::geometry::{Cell, CellGeometry, Rect};
use crate::surface::Surface;

/// One cell of the board. Its color is the parity color except while a click
/// highlight is in effect.
#[derive(Clone, Debug, PartialEq)]
pub struct Square {
    cell: Cell,
    palette: Palette,
    geometry: CellGeometry,
    pub color: Color,
}

impl Square {
    pub fn new(cell: Cell, palette: &Palette, geometry: CellGeometry) -> Self {
        Self {
            cell,
            palette: *palette,
            geometry,
            color: canonical_color(cell, palette),
        }
    }

    /// The parity color this square returns to on [`Square::reset`].
    pub fn canonical_color(&self) -> Color {
        canonical_color(self.cell, &self.palette)
    }

    pub fn bounds(&self) -> Rect {
        self.geometry.cell_bounds(self.cell)
    }

    pub fn matches_cell(&self, col: i64, row: i64) -> bool {
        self.cell.col == col && self.cell.row == row
    }

    pub fn reset(&mut self) {
        self.color = self.canonical_color();
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(self.bounds(), self.color);
    }
}

/// Light for even `row + col`, dark for odd.
pub fn canonical_color(cell: Cell, palette: &Palette) -> Color {
    if cell.is_dark() {
        palette.dark
    } else {
        palette.light
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Square(col: {}, row: {}, color: {})",
            self.cell.col, self.cell.row, self.color
        )
    }
}
