//! Grid cells, drawing rectangles, and the per-board cell geometry.

use std::fmt;

/// A `(col, row)` grid coordinate. Only cells inside `[0, grid_size)²` belong
/// to a board; [`crate::Board::resolve_cell`] can produce cells outside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: i64,
    pub row: i64,
}

impl Cell {
    pub const fn new(col: i64, row: i64) -> Self {
        Self { col, row }
    }

    /// Row/column parity: `false` for light cells, `true` for dark ones.
    pub fn is_dark(self) -> bool {
        (self.row + self.col).rem_euclid(2) == 1
    }

    pub fn in_grid(self, grid_size: u32) -> bool {
        let n = i64::from(grid_size);
        (0..n).contains(&self.col) && (0..n).contains(&self.row)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// An axis-aligned rectangle given by its top-left and bottom-right corners,
/// in board pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Fraction of a cell's side a piece spans.
pub const PIECE_SCALE: f64 = 0.9;

/// Side length of one cell, fixed when the board is built and handed to every
/// square and piece on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellGeometry {
    cell_length: u32,
}

impl CellGeometry {
    /// `size / grid_size`, truncated. A board of 801 px over 8 cells is laid
    /// out on 100 px cells and leaves one pixel uncovered.
    pub fn new(size: u32, grid_size: u32) -> Self {
        Self {
            cell_length: size / grid_size,
        }
    }

    pub fn cell_length(&self) -> u32 {
        self.cell_length
    }

    /// Full rectangle covered by `cell`.
    pub fn cell_bounds(&self, cell: Cell) -> Rect {
        let length = i64::from(self.cell_length);
        let x1 = cell.col * length;
        let y1 = cell.row * length;
        Rect::new(x1 as f64, y1 as f64, (x1 + length) as f64, (y1 + length) as f64)
    }

    /// Rectangle a piece on `cell` is inscribed in.
    ///
    /// The offset from the cell corner is rounded to whole pixels but the far
    /// corner adds the unrounded scaled length, so the two corners need not be
    /// symmetric inside the cell.
    pub fn inset_bounds(&self, cell: Cell) -> Rect {
        let length = f64::from(self.cell_length);
        let offset = (length * ((1.0 - PIECE_SCALE) / 2.0)).round_ties_even();
        let reduced = length * PIECE_SCALE;

        let x1 = cell.col as f64 * length + offset;
        let y1 = cell.row as f64 * length + offset;
        Rect::new(x1, y1, x1 + reduced, y1 + reduced)
    }

    /// Cell containing the pixel `(x, y)`. Floor division, so pixels left of
    /// or above the board land on negative cells rather than cell zero.
    ///
    /// `cell_length` must be non-zero; [`crate::BoardConfig::validate`]
    /// guarantees it for every constructed board.
    pub fn resolve(&self, x: i64, y: i64) -> Cell {
        let length = i64::from(self.cell_length);
        Cell::new(x.div_euclid(length), y.div_euclid(length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_length_truncates() {
        assert_eq!(CellGeometry::new(800, 8).cell_length(), 100);
        assert_eq!(CellGeometry::new(801, 8).cell_length(), 100);
        assert_eq!(CellGeometry::new(807, 8).cell_length(), 100);
    }

    #[test]
    fn cell_bounds_tile_the_grid() {
        let geometry = CellGeometry::new(800, 8);
        assert_eq!(
            geometry.cell_bounds(Cell::new(0, 0)),
            Rect::new(0.0, 0.0, 100.0, 100.0)
        );
        assert_eq!(
            geometry.cell_bounds(Cell::new(3, 7)),
            Rect::new(300.0, 700.0, 400.0, 800.0)
        );
    }

    #[test]
    fn inset_bounds_for_hundred_pixel_cells() {
        let geometry = CellGeometry::new(800, 8);
        let rect = geometry.inset_bounds(Cell::new(2, 1));
        assert_eq!(rect, Rect::new(205.0, 105.0, 295.0, 195.0));
        assert_eq!(rect.x2 - rect.x1, 90.0);
    }

    #[test]
    fn inset_offset_is_rounded_but_far_corner_is_not() {
        // 75 px cells: offset 3.75 rounds to 4, reduced length stays 67.5.
        let geometry = CellGeometry::new(600, 8);
        let rect = geometry.inset_bounds(Cell::new(0, 0));
        assert_eq!(rect.x1, 4.0);
        assert_eq!(rect.x2, 4.0 + 67.5);
        assert!(75.0 - rect.x2 < rect.x1);
    }

    #[test]
    fn resolve_floors_negative_pixels() {
        let geometry = CellGeometry::new(800, 8);
        assert_eq!(geometry.resolve(-1, 0), Cell::new(-1, 0));
        assert_eq!(geometry.resolve(0, -100), Cell::new(0, -1));
        assert_eq!(geometry.resolve(-101, 50), Cell::new(-2, 0));
    }

    #[test]
    fn parity_and_range() {
        assert!(!Cell::new(0, 0).is_dark());
        assert!(Cell::new(1, 0).is_dark());
        assert!(Cell::new(7, 7).in_grid(8));
        assert!(!Cell::new(8, 0).in_grid(8));
        assert!(!Cell::new(0, -1).in_grid(8));
    }
}
