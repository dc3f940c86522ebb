use thiserror::Error;

use crate::geometry::Cell;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Pointer coordinates resolved to a cell outside the grid.
    #[error("cell {cell} is outside the {grid_size}x{grid_size} grid")]
    CellOutOfRange { cell: Cell, grid_size: u32 },

    /// No square at the requested cell. Every cell accepted by
    /// [`crate::Board::cell_at`] has one, so a click reaching this is a bug.
    #[error("square not found for cell {cell}")]
    SquareNotFound { cell: Cell },

    #[error("board of {size} px cannot hold a {grid_size}x{grid_size} grid")]
    InvalidGeometry { size: u32, grid_size: u32 },
}
