use crate::color::Palette;
use crate::error::BoardError;

pub const DEFAULT_SIZE: u32 = 800;
pub const DEFAULT_GRID_SIZE: u32 = 8;
/// Largest grid accepted; keeps `grid_size²` squares allocatable.
pub const MAX_GRID_SIZE: u32 = 1024;

/// Everything needed to build a [`crate::Board`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Side of the (square) board in pixels.
    pub size: u32,
    /// Cells per side.
    pub grid_size: u32,
    pub palette: Palette,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            grid_size: DEFAULT_GRID_SIZE,
            palette: Palette::default(),
        }
    }
}

impl BoardConfig {
    pub fn new(size: u32, grid_size: u32) -> Self {
        Self {
            size,
            grid_size,
            ..Self::default()
        }
    }

    /// Rejects configurations whose cells would be zero pixels wide, and
    /// grids larger than [`MAX_GRID_SIZE`] cells per side.
    pub fn validate(&self) -> Result<(), BoardError> {
        let grid = self.grid_size;
        if grid == 0 || grid > MAX_GRID_SIZE || self.size < grid {
            return Err(BoardError::InvalidGeometry {
                size: self.size,
                grid_size: self.grid_size,
            });
        }
        Ok(())
    }
}
