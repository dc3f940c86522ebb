use std::fmt;

use crate::color::{Color, Palette};
use crate::geometry::{Cell, CellGeometry, Rect};
use crate::surface::Surface;

/// Number of rows, counted from each edge, that start filled with pieces.
pub const HOME_ROWS: u32 = 3;

/// The side a piece belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Team {
    /// Starts on the rows nearest `row == 0`.
    Top,
    /// Starts on the rows nearest `row == grid_size - 1`.
    Bottom,
}

impl Team {
    pub fn color(self, palette: &Palette) -> Color {
        match self {
            Team::Top => palette.top_team,
            Team::Bottom => palette.bottom_team,
        }
    }

    /// Team whose home band contains `row`, if any. On grids too small for
    /// the bands to stay apart the top band wins.
    pub fn for_home_row(row: i64, grid_size: u32) -> Option<Team> {
        let home = i64::from(HOME_ROWS);
        let grid = i64::from(grid_size);
        if row < home {
            Some(Team::Top)
        } else if row >= grid - home {
            Some(Team::Bottom)
        } else {
            None
        }
    }
}

/// A marker drawn as an ellipse inset in its cell. Pieces never move.
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    cell: Cell,
    team: Team,
    color: Color,
    geometry: CellGeometry,
}

impl Piece {
    pub fn new(cell: Cell, team: Team, color: Color, geometry: CellGeometry) -> Self {
        Self {
            cell,
            team,
            color,
            geometry,
        }
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn inset_bounds(&self) -> Rect {
        self.geometry.inset_bounds(self.cell)
    }

    pub fn matches_cell(&self, col: i64, row: i64) -> bool {
        self.cell.col == col && self.cell.row == row
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_ellipse(self.inset_bounds(), self.color);
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Piece(col: {}, row: {}, color: {})",
            self.cell.col, self.cell.row, self.color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn home_bands_on_standard_grid() {
        assert_eq!(Team::for_home_row(0, 8), Some(Team::Top));
        assert_eq!(Team::for_home_row(2, 8), Some(Team::Top));
        assert_eq!(Team::for_home_row(3, 8), None);
        assert_eq!(Team::for_home_row(4, 8), None);
        assert_eq!(Team::for_home_row(5, 8), Some(Team::Bottom));
        assert_eq!(Team::for_home_row(7, 8), Some(Team::Bottom));
    }

    #[test]
    fn top_band_wins_on_small_grids() {
        assert_eq!(Team::for_home_row(2, 4), Some(Team::Top));
        assert_eq!(Team::for_home_row(3, 4), Some(Team::Bottom));
    }

    #[test]
    fn renders_ellipse_in_inset_bounds() {
        let piece = Piece::new(
            Cell::new(3, 0),
            Team::Top,
            Color::from_hex(0x000000),
            CellGeometry::new(800, 8),
        );
        let mut surface = RecordingSurface::default();
        piece.render(&mut surface);
        assert_eq!(
            surface.commands(),
            &[DrawCommand::Ellipse(
                Rect::new(305.0, 5.0, 395.0, 95.0),
                Color::from_hex(0x000000)
            )]
        );
        assert_eq!(piece.to_string(), "Piece(col: 3, row: 0, color: #000000)");
    }
}
