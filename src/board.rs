//! The board: owns every square and piece, maps pointer pixels to cells, and
//! runs the highlight-draw-reset cycle for clicks.

use log::{debug, info, warn};

use crate::color::Palette;
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::geometry::{Cell, CellGeometry};
use crate::piece::{Piece, Team};
use crate::square::Square;
use crate::surface::Surface;

/// What a successful click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    pub cell: Cell,
    /// Team of the piece on the clicked cell, if there was one. The square
    /// was highlighted for the redraw exactly when this is `Some`.
    pub piece: Option<Team>,
}

impl ClickOutcome {
    pub fn highlighted(&self) -> bool {
        self.piece.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct Board {
    size: u32,
    grid_size: u32,
    palette: Palette,
    geometry: CellGeometry,
    /// Row-major, `grid_size²` entries.
    squares: Vec<Square>,
    /// Same indexing as `squares`; `None` for empty cells.
    pieces: Vec<Option<Piece>>,
}

impl Board {
    /// Builds the full grid of squares and the starting pieces: one on every
    /// dark cell of the two home bands.
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;

        let BoardConfig {
            size,
            grid_size,
            palette,
        } = config;
        let geometry = CellGeometry::new(size, grid_size);
        let n = i64::from(grid_size);

        let cells = grid_size as usize * grid_size as usize;
        let mut squares = Vec::with_capacity(cells);
        let mut pieces = Vec::with_capacity(cells);
        for row in 0..n {
            for col in 0..n {
                let cell = Cell::new(col, row);
                squares.push(Square::new(cell, &palette, geometry));
                pieces.push(
                    cell.is_dark()
                        .then(|| Team::for_home_row(row, grid_size))
                        .flatten()
                        .map(|team| Piece::new(cell, team, team.color(&palette), geometry)),
                );
            }
        }

        let board = Self {
            size,
            grid_size,
            palette,
            geometry,
            squares,
            pieces,
        };
        debug!(
            "built {n}x{n} board: {} px, {} px cells, {} pieces",
            size,
            geometry.cell_length(),
            board.pieces().count()
        );
        Ok(board)
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn cell_length(&self) -> u32 {
        self.geometry.cell_length()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().flatten()
    }

    /// Cell under pixel `(x, y)`, with no range check.
    pub fn resolve_cell(&self, x: i64, y: i64) -> Cell {
        self.geometry.resolve(x, y)
    }

    /// Cell under pixel `(x, y)`, rejecting pixels that fall off the grid.
    pub fn cell_at(&self, x: i64, y: i64) -> Result<Cell, BoardError> {
        let cell = self.resolve_cell(x, y);
        if cell.in_grid(self.grid_size) {
            Ok(cell)
        } else {
            Err(BoardError::CellOutOfRange {
                cell,
                grid_size: self.grid_size,
            })
        }
    }

    fn index(&self, col: i64, row: i64) -> Option<usize> {
        Cell::new(col, row)
            .in_grid(self.grid_size)
            .then(|| (row * i64::from(self.grid_size) + col) as usize)
    }

    pub fn find_square(&self, col: i64, row: i64) -> Result<&Square, BoardError> {
        self.index(col, row)
            .and_then(|i| self.squares.get(i))
            .ok_or(BoardError::SquareNotFound {
                cell: Cell::new(col, row),
            })
    }

    fn find_square_mut(&mut self, col: i64, row: i64) -> Result<&mut Square, BoardError> {
        self.index(col, row)
            .and_then(|i| self.squares.get_mut(i))
            .ok_or(BoardError::SquareNotFound {
                cell: Cell::new(col, row),
            })
    }

    /// Piece on `(col, row)`. Empty and off-grid cells both give `None`.
    pub fn find_piece(&self, col: i64, row: i64) -> Option<&Piece> {
        self.index(col, row)
            .and_then(|i| self.pieces.get(i))
            .and_then(Option::as_ref)
    }

    pub fn draw_squares<S: Surface + ?Sized>(&self, surface: &mut S) {
        for square in &self.squares {
            square.render(surface);
        }
    }

    pub fn draw_pieces<S: Surface + ?Sized>(&self, surface: &mut S) {
        for piece in self.pieces() {
            piece.render(surface);
        }
    }

    /// Squares first, then pieces on top.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.draw_squares(surface);
        self.draw_pieces(surface);
    }

    pub fn reset_squares(&mut self) {
        for square in &mut self.squares {
            square.reset();
        }
    }

    /// Handles a click at pixel `(x, y)`.
    ///
    /// A square holding a piece is painted in the highlight color, the whole
    /// board is redrawn, and then every square is reset. The highlight only
    /// exists in the commands sent to `surface`; when this returns, every
    /// square is back to its parity color.
    pub fn handle_click<S: Surface + ?Sized>(
        &mut self,
        x: i64,
        y: i64,
        surface: &mut S,
    ) -> Result<ClickOutcome, BoardError> {
        let cell = self.cell_at(x, y).map_err(|err| {
            warn!("click at ({x}, {y}) ignored: {err}");
            err
        })?;

        info!("{}", self.find_square(cell.col, cell.row)?);

        let piece = self.find_piece(cell.col, cell.row).map(|piece| {
            info!("{piece}");
            piece.team()
        });

        if piece.is_some() {
            let highlight = self.palette.highlight;
            self.find_square_mut(cell.col, cell.row)?.color = highlight;
        }

        self.draw(surface);
        self.reset_squares();

        Ok(ClickOutcome { cell, piece })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn board() -> Board {
        Board::new(BoardConfig::default()).expect("default config is valid")
    }

    #[test]
    fn owns_one_square_per_cell() {
        let board = board();
        assert_eq!(board.squares().count(), 64);
        for row in 0..8 {
            for col in 0..8 {
                let square = board.find_square(col, row).unwrap();
                assert!(square.matches_cell(col, row));
            }
        }
    }

    #[test]
    fn find_square_rejects_off_grid_cells() {
        let board = board();
        assert_eq!(
            board.find_square(8, 0),
            Err(BoardError::SquareNotFound {
                cell: Cell::new(8, 0)
            })
        );
        assert!(board.find_square(0, -1).is_err());
    }

    #[test]
    fn find_piece_on_empty_and_occupied_cells() {
        let board = board();
        assert_eq!(board.find_piece(1, 0).map(Piece::team), Some(Team::Top));
        assert_eq!(board.find_piece(0, 5).map(Piece::team), Some(Team::Bottom));
        assert!(board.find_piece(0, 0).is_none());
        assert!(board.find_piece(2, 3).is_none());
        assert!(board.find_piece(9, 9).is_none());
    }

    #[test]
    fn draw_paints_squares_before_pieces() {
        let board = board();
        let mut surface = RecordingSurface::default();
        board.draw(&mut surface);

        let commands = surface.commands();
        assert_eq!(commands.len(), 64 + 24);
        assert_eq!(surface.rects().count(), 64);
        assert_eq!(surface.ellipses().count(), 24);
        let first_ellipse = commands
            .iter()
            .position(|c| matches!(c, crate::DrawCommand::Ellipse(..)))
            .unwrap();
        assert_eq!(first_ellipse, 64);
    }

    #[test]
    fn click_on_empty_square_draws_without_highlight() {
        let mut board = board();
        let mut surface = RecordingSurface::default();
        let outcome = board.handle_click(25, 25, &mut surface).unwrap();

        assert_eq!(outcome.cell, Cell::new(0, 0));
        assert!(!outcome.highlighted());
        assert!(surface
            .rects()
            .all(|(_, color)| color != board.palette().highlight));
    }

    #[test]
    fn out_of_range_click_draws_nothing() {
        let mut board = board();
        let mut surface = RecordingSurface::default();
        let err = board.handle_click(800, 0, &mut surface).unwrap_err();

        assert_eq!(
            err,
            BoardError::CellOutOfRange {
                cell: Cell::new(8, 0),
                grid_size: 8
            }
        );
        assert!(surface.commands().is_empty());
    }
}
