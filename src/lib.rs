//! Checkerboard model: squares, pieces, and the board that owns them.
//!
//! The board derives all geometry from a single `size / grid_size` ratio and
//! resolves pointer coordinates to grid cells. Drawing goes through the
//! [`surface::Surface`] trait so the same model backs the egui viewer and the
//! headless runner.

pub mod board;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod piece;
pub mod square;
pub mod surface;
pub mod util;

pub use board::{Board, ClickOutcome};
pub use color::{Color, Palette};
pub use config::BoardConfig;
pub use error::BoardError;
pub use geometry::{Cell, CellGeometry, Rect};
pub use piece::{Piece, Team};
pub use square::Square;
pub use surface::{DrawCommand, RecordingSurface, Surface};
