use crate::color::Color;
use crate::geometry::Rect;

/// A drawing target for the board.
///
/// Coordinates are board pixels: `(0, 0)` is the top-left corner of cell
/// `(0, 0)`. Drawing always succeeds.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_ellipse(&mut self, rect: Rect, color: Color);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Rect(Rect, Color),
    Ellipse(Rect, Color),
}

impl DrawCommand {
    pub fn color(&self) -> Color {
        match *self {
            DrawCommand::Rect(_, color) | DrawCommand::Ellipse(_, color) => color,
        }
    }
}

/// An in-memory surface for headless runs and tests. Keeps every command in
/// the order it was issued.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn rects(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Rect(rect, color) => Some((rect, color)),
            DrawCommand::Ellipse(..) => None,
        })
    }

    pub fn ellipses(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Ellipse(rect, color) => Some((rect, color)),
            DrawCommand::Rect(..) => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect(rect, color));
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Ellipse(rect, color));
    }
}
