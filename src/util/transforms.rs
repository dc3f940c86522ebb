//! Transforms between board space (pixels of a `size × size` board) and
//! screen space (egui points).

use egui::{Pos2, Rect, Vec2};

/// A uniform scale followed by a translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    scale: f32,
    offset: Vec2,
}

impl Transform {
    /// Maps `src` inside `dst` as large as it fits without changing its aspect
    /// ratio, centered along the axis that has room to spare.
    pub fn new_letterboxed(src: Rect, dst: Rect) -> Self {
        let scale = (dst.width() / src.width()).min(dst.height() / src.height());
        let offset = dst.center().to_vec2() - src.center().to_vec2() * scale;
        Self { scale, offset }
    }

    /// Returns the inverse `Transform`.
    /// Panics if the scale is zero.
    pub fn inverse(&self) -> Self {
        assert!(self.scale != 0.0);
        Self {
            scale: self.scale.recip(),
            offset: -self.offset / self.scale,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn map_point(&self, p: Pos2) -> Pos2 {
        (p.to_vec2() * self.scale + self.offset).to_pos2()
    }

    pub fn map_rect(&self, r: Rect) -> Rect {
        Rect::from_two_pos(self.map_point(r.min), self.map_point(r.max))
    }
}
