use std::fmt;

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Every color the board paints with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Even-parity squares.
    pub light: Color,
    /// Odd-parity squares; the only squares that ever hold pieces.
    pub dark: Color,
    /// Transient fill for a clicked square that holds a piece.
    pub highlight: Color,
    pub top_team: Color,
    pub bottom_team: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: Color::from_hex(0xe8cfaa),
            dark: Color::from_hex(0xa77d5c),
            highlight: Color::from_hex(0xffff00),
            top_team: Color::from_hex(0x000000),
            bottom_team: Color::from_hex(0xff0000),
        }
    }
}
