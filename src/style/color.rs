//! RGBA colors with hex and named parsing.

use std::fmt;
use std::str::FromStr;

use super::StyleError;

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent black. The default background.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// Opaque white. The default foreground.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Whether the color paints nothing.
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Composite `self` over an opaque `under` color.
    pub fn blend_over(self, under: Color) -> Color {
        let a = u16::from(self.a);
        let mix = |top: u8, bottom: u8| {
            ((u16::from(top) * a + u16::from(bottom) * (255 - a) + 127) / 255) as u8
        };
        Color::rgb(mix(self.r, under.r), mix(self.g, under.g), mix(self.b, under.b))
    }

    /// Parse a color string.
    ///
    /// Supports:
    /// - Hex colors: `#rgb`, `#rrggbb`, `#rrggbbaa`
    /// - Named colors: `black`, `white`, `red`, `green`, `blue`, `yellow`, `magenta`,
    ///   `cyan`, `grey`/`gray`, `transparent`
    ///
    /// Returns `None` if the string cannot be parsed.
    pub fn parse(s: &str) -> Option<Color> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }

        match s.to_ascii_lowercase().as_str() {
            "black" => Some(Color::BLACK),
            "white" => Some(Color::WHITE),
            "red" => Some(Color::rgb(255, 0, 0)),
            "green" => Some(Color::rgb(0, 128, 0)),
            "blue" => Some(Color::rgb(0, 0, 255)),
            "yellow" => Some(Color::rgb(255, 255, 0)),
            "magenta" => Some(Color::rgb(255, 0, 255)),
            "cyan" => Some(Color::rgb(0, 255, 255)),
            "grey" | "gray" => Some(Color::rgb(128, 128, 128)),
            "transparent" => Some(Color::TRANSPARENT),
            _ => None,
        }
    }
}

/// Parse a hex color string (without the leading `#`).
fn parse_hex(hex: &str) -> Option<Color> {
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        8 => Some(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
        3 => {
            let nibble = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
            let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
            // Expand: 0xA -> 0xAA
            Some(Color::rgb(r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s).ok_or_else(|| StyleError::InvalidColor(s.to_owned()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}
