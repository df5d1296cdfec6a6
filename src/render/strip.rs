//! Strip: a horizontal line of styled terminal cells.
//!
//! Text runs are rasterized into strips before being placed into the
//! compositor's screen buffer.

use unicode_width::UnicodeWidthChar;

use crate::style::Color;

/// Placeholder in the cell right of a double-width glyph. Never printed.
pub const CONTINUATION: char = '\0';

/// Columns `ch` takes on screen. Control and zero-width characters take one.
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(1).max(1)
}

// ---------------------------------------------------------------------------
// CellStyle
// ---------------------------------------------------------------------------

/// Visual style for a single terminal cell. Colors are opaque once they reach
/// a cell; alpha is resolved while painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub italic: bool,
}

impl CellStyle {
    /// Create a new `CellStyle` with all attributes unset/false.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bold and italic attributes derived from a font family name.
    pub fn for_font(font: &str) -> Self {
        Self {
            bold: font.contains("Bold"),
            italic: font.contains("Italic"),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// StyledCell
// ---------------------------------------------------------------------------

/// A single terminal cell: one character with associated style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledCell {
    pub ch: char,
    pub style: CellStyle,
}

impl StyledCell {
    /// Create a new styled cell.
    pub fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }

    /// A blank (space) cell with default style.
    pub fn blank() -> Self {
        Self { ch: ' ', style: CellStyle::default() }
    }
}

impl Default for StyledCell {
    fn default() -> Self {
        Self::blank()
    }
}

// ---------------------------------------------------------------------------
// Strip
// ---------------------------------------------------------------------------

/// A horizontal line of styled terminal cells starting at (`x_offset`, `y`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    pub y: i32,
    pub x_offset: i32,
    pub cells: Vec<StyledCell>,
}

impl Strip {
    /// Create a new empty strip at the given row and x offset.
    pub fn new(y: i32, x_offset: i32) -> Self {
        Self { y, x_offset, cells: Vec::new() }
    }

    /// Push a single character with the given style. Wide characters are
    /// followed by [`CONTINUATION`] cells.
    pub fn push(&mut self, ch: char, style: CellStyle) {
        self.cells.push(StyledCell::new(ch, style));
        for _ in 1..char_width(ch) {
            self.cells.push(StyledCell::new(CONTINUATION, style));
        }
    }

    /// Push every character of `text` with the same style.
    pub fn push_str(&mut self, text: &str, style: CellStyle) {
        for ch in text.chars() {
            self.push(ch, style);
        }
    }

    /// The width of this strip in cells.
    pub fn width(&self) -> i32 {
        self.cells.len() as i32
    }

    /// The rightmost x position (exclusive) of this strip.
    pub fn right(&self) -> i32 {
        self.x_offset + self.width()
    }

    /// Keep only cells whose absolute x lies within `[x_start, x_end)`. A wide
    /// glyph cut in half by either edge becomes blanks.
    pub fn crop(&self, x_start: i32, x_end: i32) -> Strip {
        let mut result = Strip::new(self.y, x_start);
        for (i, cell) in self.cells.iter().enumerate() {
            let cell_x = self.x_offset + i as i32;
            if cell_x >= x_start && cell_x < x_end {
                if result.cells.is_empty() {
                    result.x_offset = cell_x;
                }
                result.cells.push(*cell);
            }
        }
        if let Some(first) = result.cells.first_mut() {
            if first.ch == CONTINUATION {
                first.ch = ' ';
            }
        }
        if let Some(last) = result.cells.last_mut() {
            if char_width(last.ch) > 1 {
                last.ch = ' ';
            }
        }
        result
    }

    /// The characters of this strip as a string.
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.ch).filter(|&ch| ch != CONTINUATION).collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
