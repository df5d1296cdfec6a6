//! Screen buffer and frame diffing.
//!
//! The `Compositor` holds a 2D grid of `StyledCell`s for the whole terminal.
//! Each frame is painted into a fresh buffer; [`Compositor::diff`] compares it
//! with the previous frame and yields only the cells that changed.

use crate::geometry::Region;
use crate::style::Color;

use super::strip::{Strip, StyledCell, CONTINUATION};

// ---------------------------------------------------------------------------
// CellUpdate
// ---------------------------------------------------------------------------

/// A single cell that changed between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellUpdate {
    pub x: u16,
    pub y: u16,
    pub cell: StyledCell,
}

// ---------------------------------------------------------------------------
// Compositor
// ---------------------------------------------------------------------------

/// A screen buffer. `screen[y][x]` is the cell at column x, row y.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compositor {
    screen: Vec<Vec<StyledCell>>,
    pub width: u16,
    pub height: u16,
}

impl Compositor {
    /// Create a new compositor with a blank screen of the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            screen: Self::blank_screen(width, height),
            width,
            height,
        }
    }

    /// Resize the screen buffer. All cells are reset to blank.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.screen = Self::blank_screen(width, height);
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        for row in &mut self.screen {
            row.fill(StyledCell::blank());
        }
    }

    /// The whole screen as a region.
    pub fn bounds(&self) -> Region {
        Region::new(0, 0, i32::from(self.width), i32::from(self.height))
    }

    /// Paint `region` (clipped to the screen) with a background color, erasing
    /// any characters underneath.
    pub fn fill_region(&mut self, region: Region, bg: Color) {
        let clip = region.intersection(self.bounds());
        if clip.is_empty() {
            return;
        }
        for y in clip.y..clip.bottom() {
            let row = &mut self.screen[y as usize];
            for x in clip.x..clip.right() {
                let cell = &mut row[x as usize];
                cell.ch = ' ';
                cell.style.fg = None;
                cell.style.bg = Some(bg);
                cell.style.bold = false;
                cell.style.italic = false;
            }
        }
    }

    /// Place strips into the screen buffer, clipped to `region` and the screen.
    pub fn place_strips(&mut self, strips: &[Strip], region: &Region) {
        let clip = region.intersection(self.bounds());
        if clip.is_empty() {
            return;
        }

        for strip in strips {
            let y = strip.y;
            if y < clip.y || y >= clip.bottom() {
                continue;
            }
            let cropped = strip.crop(clip.x, clip.right());
            let row = &mut self.screen[y as usize];
            for (i, cell) in cropped.cells.iter().enumerate() {
                row[(cropped.x_offset + i as i32) as usize] = *cell;
            }
        }
    }

    /// Compare this frame against a previous frame and return only the changed cells.
    ///
    /// Cells outside the previous frame's bounds always count as changed.
    pub fn diff(&self, previous: &Compositor) -> Vec<CellUpdate> {
        let mut updates = Vec::new();
        for (y, row) in self.screen.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let before = previous.screen.get(y).and_then(|r| r.get(x));
                if before != Some(cell) {
                    updates.push(CellUpdate { x: x as u16, y: y as u16, cell: *cell });
                }
            }
        }
        updates
    }

    /// Every cell as an update, for a full repaint.
    pub fn full(&self) -> Vec<CellUpdate> {
        self.diff(&Compositor::new(0, 0))
    }

    /// Get a reference to the screen buffer cell at (x, y).
    pub fn get_cell(&self, x: u16, y: u16) -> Option<&StyledCell> {
        self.screen.get(y as usize).and_then(|row| row.get(x as usize))
    }

    /// The characters of row `y`, with trailing blanks trimmed.
    pub fn row_text(&self, y: u16) -> String {
        self.screen
            .get(y as usize)
            .map(|row| {
                let text: String =
                    row.iter().map(|c| c.ch).filter(|&ch| ch != CONTINUATION).collect();
                text.trim_end().to_owned()
            })
            .unwrap_or_default()
    }

    fn blank_screen(width: u16, height: u16) -> Vec<Vec<StyledCell>> {
        vec![vec![StyledCell::blank(); width as usize]; height as usize]
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::strip::CellStyle;
    use pretty_assertions::assert_eq;

    fn strip(y: i32, x: i32, text: &str) -> Strip {
        let mut s = Strip::new(y, x);
        s.push_str(text, CellStyle::new());
        s
    }

    #[test]
    fn new_is_blank() {
        let c = Compositor::new(4, 2);
        assert_eq!(c.get_cell(3, 1), Some(&StyledCell::blank()));
        assert_eq!(c.get_cell(4, 0), None);
        assert_eq!(c.row_text(0), "");
    }

    #[test]
    fn place_strips_clips_to_region() {
        let mut c = Compositor::new(10, 2);
        c.place_strips(&[strip(0, 1, "hello")], &Region::new(0, 0, 4, 1));
        assert_eq!(c.row_text(0), " hel");
    }

    #[test]
    fn place_strips_clips_to_screen() {
        let mut c = Compositor::new(5, 1);
        c.place_strips(&[strip(0, -2, "abcdefgh"), strip(3, 0, "zz")], &c.bounds());
        assert_eq!(c.row_text(0), "cdefg");
    }

    #[test]
    fn fill_region_sets_background() {
        let mut c = Compositor::new(4, 4);
        c.place_strips(&[strip(1, 0, "xxxx")], &c.bounds());
        c.fill_region(Region::new(1, 1, 2, 2), Color::BLACK);
        assert_eq!(c.row_text(1), "x  x");
        assert_eq!(c.get_cell(1, 1).and_then(|cell| cell.style.bg), Some(Color::BLACK));
        assert_eq!(c.get_cell(0, 0).and_then(|cell| cell.style.bg), None);
    }

    #[test]
    fn diff_reports_only_changes() {
        let before = Compositor::new(3, 1);
        let mut after = before.clone();
        after.place_strips(&[strip(0, 1, "a")], &after.bounds());
        let updates = after.diff(&before);
        assert_eq!(updates.len(), 1);
        assert_eq!((updates[0].x, updates[0].y, updates[0].cell.ch), (1, 0, 'a'));
    }

    #[test]
    fn diff_against_smaller_includes_new_cells() {
        let before = Compositor::new(1, 1);
        let after = Compositor::new(2, 2);
        assert_eq!(after.diff(&before).len(), 3);
        assert_eq!(after.full().len(), 4);
    }

    #[test]
    fn clear_resets() {
        let mut c = Compositor::new(3, 1);
        c.place_strips(&[strip(0, 0, "abc")], &c.bounds());
        c.clear();
        assert_eq!(c, Compositor::new(3, 1));
    }
}
