//! Crossterm terminal output backend.
//!
//! The `Driver` wraps a buffered writer and provides methods for entering and
//! leaving the alternate screen and applying cell updates from the compositor.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::compositor::CellUpdate;
use super::strip::{CellStyle, CONTINUATION};
use crate::style::Color;

/// Convert an opaque color to a crossterm true color.
pub fn to_crossterm(color: Color) -> crossterm::style::Color {
    crossterm::style::Color::Rgb { r: color.r, g: color.g, b: color.b }
}

/// Terminal output backend using crossterm.
///
/// The driver does NOT enter the alternate screen on creation; call
/// [`enter_alt_screen`](Driver::enter_alt_screen) explicitly.
pub struct Driver<W: Write = Stdout> {
    writer: BufWriter<W>,
}

impl Driver<Stdout> {
    /// Create a new driver wrapping stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Get the terminal size (columns, rows) via crossterm.
    pub fn terminal_size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl<W: Write> Driver<W> {
    /// Create a driver writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer: BufWriter::new(writer) }
    }

    /// Enter alternate screen, enable raw mode, hide the cursor.
    pub fn enter_alt_screen(&mut self) -> io::Result<()> {
        execute!(self.writer, EnterAlternateScreen, cursor::Hide)?;
        terminal::enable_raw_mode()?;
        Ok(())
    }

    /// Show the cursor, disable raw mode, leave alternate screen.
    pub fn leave_alt_screen(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.writer, cursor::Show, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Clear the whole terminal.
    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.writer, terminal::Clear(terminal::ClearType::All))
    }

    /// Queue a batch of cell updates. Call [`flush`](Driver::flush) afterwards.
    ///
    /// Continuation cells are skipped; the wide glyph to their left covers them.
    pub fn apply_updates(&mut self, updates: &[CellUpdate]) -> io::Result<()> {
        for update in updates.iter().filter(|u| u.cell.ch != CONTINUATION) {
            queue!(self.writer, cursor::MoveTo(update.x, update.y))?;
            self.apply_cell_style(&update.cell.style)?;
            queue!(
                self.writer,
                Print(update.cell.ch),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        Ok(())
    }

    /// Flush the internal write buffer to the terminal.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn apply_cell_style(&mut self, style: &CellStyle) -> io::Result<()> {
        if let Some(fg) = style.fg {
            queue!(self.writer, SetForegroundColor(to_crossterm(fg)))?;
        }
        if let Some(bg) = style.bg {
            queue!(self.writer, SetBackgroundColor(to_crossterm(bg)))?;
        }
        if style.bold {
            queue!(self.writer, SetAttribute(Attribute::Bold))?;
        }
        if style.italic {
            queue!(self.writer, SetAttribute(Attribute::Italic))?;
        }
        Ok(())
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(w) => w,
            Err(e) => panic!("flush failed: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::strip::StyledCell;

    #[test]
    fn rgb_conversion() {
        assert_eq!(
            to_crossterm(Color::rgb(1, 2, 3)),
            crossterm::style::Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn apply_updates_writes_characters() {
        let mut driver = Driver::new(Vec::new());
        let style = CellStyle { fg: Some(Color::WHITE), bold: true, ..CellStyle::new() };
        driver
            .apply_updates(&[
                CellUpdate { x: 0, y: 0, cell: StyledCell::new('h', style) },
                CellUpdate { x: 1, y: 0, cell: StyledCell::new('i', style) },
            ])
            .unwrap();
        driver.flush().unwrap();
        let out = String::from_utf8(driver.into_inner()).unwrap();
        assert!(out.contains('h'));
        assert!(out.contains('i'));
        // Cursor positioning escape for (0, 0) is emitted 1-based.
        assert!(out.contains("\u{1b}[1;1H"));
    }

    #[test]
    fn continuation_cells_are_not_printed() {
        let mut driver = Driver::new(Vec::new());
        driver
            .apply_updates(&[
                CellUpdate { x: 0, y: 0, cell: StyledCell::new('中', CellStyle::new()) },
                CellUpdate { x: 1, y: 0, cell: StyledCell::new(CONTINUATION, CellStyle::new()) },
            ])
            .unwrap();
        driver.flush().unwrap();
        let out = String::from_utf8(driver.into_inner()).unwrap();
        assert!(out.contains('中'));
        assert!(!out.contains(CONTINUATION));
        assert!(!out.contains("\u{1b}[1;2H"));
    }

    #[test]
    fn terminal_size_resolves_to_stdout_driver() {
        let query: fn() -> io::Result<(u16, u16)> = Driver::<Stdout>::terminal_size;
        // Headless runs have no tty; a reported size must still be a real grid.
        if let Ok((cols, rows)) = query() {
            assert!(cols > 0 && rows > 0);
        }
    }

    #[test]
    fn no_updates_writes_nothing() {
        let mut driver = Driver::new(Vec::new());
        driver.apply_updates(&[]).unwrap();
        driver.flush().unwrap();
        assert!(driver.into_inner().is_empty());
    }
}
