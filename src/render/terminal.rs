//! Terminal renderer: rasterizes pixel draw calls onto a cell grid.
//!
//! Each frame is painted into a fresh [`Compositor`] buffer and diffed against
//! the previous one; only changed cells reach the terminal. Rounded corners
//! have no cell equivalent and are ignored. Text color alpha is composited over
//! the background already painted under each cell.

use std::io::Stdout;

use crate::geometry::{CellMetrics, Rect};
use crate::style::{Color, TextAlign, TextBaseline};

use super::compositor::Compositor;
use super::driver::Driver;
use super::font::FontRegistry;
use super::strip::{char_width, CellStyle, Strip};
use super::{RenderError, Renderer, TextRun};

/// Background assumed under cells nothing has painted.
const TERMINAL_BACKGROUND: Color = Color::BLACK;

/// [`Renderer`] drawing to the terminal through crossterm.
pub struct TerminalRenderer {
    cell: CellMetrics,
    fonts: FontRegistry,
    current: Compositor,
    previous: Option<Compositor>,
    driver: Option<Driver<Stdout>>,
}

impl TerminalRenderer {
    /// Take over the terminal: alternate screen, raw mode, hidden cursor.
    pub fn open(cell: CellMetrics) -> Result<Self, RenderError> {
        let mut driver = Driver::stdout();
        driver.enter_alt_screen()?;
        tracing::debug!(cell_width = cell.width, cell_height = cell.height, "terminal renderer opened");
        let mut renderer = Self::offscreen(cell);
        renderer.driver = Some(driver);
        Ok(renderer)
    }

    /// A renderer that rasterizes into its buffer without touching the terminal.
    pub fn offscreen(cell: CellMetrics) -> Self {
        Self {
            cell,
            fonts: FontRegistry::new(),
            current: Compositor::new(0, 0),
            previous: None,
            driver: None,
        }
    }

    /// The most recently painted buffer.
    pub fn screen(&self) -> &Compositor {
        self.previous.as_ref().unwrap_or(&self.current)
    }

    /// Registered fonts.
    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    fn background_at(&self, x: i32, y: i32) -> Color {
        if x < 0 || y < 0 {
            return TERMINAL_BACKGROUND;
        }
        self.current
            .get_cell(x as u16, y as u16)
            .and_then(|c| c.style.bg)
            .unwrap_or(TERMINAL_BACKGROUND)
    }

    /// First column and row of a run of `len` cells anchored at the run's point.
    fn text_origin(&self, run: &TextRun, len: i32) -> (i32, i32) {
        let col = run.x / self.cell.width;
        let row = run.y / self.cell.height;
        let x = match run.align.horizontal {
            TextAlign::Left => col.round() as i32,
            TextAlign::Center => (col - len as f32 / 2.0).round() as i32,
            TextAlign::Right => col.round() as i32 - len,
        };
        let y = match run.align.vertical {
            TextBaseline::Top => row.round() as i32,
            TextBaseline::Middle => row.floor() as i32,
            TextBaseline::Bottom => row.round() as i32 - 1,
        };
        (x, y)
    }
}

impl Renderer for TerminalRenderer {
    fn register_font(&mut self, name: &str, data: Vec<u8>) -> Result<(), RenderError> {
        self.fonts.register(name, data)
    }

    fn begin_frame(&mut self, width: u32, height: u32, _pixel_ratio: f32) -> Result<(), RenderError> {
        let cols = (width as f32 / self.cell.width).round() as u16;
        let rows = (height as f32 / self.cell.height).round() as u16;
        if cols != self.current.width || rows != self.current.height {
            self.current.resize(cols, rows);
            self.previous = None;
            if let Some(driver) = self.driver.as_mut() {
                driver.clear()?;
            }
        } else {
            self.current.clear();
        }
        Ok(())
    }

    fn fill_rounded_rect(&mut self, rect: Rect, _radius: f32, color: Color) {
        if color.is_transparent() {
            return;
        }
        let region = self.cell.rect_to_region(rect);
        let under = self.background_at(region.x, region.y);
        self.current.fill_region(region, color.blend_over(under));
    }

    fn draw_text(&mut self, run: &TextRun) {
        let len = run.text.chars().map(char_width).sum::<usize>() as i32;
        let (x0, y) = self.text_origin(run, len);
        let base = CellStyle::for_font(&run.font);
        let mut strip = Strip::new(y, x0);
        for ch in run.text.chars() {
            let x = strip.right();
            let bg = if x < 0 || y < 0 {
                None
            } else {
                self.current.get_cell(x as u16, y as u16).and_then(|c| c.style.bg)
            };
            let fg = run.color.blend_over(bg.unwrap_or(TERMINAL_BACKGROUND));
            strip.push(ch, CellStyle { fg: Some(fg), bg, ..base });
        }
        let bounds = self.current.bounds();
        self.current.place_strips(&[strip], &bounds);
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        if let Some(driver) = self.driver.as_mut() {
            let updates = match &self.previous {
                Some(previous) => self.current.diff(previous),
                None => self.current.full(),
            };
            driver.apply_updates(&updates)?;
            driver.flush()?;
        }
        self.previous = Some(self.current.clone());
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), RenderError> {
        if let Some(mut driver) = self.driver.take() {
            driver.leave_alt_screen()?;
            tracing::debug!("terminal restored");
        }
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if let Some(mut driver) = self.driver.take() {
            let _ = driver.leave_alt_screen();
        }
    }
}
