//! Rendering: the draw pass, the [`Renderer`] seam and the terminal backend.
//!
//! The frame driver speaks to a renderer only through [`Renderer`]: register
//! fonts once, then per frame `begin_frame`, a pre-order sequence of fills and
//! text runs, and `end_frame`.

pub mod compositor;
pub mod driver;
pub mod font;
pub mod paint;
pub mod strip;
pub mod terminal;

pub use compositor::{CellUpdate, Compositor};
pub use driver::Driver;
pub use font::FontRegistry;
pub use paint::{paint, text_anchor};
pub use strip::{CellStyle, Strip, StyledCell};
pub use terminal::TerminalRenderer;

use crate::geometry::Rect;
use crate::style::{Color, TextAlign, TextBaseline};

/// Errors raised by a renderer.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid font {name}: {reason}")]
    InvalidFont { name: String, reason: &'static str },

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where a text run's anchor point sits relative to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAlignment {
    pub horizontal: TextAlign,
    pub vertical: TextBaseline,
}

/// A single line of text to draw, anchored at (`x`, `y`).
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub align: TextAlignment,
    pub font: String,
    pub size: f32,
    pub color: Color,
}

/// A 2D vector drawing backend.
pub trait Renderer {
    /// Make font `data` available under `name`.
    fn register_font(&mut self, name: &str, data: Vec<u8>) -> Result<(), RenderError>;

    /// Start a frame of `width` x `height` pixels.
    fn begin_frame(&mut self, width: u32, height: u32, pixel_ratio: f32) -> Result<(), RenderError>;

    /// Fill `rect` with rounded corners of `radius`.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    fn draw_text(&mut self, run: &TextRun);

    /// Present the frame.
    fn end_frame(&mut self) -> Result<(), RenderError>;

    /// Release backend resources.
    fn shutdown(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}
