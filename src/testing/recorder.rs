//! A renderer that records draw calls instead of drawing.

use crate::geometry::Rect;
use crate::render::font::FontRegistry;
use crate::render::{RenderError, Renderer, TextRun};
use crate::style::Color;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill { rect: Rect, radius: f32, color: Color },
    Text(TextRun),
}

/// [`Renderer`] keeping the draw calls of the last completed frame.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    fonts: FontRegistry,
    pending: Vec<DrawCommand>,
    commands: Vec<DrawCommand>,
    viewport: Option<(u32, u32, f32)>,
    frames: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls of the last frame, in issue order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Width, height and pixel ratio of the last frame begun.
    pub fn viewport(&self) -> Option<(u32, u32, f32)> {
        self.viewport
    }

    /// Frames completed so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }
}

impl Renderer for RecordingRenderer {
    fn register_font(&mut self, name: &str, data: Vec<u8>) -> Result<(), RenderError> {
        self.fonts.register(name, data)
    }

    fn begin_frame(&mut self, width: u32, height: u32, pixel_ratio: f32) -> Result<(), RenderError> {
        self.viewport = Some((width, height, pixel_ratio));
        self.pending.clear();
        Ok(())
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.pending.push(DrawCommand::Fill { rect, radius, color });
    }

    fn draw_text(&mut self, run: &TextRun) {
        self.pending.push(DrawCommand::Text(run.clone()));
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        self.commands = std::mem::take(&mut self.pending);
        self.frames += 1;
        Ok(())
    }
}
