//! A window with no event thread: tests push records into it directly.

use std::cell::Cell;

use crate::event::{EventSender, InputEvent, ResizeEvent};
use crate::platform::{PlatformError, Window};
use crate::schedule::RerenderHandle;

/// [`Window`] driven entirely by the test.
#[derive(Debug)]
pub struct HeadlessWindow {
    title: String,
    size: (u32, u32),
    pixel_ratio: u32,
    close: Cell<bool>,
    events: Option<EventSender>,
    rerender: Option<RerenderHandle>,
}

impl HeadlessWindow {
    /// A window of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            title: String::new(),
            size: (width, height),
            pixel_ratio: 1,
            close: Cell::new(false),
            events: None,
            rerender: None,
        }
    }

    /// Report a framebuffer `ratio` times the logical size.
    pub fn with_pixel_ratio(mut self, ratio: u32) -> Self {
        self.pixel_ratio = ratio.max(1);
        self
    }

    /// Enqueue a record as the event thread would. Returns `false` if the
    /// window is not started or the buffer for its kind is full.
    pub fn inject(&self, event: InputEvent) -> bool {
        match &self.events {
            Some(events) => events.try_send(event).is_ok(),
            None => false,
        }
    }

    /// Change the size, enqueue the resize record and request a rerender.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.inject(InputEvent::Resize(ResizeEvent { width, height }));
        if let Some(rerender) = &self.rerender {
            rerender.request();
        }
    }

    /// Whether [`Window::start`] was called and not yet shut down.
    pub fn is_started(&self) -> bool {
        self.events.is_some()
    }
}

impl Window for HeadlessWindow {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        (self.size.0 * self.pixel_ratio, self.size.1 * self.pixel_ratio)
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    fn should_close(&self) -> bool {
        self.close.get()
    }

    fn request_close(&self) {
        self.close.set(true);
    }

    fn start(&mut self, events: EventSender, rerender: RerenderHandle) -> Result<(), PlatformError> {
        self.events = Some(events);
        self.rerender = Some(rerender);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), PlatformError> {
        self.events = None;
        self.rerender = None;
        Ok(())
    }
}
