//! Window and event source abstraction.
//!
//! A [`Window`] owns whatever thread produces input records. Once started it
//! pushes every record into the [`EventSender`] it was handed and nothing else;
//! the frame driver drains those buffers on the UI thread.

pub mod terminal;

pub use terminal::TerminalWindow;

use crate::event::EventSender;
use crate::schedule::RerenderHandle;

/// Errors raised by a window backend.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("event source already started")]
    AlreadyStarted,
}

/// A single top-level window.
pub trait Window {
    /// Logical size in pixels.
    fn size(&self) -> (u32, u32);

    /// Framebuffer size in device pixels.
    fn framebuffer_size(&self) -> (u32, u32) {
        self.size()
    }

    fn title(&self) -> &str;

    fn set_title(&mut self, title: &str);

    /// Whether a close was requested by the user or the application.
    fn should_close(&self) -> bool;

    fn request_close(&self);

    /// Begin producing input records into `events`. Resizes also post a
    /// request through `rerender`.
    fn start(&mut self, events: EventSender, rerender: RerenderHandle) -> Result<(), PlatformError>;

    /// Stop the event source and release the window.
    fn shutdown(&mut self) -> Result<(), PlatformError>;
}
