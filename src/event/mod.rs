//! Event system: input records, per-kind buffers, global handlers.

pub mod coalescer;
pub mod handler;
pub mod input;

pub use coalescer::{EventCoalescer, EventSender, SendError, DEFAULT_EVENT_CAPACITY};
pub use handler::{isolate, Handler, Handlers, Invocation};
pub use input::{
    translate, Action, ClickEvent, EventKind, InputEvent, Key, KeyEvent, Modifiers,
    MouseButton, MouseMoveEvent, PositionEvent, ResizeEvent, ScrollEvent,
};
