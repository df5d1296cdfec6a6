//! Global event handlers: at most one per event kind.
//!
//! Handlers are registered from application code (usually inside the render
//! function) and persist until replaced. Every invocation runs behind
//! [`isolate`], so a panicking handler is reported instead of tearing down the
//! frame loop.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use super::input::{
    ClickEvent, EventKind, InputEvent, KeyEvent, MouseMoveEvent, PositionEvent, ResizeEvent,
    ScrollEvent,
};

/// A boxed handler for events of type `T`.
pub type Handler<T> = Box<dyn FnMut(T)>;

/// Outcome of handing one record to its handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No handler is registered for the kind; the record was dropped.
    Unhandled,
    /// The handler ran to completion.
    Completed,
    /// The handler panicked; carries the panic message.
    Panicked(String),
}

impl Invocation {
    /// Whether a handler was invoked at all, successfully or not.
    pub fn invoked(&self) -> bool {
        !matches!(self, Invocation::Unhandled)
    }
}

/// Run `f`, turning a panic into [`Invocation::Panicked`].
pub fn isolate(f: impl FnOnce()) -> Invocation {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => Invocation::Completed,
        Err(payload) => Invocation::Panicked(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}

/// The registered handler per event kind.
#[derive(Default)]
pub struct Handlers {
    key: Option<Handler<KeyEvent>>,
    text: Option<Handler<char>>,
    click: Option<Handler<ClickEvent>>,
    resize: Option<Handler<ResizeEvent>>,
    position: Option<Handler<PositionEvent>>,
    focus: Option<Handler<bool>>,
    maximize: Option<Handler<bool>>,
    mouse_move: Option<Handler<MouseMoveEvent>>,
    scroll: Option<Handler<ScrollEvent>>,
}

impl Handlers {
    /// No handlers registered.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key(&mut self, f: impl FnMut(KeyEvent) + 'static) {
        self.key = Some(Box::new(f));
    }

    pub fn on_text(&mut self, f: impl FnMut(char) + 'static) {
        self.text = Some(Box::new(f));
    }

    pub fn on_click(&mut self, f: impl FnMut(ClickEvent) + 'static) {
        self.click = Some(Box::new(f));
    }

    pub fn on_resize(&mut self, f: impl FnMut(ResizeEvent) + 'static) {
        self.resize = Some(Box::new(f));
    }

    pub fn on_position_change(&mut self, f: impl FnMut(PositionEvent) + 'static) {
        self.position = Some(Box::new(f));
    }

    pub fn on_focus_change(&mut self, f: impl FnMut(bool) + 'static) {
        self.focus = Some(Box::new(f));
    }

    pub fn on_maximize_change(&mut self, f: impl FnMut(bool) + 'static) {
        self.maximize = Some(Box::new(f));
    }

    pub fn on_mouse_move(&mut self, f: impl FnMut(MouseMoveEvent) + 'static) {
        self.mouse_move = Some(Box::new(f));
    }

    pub fn on_scroll(&mut self, f: impl FnMut(ScrollEvent) + 'static) {
        self.scroll = Some(Box::new(f));
    }

    /// Whether a handler is registered for `kind`.
    pub fn is_registered(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::Key => self.key.is_some(),
            EventKind::Text => self.text.is_some(),
            EventKind::Click => self.click.is_some(),
            EventKind::Resize => self.resize.is_some(),
            EventKind::Position => self.position.is_some(),
            EventKind::Focus => self.focus.is_some(),
            EventKind::Maximize => self.maximize.is_some(),
            EventKind::MouseMove => self.mouse_move.is_some(),
            EventKind::Scroll => self.scroll.is_some(),
        }
    }

    /// Hand `event` to the handler of its kind, if any.
    pub fn dispatch(&mut self, event: InputEvent) -> Invocation {
        fn call<T>(slot: &mut Option<Handler<T>>, value: T) -> Invocation {
            match slot {
                Some(handler) => isolate(|| handler(value)),
                None => Invocation::Unhandled,
            }
        }

        match event {
            InputEvent::Key(e) => call(&mut self.key, e),
            InputEvent::Text(c) => call(&mut self.text, c),
            InputEvent::Click(e) => call(&mut self.click, e),
            InputEvent::Resize(e) => call(&mut self.resize, e),
            InputEvent::Position(e) => call(&mut self.position, e),
            InputEvent::Focus(b) => call(&mut self.focus, b),
            InputEvent::Maximize(b) => call(&mut self.maximize, b),
            InputEvent::MouseMove(e) => call(&mut self.mouse_move, e),
            InputEvent::Scroll(e) => call(&mut self.scroll, e),
        }
    }
}

impl std::fmt::Debug for Handlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registered: Vec<EventKind> = EventKind::ALL
            .into_iter()
            .filter(|k| self.is_registered(*k))
            .collect();
        f.debug_struct("Handlers").field("registered", &registered).finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
