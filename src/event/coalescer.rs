//! Per-kind bounded event buffers and the drain step of the frame loop.
//!
//! Producers (the window's event thread) push records through an
//! [`EventSender`]; the UI thread owns the [`EventCoalescer`] and, between two
//! render passes, drains every buffer in [`EventKind::ALL`] order. FIFO order
//! holds within a kind; across kinds only the fixed drain order is guaranteed.

use tokio::sync::mpsc;

use super::input::{
    ClickEvent, EventKind, InputEvent, KeyEvent, MouseMoveEvent, PositionEvent, ResizeEvent,
    ScrollEvent,
};

/// Default capacity of each per-kind buffer.
pub const DEFAULT_EVENT_CAPACITY: usize = 10;

/// Why a record could not be enqueued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    /// The buffer for this kind is full.
    #[error("{0} buffer is full")]
    Full(EventKind),
    /// The UI side is gone.
    #[error("{0} buffer is closed")]
    Closed(EventKind),
}

macro_rules! buffers {
    ($($field:ident: $ty:ty => $variant:ident),* $(,)?) => {
        /// Cloneable producer side of every event buffer.
        #[derive(Clone, Debug)]
        pub struct EventSender {
            $($field: mpsc::Sender<$ty>,)*
        }

        struct Receivers {
            $($field: mpsc::Receiver<$ty>,)*
        }

        fn channels(capacity: usize) -> (EventSender, Receivers) {
            $(let $field = mpsc::channel::<$ty>(capacity);)*
            (
                EventSender { $($field: $field.0,)* },
                Receivers { $($field: $field.1,)* },
            )
        }

        impl EventSender {
            /// Enqueue a record without waiting.
            pub fn try_send(&self, event: InputEvent) -> Result<(), SendError> {
                use mpsc::error::TrySendError;
                let kind = event.kind();
                match event {
                    $(InputEvent::$variant(e) => self.$field.try_send(e).map_err(|err| match err {
                        TrySendError::Full(_) => SendError::Full(kind),
                        TrySendError::Closed(_) => SendError::Closed(kind),
                    }),)*
                }
            }
        }

        impl Receivers {
            fn drain_kind(&mut self, kind: EventKind, out: &mut Vec<InputEvent>) {
                match kind {
                    $(EventKind::$variant => {
                        while let Ok(e) = self.$field.try_recv() {
                            out.push(InputEvent::$variant(e));
                        }
                    })*
                }
            }
        }
    };
}

buffers! {
    key: KeyEvent => Key,
    text: char => Text,
    click: ClickEvent => Click,
    resize: ResizeEvent => Resize,
    position: PositionEvent => Position,
    focus: bool => Focus,
    maximize: bool => Maximize,
    mouse_move: MouseMoveEvent => MouseMove,
    scroll: ScrollEvent => Scroll,
}

/// Consumer side of the event buffers, owned by the UI thread.
pub struct EventCoalescer {
    sender: EventSender,
    receivers: Receivers,
    capacity: usize,
}

impl EventCoalescer {
    /// Create buffers holding up to `capacity` records per kind.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, receivers) = channels(capacity);
        Self { sender, receivers, capacity }
    }

    /// A producer handle; clone freely.
    pub fn sender(&self) -> EventSender {
        self.sender.clone()
    }

    /// Per-kind buffer capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Take every record currently buffered, kind by kind in drain order.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        let mut out = Vec::new();
        for kind in EventKind::ALL {
            self.receivers.drain_kind(kind, &mut out);
        }
        out
    }
}

impl Default for EventCoalescer {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl std::fmt::Debug for EventCoalescer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventCoalescer")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::input::{Key, Modifiers, MouseButton};
    use pretty_assertions::assert_eq;

    fn click(x: f32) -> InputEvent {
        InputEvent::Click(ClickEvent { button: MouseButton::Left, x, y: 0.0, modifiers: Modifiers::NONE })
    }

    #[test]
    fn empty_drain() {
        let mut c = EventCoalescer::default();
        assert!(c.drain().is_empty());
        assert_eq!(c.capacity(), DEFAULT_EVENT_CAPACITY);
    }

    #[test]
    fn fifo_within_kind() {
        let mut c = EventCoalescer::default();
        let tx = c.sender();
        for x in [1.0, 2.0, 3.0] {
            tx.try_send(click(x)).unwrap();
        }
        assert_eq!(c.drain(), vec![click(1.0), click(2.0), click(3.0)]);
        assert!(c.drain().is_empty());
    }

    #[test]
    fn kinds_drain_in_fixed_order() {
        let mut c = EventCoalescer::default();
        let tx = c.sender();
        let resize = InputEvent::Resize(ResizeEvent { width: 1, height: 2 });
        let key = InputEvent::Key(KeyEvent::pressed(Key::Tab, Modifiers::NONE));
        tx.try_send(InputEvent::Scroll(ScrollEvent { x: 0.0, y: 1.0 })).unwrap();
        tx.try_send(resize).unwrap();
        tx.try_send(click(1.0)).unwrap();
        tx.try_send(InputEvent::Text('x')).unwrap();
        tx.try_send(key).unwrap();

        let kinds: Vec<EventKind> = c.drain().iter().map(InputEvent::kind).collect();
        assert_eq!(
            kinds,
            vec![EventKind::Key, EventKind::Text, EventKind::Click, EventKind::Resize, EventKind::Scroll]
        );
    }

    #[test]
    fn full_buffer_rejects_send() {
        let mut c = EventCoalescer::new(2);
        let tx = c.sender();
        tx.try_send(InputEvent::Text('a')).unwrap();
        tx.try_send(InputEvent::Text('b')).unwrap();
        assert_eq!(tx.try_send(InputEvent::Text('c')), Err(SendError::Full(EventKind::Text)));
        // Other kinds have their own buffer.
        assert!(tx.try_send(InputEvent::Focus(true)).is_ok());
        assert_eq!(c.drain().len(), 3);
    }

    #[test]
    fn send_from_producer_thread() {
        let mut c = EventCoalescer::default();
        let tx = c.sender();
        std::thread::spawn(move || {
            tx.try_send(InputEvent::Maximize(true)).unwrap();
            tx.try_send(InputEvent::Maximize(false)).unwrap();
        })
        .join()
        .unwrap();
        assert_eq!(c.drain(), vec![InputEvent::Maximize(true), InputEvent::Maximize(false)]);
    }

    #[test]
    fn send_after_drop_is_closed() {
        let c = EventCoalescer::default();
        let tx = c.sender();
        drop(c);
        assert_eq!(tx.try_send(InputEvent::Text('a')), Err(SendError::Closed(EventKind::Text)));
    }
}
