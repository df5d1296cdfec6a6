//! The terminal as a window: crossterm events on a producer thread, sizes in
//! pixels through the configured cell metrics.

use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyCode, KeyEventKind, KeyModifiers,
};
use crossterm::{execute, terminal};

use crate::event::{translate, EventSender, InputEvent, SendError};
use crate::geometry::CellMetrics;
use crate::render::Driver;
use crate::schedule::RerenderHandle;

use super::{PlatformError, Window};

/// How long the producer thread waits for an event before rechecking `stop`.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How long the producer backs off when a buffer is full.
const RETRY_INTERVAL: Duration = Duration::from_millis(5);

#[derive(Debug, Default)]
struct Shared {
    close: AtomicBool,
    stop: AtomicBool,
    width: AtomicU32,
    height: AtomicU32,
}

impl Shared {
    fn set_size(&self, (width, height): (u32, u32)) {
        self.width.store(width, Ordering::Relaxed);
        self.height.store(height, Ordering::Relaxed);
    }
}

/// [`Window`] backed by the controlling terminal.
pub struct TerminalWindow {
    title: String,
    cell: CellMetrics,
    close_on_ctrl_c: bool,
    shared: Arc<Shared>,
    thread: Option<JoinHandle<()>>,
}

impl TerminalWindow {
    /// Attach to the terminal, reading its current size.
    pub fn open(title: &str, cell: CellMetrics, close_on_ctrl_c: bool) -> Result<Self, PlatformError> {
        let (cols, rows) = Driver::<Stdout>::terminal_size()?;
        let mut window = Self::with_grid(title, cell, close_on_ctrl_c, cols, rows);
        window.set_title(title);
        Ok(window)
    }

    fn with_grid(title: &str, cell: CellMetrics, close_on_ctrl_c: bool, cols: u16, rows: u16) -> Self {
        let shared = Arc::new(Shared::default());
        shared.set_size(cell.grid_to_pixels(cols, rows));
        Self {
            title: title.to_owned(),
            cell,
            close_on_ctrl_c,
            shared,
            thread: None,
        }
    }

    /// Cell metrics used for pixel conversion.
    pub fn cell_metrics(&self) -> CellMetrics {
        self.cell
    }
}

impl Window for TerminalWindow {
    fn size(&self) -> (u32, u32) {
        (self.shared.width.load(Ordering::Relaxed), self.shared.height.load(Ordering::Relaxed))
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
        if let Err(err) = execute!(io::stdout(), terminal::SetTitle(title)) {
            tracing::debug!(%err, "terminal refused title change");
        }
    }

    fn should_close(&self) -> bool {
        self.shared.close.load(Ordering::Relaxed)
    }

    fn request_close(&self) {
        self.shared.close.store(true, Ordering::Relaxed);
    }

    fn start(&mut self, events: EventSender, rerender: RerenderHandle) -> Result<(), PlatformError> {
        if self.thread.is_some() {
            return Err(PlatformError::AlreadyStarted);
        }
        execute!(io::stdout(), EnableMouseCapture, EnableFocusChange)?;

        let shared = Arc::clone(&self.shared);
        let cell = self.cell;
        let close_on_ctrl_c = self.close_on_ctrl_c;
        let thread = std::thread::Builder::new()
            .name("declui-events".into())
            .spawn(move || produce(&shared, cell, close_on_ctrl_c, &events, &rerender))?;
        self.thread = Some(thread);
        tracing::debug!("terminal event thread started");
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), PlatformError> {
        self.shared.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("terminal event thread panicked");
            }
            let mut out = io::stdout();
            execute!(out, DisableMouseCapture, DisableFocusChange)?;
            out.flush()?;
        }
        Ok(())
    }
}

impl Drop for TerminalWindow {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

fn is_ctrl_c(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(k)
            if k.code == KeyCode::Char('c')
                && k.modifiers.contains(KeyModifiers::CONTROL)
                && k.kind == KeyEventKind::Press
    )
}

/// Producer loop: poll crossterm, translate, enqueue. Exits on `stop`, on a
/// read error, or once the UI side has dropped its buffers.
fn produce(
    shared: &Shared,
    cell: CellMetrics,
    close_on_ctrl_c: bool,
    events: &EventSender,
    rerender: &RerenderHandle,
) {
    while !shared.stop.load(Ordering::Relaxed) {
        let raw = match event::poll(POLL_INTERVAL) {
            Ok(true) => match event::read() {
                Ok(raw) => raw,
                Err(err) => {
                    tracing::error!(%err, "terminal event read failed");
                    return;
                }
            },
            Ok(false) => continue,
            Err(err) => {
                tracing::error!(%err, "terminal event poll failed");
                return;
            }
        };

        if close_on_ctrl_c && is_ctrl_c(&raw) {
            shared.close.store(true, Ordering::Relaxed);
        }

        for record in translate(raw, cell) {
            let resized = match record {
                InputEvent::Resize(r) => {
                    shared.set_size((r.width, r.height));
                    true
                }
                _ => false,
            };
            if !deliver(&shared.stop, events, record) {
                return;
            }
            if resized {
                rerender.request();
            }
        }
    }
}

/// Enqueue `record`, waiting while its buffer is full. Gives up once `stop` is
/// set or the UI side is gone; returns whether the record was enqueued.
fn deliver(stop: &AtomicBool, events: &EventSender, record: InputEvent) -> bool {
    loop {
        match events.try_send(record) {
            Ok(()) => return true,
            Err(SendError::Full(kind)) => {
                if stop.load(Ordering::Relaxed) {
                    tracing::debug!(%kind, "dropping record at shutdown, buffer full");
                    return false;
                }
                std::thread::sleep(RETRY_INTERVAL);
            }
            Err(err @ SendError::Closed(_)) => {
                tracing::debug!(%err, "event consumer gone, stopping producer");
                return false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventCoalescer, MouseMoveEvent};
    use crossterm::event::KeyEvent as CtKeyEvent;

    fn motion(x: f32) -> InputEvent {
        InputEvent::MouseMove(MouseMoveEvent { x, y: 0.0 })
    }

    #[test]
    fn size_is_grid_in_pixels() {
        let w = TerminalWindow::with_grid("t", CellMetrics::new(10.0, 20.0), true, 80, 24);
        assert_eq!(w.size(), (800, 480));
        assert_eq!(w.framebuffer_size(), (800, 480));
        assert_eq!(w.title(), "t");
    }

    #[test]
    fn close_flag_is_shared() {
        let w = TerminalWindow::with_grid("t", CellMetrics::default(), true, 10, 10);
        assert!(!w.should_close());
        w.request_close();
        assert!(w.should_close());
    }

    #[test]
    fn ctrl_c_detection() {
        let ctrl_c = Event::Key(CtKeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let plain_c = Event::Key(CtKeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(is_ctrl_c(&ctrl_c));
        assert!(!is_ctrl_c(&plain_c));
        assert!(!is_ctrl_c(&Event::FocusGained));
    }

    // ── Delivery ─────────────────────────────────────────────────────

    #[test]
    fn deliver_gives_up_on_full_buffer_once_stopped() {
        let mut coalescer = EventCoalescer::new(1);
        let events = coalescer.sender();
        events.try_send(motion(1.0)).unwrap();

        let stop = Arc::new(AtomicBool::new(false));
        let producer = {
            let stop = Arc::clone(&stop);
            std::thread::spawn(move || deliver(&stop, &events, motion(2.0)))
        };
        std::thread::sleep(Duration::from_millis(20));
        stop.store(true, Ordering::Relaxed);

        assert!(!producer.join().unwrap());
        assert_eq!(coalescer.drain(), vec![motion(1.0)]);
    }

    #[test]
    fn deliver_waits_for_drain() {
        let mut coalescer = EventCoalescer::new(1);
        let events = coalescer.sender();
        events.try_send(motion(1.0)).unwrap();

        let stop = Arc::new(AtomicBool::new(false));
        let producer = {
            let stop = Arc::clone(&stop);
            std::thread::spawn(move || deliver(&stop, &events, motion(2.0)))
        };
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(coalescer.drain(), vec![motion(1.0)]);

        assert!(producer.join().unwrap());
        assert_eq!(coalescer.drain(), vec![motion(2.0)]);
    }

    #[test]
    fn shutdown_without_start_is_noop() {
        let mut w = TerminalWindow::with_grid("t", CellMetrics::default(), false, 10, 10);
        assert!(w.shutdown().is_ok());
    }
}
