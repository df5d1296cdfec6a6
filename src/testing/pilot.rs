//! Pilot: programmatic interaction with a headless App.
//!
//! The `Pilot` wraps an [`App`] over a [`HeadlessWindow`] and a
//! [`RecordingRenderer`], and provides methods to simulate user input (keys,
//! typing, clicks, resize, focus), run frames, and dump what was drawn.

use crate::app::{App, AppConfig, FrameReport};
use crate::error::Result;
use crate::event::{
    Action, ClickEvent, InputEvent, Key, KeyEvent, Modifiers, MouseButton, MouseMoveEvent,
    ScrollEvent,
};
use crate::frame::Frame;
use crate::geometry::Rect;
use crate::platform::Window;
use crate::ui::Ui;

use super::recorder::{DrawCommand, RecordingRenderer};
use super::snapshot::{commands_to_string, frame_to_string};
use super::window::HeadlessWindow;

/// Upper bound on frames [`Pilot::settle`] runs before giving up.
const SETTLE_LIMIT: usize = 64;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless app driver for testing.
///
/// # Examples
///
/// ```
/// use declui::testing::Pilot;
///
/// let mut pilot = Pilot::new(200, 100, |ui| {
///     ui.text("hello");
/// });
/// pilot.tick();
/// assert!(pilot.rect_of("hello").is_some());
/// ```
pub struct Pilot {
    app: App<HeadlessWindow, RecordingRenderer>,
}

impl Pilot {
    /// A started app with a `width` x `height` pixel window.
    pub fn new(width: u32, height: u32, render: impl FnMut(&mut Ui<'_>) + 'static) -> Self {
        Self::with_config(AppConfig::new().with_size(width, height).with_debug(true), render)
    }

    /// A started app using `config`; the window takes `config.size`.
    ///
    /// # Panics
    ///
    /// Panics if the app fails to start.
    pub fn with_config(config: AppConfig, render: impl FnMut(&mut Ui<'_>) + 'static) -> Self {
        let (width, height) = config.size;
        let window = HeadlessWindow::new(width, height);
        let mut app = App::new(config, window, RecordingRenderer::new(), render);
        if let Err(err) = app.start() {
            panic!("headless app failed to start: {err}");
        }
        Self { app }
    }

    // ── Frames ───────────────────────────────────────────────────────

    /// Run one loop iteration.
    ///
    /// # Panics
    ///
    /// Panics if layout or rendering fails.
    pub fn tick(&mut self) -> FrameReport {
        match self.app.tick() {
            Ok(report) => report,
            Err(err) => panic!("frame failed: {err}"),
        }
    }

    /// Fallible [`tick`](Self::tick).
    pub fn try_tick(&mut self) -> Result<FrameReport> {
        self.app.tick()
    }

    /// Tick until an iteration neither rebuilds nor dispatches anything.
    /// Returns the number of rebuilds that happened.
    pub fn settle(&mut self) -> usize {
        let mut rebuilds = 0;
        for _ in 0..SETTLE_LIMIT {
            let report = self.tick();
            if report.rebuilt {
                rebuilds += 1;
            }
            if !report.rebuilt && report.invoked == 0 {
                break;
            }
        }
        rebuilds
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Enqueue any record. Returns `false` if its buffer is full.
    pub fn send(&mut self, event: InputEvent) -> bool {
        self.app.window().inject(event)
    }

    /// Simulate a key press.
    pub fn press_key(&mut self, key: Key, modifiers: Modifiers) {
        self.send(InputEvent::Key(KeyEvent::pressed(key, modifiers)));
    }

    /// Simulate a key release.
    pub fn release_key(&mut self, key: Key, modifiers: Modifiers) {
        self.send(InputEvent::Key(KeyEvent { action: Action::Release, key, modifiers }));
    }

    /// Simulate typing: a key press plus a text record per character.
    ///
    /// Runs a frame whenever a buffer fills, so no keystroke is dropped.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.send_draining(InputEvent::Key(KeyEvent::pressed(Key::Char(ch), Modifiers::NONE)));
            self.send_draining(InputEvent::Text(ch));
        }
    }

    fn send_draining(&mut self, event: InputEvent) {
        if self.send(event) {
            return;
        }
        self.tick();
        if !self.send(event) {
            panic!("{} buffer still full after a frame", event.kind());
        }
    }

    /// Simulate a left click at a pixel position.
    pub fn click(&mut self, x: f32, y: f32) {
        self.send(InputEvent::Click(ClickEvent {
            button: MouseButton::Left,
            x,
            y,
            modifiers: Modifiers::NONE,
        }));
    }

    /// Click the centre of the first text leaf showing `text`. Returns `false`
    /// if no such text is on screen.
    pub fn click_text(&mut self, text: &str) -> bool {
        let Some(rect) = self.rect_of(text) else {
            return false;
        };
        self.click(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
        true
    }

    pub fn move_mouse(&mut self, x: f32, y: f32) {
        self.send(InputEvent::MouseMove(MouseMoveEvent { x, y }));
    }

    pub fn scroll(&mut self, x: f32, y: f32) {
        self.send(InputEvent::Scroll(ScrollEvent { x, y }));
    }

    pub fn focus(&mut self, focused: bool) {
        self.send(InputEvent::Focus(focused));
    }

    /// Resize the window the way the event thread would: record plus rerender.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.app.window_mut().resize(width, height);
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Borrow the underlying app immutably.
    pub fn app(&self) -> &App<HeadlessWindow, RecordingRenderer> {
        &self.app
    }

    /// Borrow the underlying app mutably.
    pub fn app_mut(&mut self) -> &mut App<HeadlessWindow, RecordingRenderer> {
        &mut self.app
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.app.frame()
    }

    /// Absolute box of the first text leaf showing `text`.
    pub fn rect_of(&self, text: &str) -> Option<Rect> {
        let frame = self.app.frame()?;
        frame.find_text(text).and_then(|id| frame.rect(id))
    }

    /// Draw calls of the last frame.
    pub fn commands(&self) -> &[DrawCommand] {
        self.app.renderer().commands()
    }

    /// Whether the app asked to quit.
    pub fn is_running(&self) -> bool {
        !self.app.window().should_close()
    }

    /// The last frame as an indented outline with boxes.
    pub fn frame_snapshot(&self) -> String {
        self.app.frame().map(frame_to_string).unwrap_or_default()
    }

    /// The last frame's draw calls, one per line.
    pub fn commands_snapshot(&self) -> String {
        commands_to_string(self.commands())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
