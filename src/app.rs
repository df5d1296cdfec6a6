//! Application configuration and the frame driver.
//!
//! [`App`] owns the window, the renderer, the user's render function and all
//! per-frame state. One [`App::tick`] is one loop iteration: drain redraw
//! requests, rebuild and draw if any arrived, drain input records, dispatch
//! them, and request one rerender if any handler ran.

use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::event::{EventCoalescer, Handlers, InputEvent, Invocation, DEFAULT_EVENT_CAPACITY};
use crate::frame::Frame;
use crate::geometry::CellMetrics;
use crate::layout::LayoutEngine;
use crate::logging::{DebugLog, DEFAULT_LOG_CAPACITY};
use crate::platform::{TerminalWindow, Window};
use crate::render::{paint, Renderer, TerminalRenderer};
use crate::schedule::{RenderScheduler, RerenderHandle, DEFAULT_REDRAW_CAPACITY};
use crate::style::BUNDLED_FONTS;
use crate::tree::TreeBuilder;
use crate::ui::Ui;

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// A font to register at startup: family name plus path or URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSource {
    pub name: String,
    pub location: String,
}

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Window title.
    pub title: String,
    /// Initial window size in pixels, used by headless windows.
    pub size: (u32, u32),
    /// Idle sleep between two loop iterations.
    pub tick: Duration,
    /// Capacity of the redraw signal queue.
    pub redraw_capacity: usize,
    /// Capacity of each per-kind event buffer.
    pub event_capacity: usize,
    /// Fonts loaded and registered before the first frame.
    pub fonts: Vec<FontSource>,
    /// Retain warnings and errors in the [`DebugLog`].
    pub debug: bool,
    pub log_capacity: usize,
    /// Pixel size of one terminal cell.
    pub cell: CellMetrics,
    /// Whether Ctrl+C closes the terminal window.
    pub close_on_ctrl_c: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "declui".to_owned(),
            size: (1200, 800),
            tick: Duration::from_millis(10),
            redraw_capacity: DEFAULT_REDRAW_CAPACITY,
            event_capacity: DEFAULT_EVENT_CAPACITY,
            fonts: Vec::new(),
            debug: false,
            log_capacity: DEFAULT_LOG_CAPACITY,
            cell: CellMetrics::default(),
            close_on_ctrl_c: true,
        }
    }
}

impl AppConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_redraw_capacity(mut self, capacity: usize) -> Self {
        self.redraw_capacity = capacity;
        self
    }

    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Register font `name` from a path or `http(s)://` URL at startup.
    pub fn with_font(mut self, name: impl Into<String>, location: impl Into<String>) -> Self {
        self.fonts.push(FontSource { name: name.into(), location: location.into() });
        self
    }

    /// Add every bundled family from `<dir>/<name>.ttf`.
    pub fn with_default_fonts(mut self, dir: impl AsRef<Path>) -> Self {
        for name in BUNDLED_FONTS {
            let path = dir.as_ref().join(format!("{name}.ttf"));
            self = self.with_font(name, path.to_string_lossy());
        }
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    pub fn with_cell_metrics(mut self, cell: CellMetrics) -> Self {
        self.cell = cell;
        self
    }

    pub fn with_close_on_ctrl_c(mut self, close: bool) -> Self {
        self.close_on_ctrl_c = close;
        self
    }
}

// ---------------------------------------------------------------------------
// FrameReport
// ---------------------------------------------------------------------------

/// What one loop iteration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// The tree was rebuilt, laid out and drawn.
    pub rebuilt: bool,
    /// Records drained from the event buffers.
    pub drained: usize,
    /// Handler and node-callback invocations, failed ones included.
    pub invoked: usize,
    /// Invocations that panicked.
    pub failed: usize,
}

impl FrameReport {
    fn record(&mut self, invocation: Invocation) -> Option<String> {
        match invocation {
            Invocation::Unhandled => None,
            Invocation::Completed => {
                self.invoked += 1;
                None
            }
            Invocation::Panicked(message) => {
                self.invoked += 1;
                self.failed += 1;
                Some(message)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The user's render function.
pub type RenderFn = Box<dyn FnMut(&mut Ui<'_>)>;

/// The frame driver.
pub struct App<W: Window = TerminalWindow, R: Renderer = TerminalRenderer> {
    config: AppConfig,
    window: W,
    renderer: R,
    render: RenderFn,
    builder: TreeBuilder,
    handlers: Handlers,
    layout: LayoutEngine,
    frame: Option<Frame>,
    events: EventCoalescer,
    scheduler: RenderScheduler,
    rerender: RerenderHandle,
    log: DebugLog,
    rebuilds: u64,
}

impl<W: Window, R: Renderer> App<W, R> {
    /// Assemble an app. The first tick always rebuilds.
    pub fn new(config: AppConfig, window: W, renderer: R, render: impl FnMut(&mut Ui<'_>) + 'static) -> Self {
        let scheduler = RenderScheduler::new(config.redraw_capacity);
        let rerender = scheduler.handle();
        rerender.request();
        Self {
            events: EventCoalescer::new(config.event_capacity),
            log: DebugLog::new(config.log_capacity, config.debug),
            config,
            window,
            renderer,
            render: Box::new(render),
            builder: TreeBuilder::new(),
            handlers: Handlers::new(),
            layout: LayoutEngine::new(),
            frame: None,
            scheduler,
            rerender,
            rebuilds: 0,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The last frame built, if any.
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn log(&self) -> &DebugLog {
        &self.log
    }

    /// Total number of rebuilds so far.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Handle for requesting rebuilds from outside the render function.
    pub fn rerender_handle(&self) -> RerenderHandle {
        self.rerender.clone()
    }

    /// Load every configured font and register it with the renderer.
    pub async fn load_fonts(&mut self) -> Result<()> {
        for font in &self.config.fonts {
            let data = crate::resource::load(&font.location)
                .await
                .map_err(|source| Error::Font { name: font.name.clone(), source })?;
            self.renderer.register_font(&font.name, data)?;
        }
        tracing::info!(fonts = self.config.fonts.len(), "fonts loaded");
        Ok(())
    }

    /// Connect the window's event source to this app's buffers.
    pub fn start(&mut self) -> Result<()> {
        self.window.start(self.events.sender(), self.rerender.clone())?;
        Ok(())
    }

    /// Run one loop iteration.
    pub fn tick(&mut self) -> Result<FrameReport> {
        let mut report = FrameReport::default();

        if self.scheduler.drain() {
            self.rebuild()?;
            report.rebuilt = true;
        }

        let events = self.events.drain();
        report.drained = events.len();
        for event in events {
            let kind = event.kind();
            let click = match &event {
                InputEvent::Click(c) => Some(*c),
                _ => None,
            };
            if let Some(message) = report.record(self.handlers.dispatch(event)) {
                self.log.error(format!("{kind} handler panicked: {message}"));
            }
            if let (Some(click), Some(frame)) = (click, self.frame.as_mut()) {
                if let Some(message) = report.record(frame.route_click(&click)) {
                    self.log.error(format!("click callback panicked: {message}"));
                }
            }
        }

        if report.invoked > 0 {
            self.rerender.request();
        }
        Ok(report)
    }

    fn rebuild(&mut self) -> Result<()> {
        let (width, height) = self.window.size();

        self.builder.begin();
        {
            let mut ui = Ui::new(&mut self.builder, &mut self.handlers, &mut self.window, &self.rerender);
            (self.render)(&mut ui);
        }
        let tree = self.builder.finish();

        let frame = Frame::layout(tree, &mut self.layout, width as f32, height as f32)?;

        let (fb_width, _) = self.window.framebuffer_size();
        let ratio = if width == 0 { 1.0 } else { fb_width as f32 / width as f32 };
        self.renderer.begin_frame(width, height, ratio)?;
        paint(&frame, &mut self.renderer);
        self.renderer.end_frame()?;

        self.frame = Some(frame);
        self.rebuilds += 1;
        tracing::trace!(rebuilds = self.rebuilds, width, height, "frame rebuilt");
        Ok(())
    }

    /// Stop the event source and release the renderer.
    pub fn shutdown(&mut self) -> Result<()> {
        self.window.shutdown()?;
        self.renderer.shutdown()?;
        tracing::info!(rebuilds = self.rebuilds, "app shut down");
        Ok(())
    }

    /// Load fonts, start the event source and loop until the window closes.
    pub async fn run(mut self) -> Result<()> {
        self.load_fonts().await?;
        self.start()?;
        tracing::info!(title = %self.config.title, "app started");

        let result = loop {
            if self.window.should_close() {
                break Ok(());
            }
            if let Err(err) = self.tick() {
                break Err(err);
            }
            tokio::time::sleep(self.config.tick).await;
        };

        let closed = self.shutdown();
        result.and(closed)
    }
}

/// Open the terminal as a window and run `render` until it closes.
pub async fn run(config: AppConfig, render: impl FnMut(&mut Ui<'_>) + 'static) -> Result<()> {
    let window = TerminalWindow::open(&config.title, config.cell, config.close_on_ctrl_c)?;
    let renderer = TerminalRenderer::open(config.cell)?;
    App::new(config, window, renderer, render).run().await
}

/// [`run`] on a current-thread runtime, keeping all UI work on the calling thread.
pub fn run_blocking(config: AppConfig, render: impl FnMut(&mut Ui<'_>) + 'static) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(run(config, render))
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::event::{ClickEvent, Modifiers, MouseButton, ResizeEvent};
    use crate::style::Styles;
    use crate::testing::{HeadlessWindow, RecordingRenderer};
    use pretty_assertions::assert_eq;

    type TestApp = App<HeadlessWindow, RecordingRenderer>;

    fn app(render: impl FnMut(&mut Ui<'_>) + 'static) -> TestApp {
        let config = AppConfig::new().with_debug(true);
        let mut app = App::new(config, HeadlessWindow::new(100, 100), RecordingRenderer::new(), render);
        app.start().unwrap();
        app
    }

    fn click(x: f32, y: f32) -> InputEvent {
        InputEvent::Click(ClickEvent { button: MouseButton::Left, x, y, modifiers: Modifiers::NONE })
    }

    // ── AppConfig ────────────────────────────────────────────────────

    #[test]
    fn config_defaults() {
        let c = AppConfig::default();
        assert_eq!(c.title, "declui");
        assert_eq!(c.size, (1200, 800));
        assert_eq!(c.tick, Duration::from_millis(10));
        assert_eq!(c.redraw_capacity, 100);
        assert_eq!(c.event_capacity, 10);
        assert_eq!(c.log_capacity, 256);
        assert_eq!(c.cell, CellMetrics::new(9.0, 18.0));
        assert!(c.close_on_ctrl_c);
        assert!(!c.debug);
        assert!(c.fonts.is_empty());
    }

    #[test]
    fn config_default_fonts() {
        let c = AppConfig::new().with_default_fonts("assets");
        assert_eq!(c.fonts.len(), 8);
        assert_eq!(c.fonts[0].name, "Roboto-Regular");
        assert!(c.fonts[0].location.ends_with("Roboto-Regular.ttf"));
    }

    #[test]
    fn config_builder_chain() {
        let c = AppConfig::new()
            .with_title("t")
            .with_size(10, 20)
            .with_font("x", "https://example.com/x.ttf")
            .with_close_on_ctrl_c(false);
        assert_eq!(c.title, "t");
        assert_eq!(c.size, (10, 20));
        assert_eq!(c.fonts[0].location, "https://example.com/x.ttf");
        assert!(!c.close_on_ctrl_c);
    }

    // ── tick ─────────────────────────────────────────────────────────

    #[test]
    fn first_tick_rebuilds_then_idles() {
        let mut app = app(|ui| {
            ui.text("hello");
        });
        assert!(app.tick().unwrap().rebuilt);
        assert!(!app.tick().unwrap().rebuilt);
        assert_eq!(app.rebuild_count(), 1);
    }

    #[test]
    fn many_requests_one_rebuild() {
        let mut app = app(|_| {});
        let handle = app.rerender_handle();
        for _ in 0..250 {
            handle.request();
        }
        let report = app.tick().unwrap();
        assert!(report.rebuilt);
        assert_eq!(app.rebuild_count(), 1);
        assert!(!app.tick().unwrap().rebuilt);
    }

    #[test]
    fn dispatch_requests_exactly_one_rerender() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let mut app = app(move |ui| {
            let a = Rc::clone(&log);
            let b = Rc::clone(&log);
            ui.on_click(move |c| a.borrow_mut().push(format!("click {}", c.x)));
            ui.on_resize(move |r| b.borrow_mut().push(format!("resize {}", r.width)));
        });
        app.tick().unwrap();

        app.window().inject(click(1.0, 1.0));
        app.window().inject(click(2.0, 2.0));
        app.window().inject(InputEvent::Resize(ResizeEvent { width: 300, height: 200 }));
        let report = app.tick().unwrap();
        assert!(!report.rebuilt);
        assert_eq!(report.drained, 3);
        assert_eq!(report.invoked, 3);
        assert_eq!(*seen.borrow(), ["click 1", "click 2", "resize 300"]);

        let next = app.tick().unwrap();
        assert!(next.rebuilt);
        assert_eq!(app.rebuild_count(), 2);
    }

    #[test]
    fn unhandled_events_do_not_rerender() {
        let mut app = app(|_| {});
        app.tick().unwrap();
        app.window().inject(InputEvent::Text('x'));
        let report = app.tick().unwrap();
        assert_eq!((report.drained, report.invoked), (1, 0));
        assert!(!app.tick().unwrap().rebuilt);
    }

    #[test]
    fn click_routes_to_node_callback() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let mut app = app(move |ui| {
            let counter = Rc::clone(&counter);
            ui.text("button").on_click(move |_| counter.set(counter.get() + 1));
        });
        app.tick().unwrap();
        app.window().inject(click(5.0, 5.0));
        app.window().inject(click(5.0, 90.0));
        let report = app.tick().unwrap();
        assert_eq!(hits.get(), 1);
        assert_eq!(report.invoked, 1);
    }

    #[test]
    fn handler_panic_is_isolated_and_logged() {
        let resized = Rc::new(Cell::new(false));
        let flag = Rc::clone(&resized);
        let mut app = app(move |ui| {
            let flag = Rc::clone(&flag);
            ui.on_click(|_| panic!("bad click"));
            ui.on_resize(move |_| flag.set(true));
        });
        app.tick().unwrap();
        app.window().inject(click(1.0, 1.0));
        app.window().inject(InputEvent::Resize(ResizeEvent { width: 1, height: 1 }));
        let report = app.tick().unwrap();
        assert_eq!((report.invoked, report.failed), (2, 1));
        assert!(resized.get());
        let errors: Vec<_> = app.log().errors().map(|e| e.message.clone()).collect();
        assert_eq!(errors, ["click handler panicked: bad click"]);
    }

    #[test]
    fn rebuild_draws_every_node() {
        let mut app = app(|ui| {
            ui.container(|ui| {
                ui.text("A");
            })
            .with_styles(Styles::new().background("#39b54a".parse().unwrap()));
        });
        app.tick().unwrap();
        assert_eq!(app.renderer().frames(), 1);
        assert_eq!(app.renderer().commands().len(), 3);
    }

    #[test]
    fn title_and_quit_from_render_function() {
        let mut app = app(|ui| {
            ui.set_title("Menu");
            ui.quit();
        });
        app.tick().unwrap();
        assert_eq!(app.window().title(), "Menu");
        assert!(app.window().should_close());
    }

    #[tokio::test]
    async fn run_exits_when_window_closes() {
        let app = app(|ui| ui.quit());
        app.run().await.unwrap();
    }

    #[tokio::test]
    async fn missing_font_aborts_startup() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::new().with_font("Roboto-Regular", dir.path().join("nope.ttf").to_string_lossy());
        let mut app = App::new(config, HeadlessWindow::new(10, 10), RecordingRenderer::new(), |_| {});
        let err = app.load_fonts().await.unwrap_err();
        assert!(err.to_string().starts_with("failed to load font Roboto-Regular"));
    }
}
