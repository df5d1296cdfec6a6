//! # declui
//!
//! An immediate-declaration UI runtime. The application supplies a render
//! function; every frame that needs it, the runtime calls that function to
//! rebuild the widget tree from scratch, resolves the style cascade, lays the
//! tree out with [taffy](https://crates.io/crates/taffy), draws it, and routes
//! input back to handlers.
//!
//! ```no_run
//! use declui::style::{Color, Styles};
//! use declui::AppConfig;
//!
//! declui::run_blocking(AppConfig::new().with_title("hello"), |ui| {
//!     ui.container(|ui| {
//!         ui.text("Hello, world");
//!     })
//!     .with_styles(Styles::new().background(Color::rgb(57, 181, 74)));
//!     ui.on_key(|key| println!("{key}"));
//! })
//! .unwrap();
//! ```
//!
//! ## Core Systems
//!
//! - **[`style`]** — Unset-able style values, style sets, `combine`, default resolution
//! - **[`tree`]** — Slotmap-backed widget tree and the per-pass tree builder
//! - **[`layout`]** — Taffy-powered flexbox layout mirroring the widget tree, hit testing
//! - **[`event`]** — Input records, per-kind bounded buffers, global handlers
//! - **[`schedule`]** — The saturating rerender signal
//! - **[`render`]** — The `Renderer` seam, the draw pass, and the crossterm backend
//! - **[`platform`]** — The `Window` seam and the terminal event source
//! - **[`app`]** — Configuration and the frame driver
//! - **[`testing`]** — Headless pilot, recording renderer, snapshot helpers

// Foundation
pub mod error;
pub mod geometry;
pub mod logging;

// Declaration model
pub mod style;
pub mod tree;
pub mod ui;

// Layout
pub mod frame;
pub mod layout;

// Events and scheduling
pub mod event;
pub mod schedule;

// Output and host
pub mod platform;
pub mod render;
pub mod resource;

// Application
pub mod app;
pub mod testing;

pub use app::{run, run_blocking, App, AppConfig, FrameReport};
pub use error::{Error, Result};
pub use ui::Ui;
