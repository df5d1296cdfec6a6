//! Render a UI described by newline-delimited JSON read from stdin.
//!
//! ```sh
//! echo '{"ui": {"type": "box", "children": [{"type": "text", "text": "Hello World"}]}, "window": {"title": "json"}}' \
//!     | cargo run --example json_ui
//! ```
//!
//! Each line replaces the whole UI. Malformed lines are reported on stderr and
//! skipped.

use std::io::BufRead;

use declui::platform::TerminalWindow;
use declui::render::TerminalRenderer;
use declui::style::{Color, Edge, Styles};
use declui::{App, AppConfig, Ui};
use serde::Deserialize;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Deserialize)]
struct UiRequest {
    #[serde(rename = "ui")]
    widget: Option<Widget>,
    #[serde(default)]
    events: Vec<String>,
    window: Option<WindowRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Widget {
    Text {
        text: String,
    },
    Box {
        #[serde(default)]
        children: Vec<Widget>,
    },
}

#[derive(Debug, Deserialize)]
struct WindowRequest {
    title: Option<String>,
}

const TEXT_COLOR: Color = Color::rgba(255, 255, 255, 153);

fn declare(ui: &mut Ui<'_>, widget: &Widget) {
    match widget {
        Widget::Text { text } => {
            ui.text(text.as_str())
                .with_styles(Styles::new().color(TEXT_COLOR).margin(Edge::Horizontal, 9.0));
        }
        Widget::Box { children } => {
            ui.container(|ui| {
                for child in children {
                    declare(ui, child);
                }
            });
        }
    }
}

fn main() -> declui::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::new().with_title("json-ui");
    let window = TerminalWindow::open(&config.title, config.cell, config.close_on_ctrl_c)?;
    let renderer = TerminalRenderer::open(config.cell)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<UiRequest>();
    let mut latest = UiRequest::default();
    let app = App::new(config, window, renderer, move |ui| {
        while let Ok(request) = rx.try_recv() {
            if let Some(title) = request.window.as_ref().and_then(|w| w.title.as_deref()) {
                ui.set_title(title);
            }
            if !request.events.is_empty() {
                tracing::debug!(events = ?request.events, "event subscriptions ignored");
            }
            latest = request;
        }
        if let Some(widget) = &latest.widget {
            declare(ui, widget);
        }
    });

    let rerender = app.rerender_handle();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("stdin: {err}");
                    return;
                }
            };
            match serde_json::from_str::<UiRequest>(&line) {
                Ok(request) => {
                    if tx.send(request).is_err() {
                        return;
                    }
                    rerender.request();
                }
                Err(err) => eprintln!("could not parse request: {err}"),
            }
        }
    });

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(app.run())
}
