//! A menu screen: a title and a list of selectable items.
//!
//! Up/Down or a click moves the selection; Escape quits.
//!
//! ```sh
//! RUST_LOG=declui=debug cargo run --example menu 2>menu.log
//! ```

use std::cell::Cell;
use std::rc::Rc;

use declui::event::{Action, Key};
use declui::style::{
    conditional, Align, Color, Edge, Styles, TextAlign, FONT_BOLD, FONT_MONO_REGULAR,
};
use declui::AppConfig;
use tracing_subscriber::EnvFilter;

const ITEMS: [&str; 3] = [
    "Board /b/ - Random",
    "Board /g/ - Technology",
    "Board /pol/ - Politically incorrect",
];

const TEXT_COLOR: Color = Color::rgba(255, 255, 255, 153);
const SELECTED_COLOR: Color = Color::rgb(57, 181, 74);

fn title_styles() -> Styles {
    Styles::new()
        .color(TEXT_COLOR)
        .font_size(36.0)
        .text_align(TextAlign::Center)
        .font_family(FONT_BOLD)
        .margin(Edge::All, 18.0)
}

fn menu_container() -> Styles {
    Styles::new().min_width(400.0).height(300.0).align_self(Align::Center)
}

fn menu_item() -> Styles {
    Styles::new().border_radius(5.0)
}

fn menu_item_text() -> Styles {
    Styles::new()
        .font_size(20.0)
        .font_family(FONT_MONO_REGULAR)
        .color(TEXT_COLOR)
        .margin(Edge::Vertical, 6.0)
        .margin(Edge::Horizontal, 18.0)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let index = Rc::new(Cell::new(2usize));
    let quit = Rc::new(Cell::new(false));
    let selected_style = conditional(Styles::new().background(SELECTED_COLOR), Styles::new());

    let config = AppConfig::new().with_title("Jux");
    let result = declui::run_blocking(config, move |ui| {
        if quit.get() {
            ui.quit();
            return;
        }

        let keys = Rc::clone(&index);
        let escape = Rc::clone(&quit);
        ui.on_key(move |ev| {
            if ev.action == Action::Release {
                return;
            }
            match ev.key {
                Key::Up => keys.set(keys.get().saturating_sub(1)),
                Key::Down => keys.set((keys.get() + 1).min(ITEMS.len() - 1)),
                Key::Escape => escape.set(true),
                _ => {}
            }
        });
        ui.on_click(|ev| tracing::info!("{ev}"));

        ui.text("Jux")
            .with_styles(title_styles())
            .on_click(|ev| tracing::info!("title clicked: {ev}"));

        ui.container(|ui| {
            for (i, item) in ITEMS.iter().enumerate() {
                let selected = i == index.get();
                let clicks = Rc::clone(&index);
                ui.container(|ui| {
                    ui.text(format!("{item} {selected}")).with_styles(menu_item_text());
                })
                .with_combined(&[menu_item(), selected_style(selected)])
                .on_click(move |_| clicks.set(i));
            }
        })
        .with_styles(menu_container());
    });

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
