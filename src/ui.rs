//! The declaration surface handed to the render function on every rebuild.
//!
//! A [`Ui`] only exists for the duration of one pass. Widgets declared through
//! it land in the tree being built; handlers registered through it replace the
//! global handler of their kind and stay registered across passes until
//! replaced again.

use crate::event::{ClickEvent, Handlers, KeyEvent, MouseMoveEvent, PositionEvent, ResizeEvent, ScrollEvent};
use crate::platform::Window;
use crate::schedule::RerenderHandle;
use crate::tree::{Handle, TreeBuilder};

/// Per-pass context for declaring widgets and talking to the host window.
pub struct Ui<'f> {
    builder: &'f mut TreeBuilder,
    handlers: &'f mut Handlers,
    window: &'f mut dyn Window,
    rerender: &'f RerenderHandle,
}

impl<'f> Ui<'f> {
    pub(crate) fn new(
        builder: &'f mut TreeBuilder,
        handlers: &'f mut Handlers,
        window: &'f mut dyn Window,
        rerender: &'f RerenderHandle,
    ) -> Self {
        Self { builder, handlers, window, rerender }
    }

    // ── Widgets ──────────────────────────────────────────────────────

    /// Declare a text leaf in the current container.
    pub fn text(&mut self, text: impl Into<String>) -> Handle<'_> {
        self.builder.text(text)
    }

    /// Declare a container whose children are declared by `children`.
    pub fn container(&mut self, children: impl FnOnce(&mut Ui<'f>)) -> Handle<'_> {
        let id = self.builder.open_container();
        children(self);
        self.builder.close_container(id);
        self.builder.handle(id)
    }

    // ── Host ─────────────────────────────────────────────────────────

    /// Ask for another rebuild after this one.
    pub fn request_rerender(&self) {
        self.rerender.request();
    }

    /// A handle that can request rebuilds from other threads.
    pub fn rerender_handle(&self) -> RerenderHandle {
        self.rerender.clone()
    }

    pub fn set_title(&mut self, title: &str) {
        if self.window.title() != title {
            self.window.set_title(title);
        }
    }

    pub fn title(&self) -> &str {
        self.window.title()
    }

    /// Window size in pixels.
    pub fn size(&self) -> (u32, u32) {
        self.window.size()
    }

    /// Close the window; the frame loop exits before its next iteration.
    pub fn quit(&self) {
        self.window.request_close();
    }

    // ── Handlers ─────────────────────────────────────────────────────

    pub fn on_key(&mut self, f: impl FnMut(KeyEvent) + 'static) {
        self.handlers.on_key(f);
    }

    pub fn on_text(&mut self, f: impl FnMut(char) + 'static) {
        self.handlers.on_text(f);
    }

    /// Window-wide click handler. Runs before the callback of the clicked node.
    pub fn on_click(&mut self, f: impl FnMut(ClickEvent) + 'static) {
        self.handlers.on_click(f);
    }

    pub fn on_resize(&mut self, f: impl FnMut(ResizeEvent) + 'static) {
        self.handlers.on_resize(f);
    }

    pub fn on_position_change(&mut self, f: impl FnMut(PositionEvent) + 'static) {
        self.handlers.on_position_change(f);
    }

    pub fn on_focus_change(&mut self, f: impl FnMut(bool) + 'static) {
        self.handlers.on_focus_change(f);
    }

    pub fn on_maximize_change(&mut self, f: impl FnMut(bool) + 'static) {
        self.handlers.on_maximize_change(f);
    }

    pub fn on_mouse_move(&mut self, f: impl FnMut(MouseMoveEvent) + 'static) {
        self.handlers.on_mouse_move(f);
    }

    pub fn on_scroll(&mut self, f: impl FnMut(ScrollEvent) + 'static) {
        self.handlers.on_scroll(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use crate::schedule::RenderScheduler;
    use crate::style::Styles;
    use crate::testing::HeadlessWindow;
    use crate::tree::WidgetKind;
    use pretty_assertions::assert_eq;

    fn pass(window: &mut HeadlessWindow, handlers: &mut Handlers, f: impl FnOnce(&mut Ui<'_>)) -> crate::tree::WidgetTree {
        let mut scheduler = RenderScheduler::new(4);
        let rerender = scheduler.handle();
        let mut builder = TreeBuilder::new();
        builder.begin();
        {
            let mut ui = Ui::new(&mut builder, handlers, window, &rerender);
            f(&mut ui);
        }
        let _ = scheduler.drain();
        builder.finish()
    }

    #[test]
    fn nested_containers_restore_cursor() {
        let mut window = HeadlessWindow::new(100, 100);
        let mut handlers = Handlers::new();
        let tree = pass(&mut window, &mut handlers, |ui| {
            ui.container(|ui| {
                ui.text("inner");
                ui.container(|ui| {
                    ui.text("deep");
                });
            })
            .with_styles(Styles::new().width(50.0));
            ui.text("after");
        });
        let outline: Vec<(usize, String)> =
            tree.outline().into_iter().map(|o| (o.depth, o.kind.to_string())).collect();
        assert_eq!(outline.len(), 6);
        assert_eq!(outline[5].0, 1);
        let root_children = tree.children(tree.root());
        assert_eq!(root_children.len(), 2);
        assert!(matches!(tree.get(root_children[1]).map(|n| &n.kind), Some(WidgetKind::Text(t)) if t == "after"));
    }

    #[test]
    fn host_operations_reach_the_window() {
        let mut window = HeadlessWindow::new(640, 480);
        let mut handlers = Handlers::new();
        pass(&mut window, &mut handlers, |ui| {
            assert_eq!(ui.size(), (640, 480));
            ui.set_title("Menu");
            assert_eq!(ui.title(), "Menu");
            ui.quit();
        });
        assert_eq!(window.title(), "Menu");
        assert!(window.should_close());
    }

    #[test]
    fn handlers_registered_during_pass_persist() {
        let mut window = HeadlessWindow::new(10, 10);
        let mut handlers = Handlers::new();
        pass(&mut window, &mut handlers, |ui| {
            ui.on_key(|_| {});
            ui.on_scroll(|_| {});
        });
        pass(&mut window, &mut handlers, |_| {});
        assert!(handlers.is_registered(EventKind::Key));
        assert!(handlers.is_registered(EventKind::Scroll));
        assert!(!handlers.is_registered(EventKind::Click));
    }
}
