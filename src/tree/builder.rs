//! The tree builder: an explicit container stack used during one rebuild pass.
//!
//! A pass starts with [`TreeBuilder::begin`], which creates a fresh tree whose
//! root container is the current cursor. Declaring a container pushes it on the
//! stack for the duration of its child closure and pops it afterwards, so the
//! cursor always names the innermost open container. [`TreeBuilder::finish`]
//! hands the finished tree out and leaves the builder inactive.

use super::node::{NodeId, WidgetKind, WidgetNode};
use super::tree::WidgetTree;
use crate::event::ClickEvent;
use crate::style::{combine, Styles};

/// Cursor state for building a [`WidgetTree`].
#[derive(Default)]
pub struct TreeBuilder {
    tree: Option<WidgetTree>,
    stack: Vec<NodeId>,
}

impl TreeBuilder {
    /// An inactive builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a rebuild pass with a fresh, empty root container.
    ///
    /// Any partially built tree from an aborted pass is discarded.
    pub fn begin(&mut self) {
        let tree = WidgetTree::new();
        self.stack.clear();
        self.stack.push(tree.root());
        self.tree = Some(tree);
    }

    /// Whether a pass is in progress.
    pub fn is_active(&self) -> bool {
        self.tree.is_some()
    }

    /// End the pass and take the built tree.
    ///
    /// # Panics
    ///
    /// Panics if no pass is active or a container is still open.
    pub fn finish(&mut self) -> WidgetTree {
        assert!(self.stack.len() <= 1, "finish called with an open container");
        self.stack.clear();
        match self.tree.take() {
            Some(tree) => tree,
            None => panic!("finish called outside a rebuild pass"),
        }
    }

    /// Declare a text leaf in the current container.
    ///
    /// # Panics
    ///
    /// Panics if called outside a rebuild pass.
    pub fn text(&mut self, text: impl Into<String>) -> Handle<'_> {
        let id = self.append(WidgetNode::new(WidgetKind::Text(text.into())));
        Handle { builder: self, id }
    }

    /// Declare a container, build its children with `children`, and return its handle.
    ///
    /// # Panics
    ///
    /// Panics if called outside a rebuild pass.
    pub fn container(&mut self, children: impl FnOnce(&mut TreeBuilder)) -> Handle<'_> {
        let id = self.open_container();
        children(self);
        self.close_container(id);
        Handle { builder: self, id }
    }

    /// Append a container and make it the cursor. Pair with [`close_container`](Self::close_container).
    pub fn open_container(&mut self) -> NodeId {
        let id = self.append(WidgetNode::new(WidgetKind::Container));
        self.stack.push(id);
        id
    }

    /// Restore the cursor to the parent of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not the innermost open container.
    pub fn close_container(&mut self, id: NodeId) {
        assert!(
            self.stack.len() > 1 && self.stack.last() == Some(&id),
            "close_container does not match the innermost open container"
        );
        self.stack.pop();
    }

    /// Handle for a node already declared in this pass.
    pub fn handle(&mut self, id: NodeId) -> Handle<'_> {
        Handle { builder: self, id }
    }

    /// The tree being built, if a pass is active.
    pub fn tree(&self) -> Option<&WidgetTree> {
        self.tree.as_ref()
    }

    fn append(&mut self, node: WidgetNode) -> NodeId {
        let (Some(tree), Some(&parent)) = (self.tree.as_mut(), self.stack.last()) else {
            panic!("widgets can only be declared during a rebuild pass");
        };
        tree.append(parent, node)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut WidgetNode> {
        self.tree.as_mut().and_then(|t| t.get_mut(id))
    }
}

/// Per-node, per-pass capability to attach styles and a click callback after
/// declaring a node. Valid only until the declaration continues.
pub struct Handle<'b> {
    builder: &'b mut TreeBuilder,
    id: NodeId,
}

impl<'b> Handle<'b> {
    /// The node this handle refers to.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Replace the node's style set for this pass.
    pub fn with_styles(self, styles: Styles) -> Self {
        if let Some(node) = self.builder.node_mut(self.id) {
            node.styles = styles;
        }
        self
    }

    /// Combine several style sets in order and attach the result.
    /// An empty slice leaves the node's styles untouched.
    pub fn with_combined(self, layers: &[Styles]) -> Self {
        match combine(layers) {
            Ok(styles) => self.with_styles(styles),
            Err(_) => self,
        }
    }

    /// Attach a click callback for this pass, replacing any earlier one.
    pub fn on_click(self, callback: impl FnMut(&ClickEvent) + 'static) -> Self {
        if let Some(node) = self.builder.node_mut(self.id) {
            node.on_click = Some(Box::new(callback));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use pretty_assertions::assert_eq;

    fn two_texts(b: &mut TreeBuilder) {
        b.container(|b| {
            b.text("A");
            b.text("B");
        })
        .with_styles(Styles::new().width(100.0));
    }

    // ── Passes ───────────────────────────────────────────────────────

    #[test]
    fn begin_creates_empty_root() {
        let mut b = TreeBuilder::new();
        assert!(!b.is_active());
        b.begin();
        assert!(b.is_active());
        let tree = b.finish();
        assert!(tree.is_empty());
        assert!(!b.is_active());
    }

    #[test]
    fn nested_declarations_land_in_their_container() {
        let mut b = TreeBuilder::new();
        b.begin();
        two_texts(&mut b);
        b.text("C");
        let tree = b.finish();

        let top = tree.children(tree.root());
        assert_eq!(top.len(), 2);
        let inner: Vec<_> = tree
            .children(top[0])
            .iter()
            .filter_map(|&id| tree.get(id)?.kind.text().map(str::to_owned))
            .collect();
        assert_eq!(inner, vec!["A", "B"]);
        assert_eq!(tree.get(top[1]).and_then(|n| n.kind.text()), Some("C"));
    }

    #[test]
    fn rebuild_is_idempotent() {
        let mut b = TreeBuilder::new();
        b.begin();
        two_texts(&mut b);
        let first = b.finish().outline();
        b.begin();
        two_texts(&mut b);
        let second = b.finish().outline();
        assert_eq!(first, second);
    }

    #[test]
    fn begin_discards_aborted_pass() {
        let mut b = TreeBuilder::new();
        b.begin();
        b.open_container();
        b.text("left over");
        b.begin();
        let tree = b.finish();
        assert!(tree.is_empty());
    }

    #[test]
    #[should_panic(expected = "rebuild pass")]
    fn declaring_outside_a_pass_panics() {
        let mut b = TreeBuilder::new();
        b.text("orphan");
    }

    #[test]
    #[should_panic(expected = "innermost open container")]
    fn closing_the_wrong_container_panics() {
        let mut b = TreeBuilder::new();
        b.begin();
        let outer = b.open_container();
        b.open_container();
        b.close_container(outer);
    }

    // ── Handles ──────────────────────────────────────────────────────

    #[test]
    fn with_styles_overwrites() {
        let mut b = TreeBuilder::new();
        b.begin();
        let id = b
            .text("x")
            .with_styles(Styles::new().font_size(30.0))
            .with_styles(Styles::new().color(Color::BLACK))
            .id();
        let tree = b.finish();
        assert_eq!(tree.get(id).map(|n| n.styles.clone()), Some(Styles::new().color(Color::BLACK)));
    }

    #[test]
    fn with_combined_layers_in_order() {
        let mut b = TreeBuilder::new();
        b.begin();
        let id = b
            .text("x")
            .with_combined(&[Styles::new().width(50.0), Styles::new().width_pct(50.0)])
            .id();
        let tree = b.finish();
        assert_eq!(tree.get(id).map(|n| n.styles.clone()), Some(Styles::new().width_pct(50.0)));
    }

    #[test]
    fn with_combined_empty_is_noop() {
        let mut b = TreeBuilder::new();
        b.begin();
        let id = b
            .text("x")
            .with_styles(Styles::new().font_size(12.0))
            .with_combined(&[])
            .id();
        let tree = b.finish();
        assert_eq!(tree.get(id).map(|n| n.styles.clone()), Some(Styles::new().font_size(12.0)));
    }

    #[test]
    fn on_click_attaches_to_that_node_only() {
        let mut b = TreeBuilder::new();
        b.begin();
        let clicked = b.text("yes").on_click(|_| {}).id();
        let plain = b.text("no").id();
        let tree = b.finish();
        assert!(tree.get(clicked).is_some_and(|n| n.has_click()));
        assert!(tree.get(plain).is_some_and(|n| !n.has_click()));
    }

    #[test]
    fn callbacks_do_not_survive_a_rebuild() {
        let mut b = TreeBuilder::new();
        b.begin();
        b.text("x").on_click(|_| {});
        let first = b.finish();
        b.begin();
        b.text("x");
        let second = b.finish();
        assert!(first.outline()[1].has_click);
        assert!(!second.outline()[1].has_click);
    }
}
