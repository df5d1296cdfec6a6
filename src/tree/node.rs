//! Node types: NodeId, WidgetKind, WidgetNode.

use std::fmt;

use slotmap::new_key_type;

use crate::event::ClickEvent;
use crate::style::Styles;

new_key_type! {
    /// Identifier of a widget node within one rebuilt tree. Copy, lightweight (u64).
    ///
    /// Ids are only meaningful for the tree that issued them; every rebuild
    /// starts a fresh arena.
    pub struct NodeId;
}

/// A click callback attached to one node for one rebuild pass.
pub type ClickCallback = Box<dyn FnMut(&ClickEvent)>;

/// What a node is.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetKind {
    /// Ordered children live in the tree's child lists.
    Container,
    /// A leaf showing a string.
    Text(String),
}

impl WidgetKind {
    /// Whether this node can hold children.
    pub fn is_container(&self) -> bool {
        matches!(self, WidgetKind::Container)
    }

    /// The text of a text leaf.
    pub fn text(&self) -> Option<&str> {
        match self {
            WidgetKind::Text(s) => Some(s),
            WidgetKind::Container => None,
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetKind::Container => f.write_str("Container"),
            WidgetKind::Text(s) => write!(f, "Text({s:?})"),
        }
    }
}

/// One declared widget: its kind, its style set for this pass, and an optional
/// click callback.
pub struct WidgetNode {
    pub kind: WidgetKind,
    pub styles: Styles,
    pub(crate) on_click: Option<ClickCallback>,
}

impl WidgetNode {
    /// A new node with an empty style set and no callback.
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            styles: Styles::new(),
            on_click: None,
        }
    }

    /// Whether a click callback is attached.
    pub fn has_click(&self) -> bool {
        self.on_click.is_some()
    }
}

impl fmt::Debug for WidgetNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetNode")
            .field("kind", &self.kind)
            .field("styles", &self.styles)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_unstyled() {
        let node = WidgetNode::new(WidgetKind::Container);
        assert!(node.styles.is_empty());
        assert!(!node.has_click());
    }

    #[test]
    fn kind_accessors() {
        assert!(WidgetKind::Container.is_container());
        assert_eq!(WidgetKind::Text("hi".into()).text(), Some("hi"));
        assert_eq!(WidgetKind::Container.text(), None);
    }

    #[test]
    fn kind_display() {
        assert_eq!(WidgetKind::Container.to_string(), "Container");
        assert_eq!(WidgetKind::Text("a b".into()).to_string(), "Text(\"a b\")");
    }

    #[test]
    fn debug_hides_callback_body() {
        let mut node = WidgetNode::new(WidgetKind::Text("x".into()));
        node.on_click = Some(Box::new(|_| {}));
        let dbg = format!("{node:?}");
        assert!(dbg.contains("on_click: true"));
    }
}
