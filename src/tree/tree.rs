//! The per-frame widget tree, backed by a slotmap arena.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeId, WidgetKind, WidgetNode};
use crate::style::Styles;

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// A widget tree built by one rebuild pass.
///
/// The root is always a container. Parents own their children through ordered
/// child lists; there are no parent back-links.
pub struct WidgetTree {
    nodes: SlotMap<NodeId, WidgetNode>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    root: NodeId,
}

/// A flattened, comparable description of one node, in pre-order.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeOutline {
    pub depth: usize,
    pub kind: WidgetKind,
    pub styles: Styles,
    pub has_click: bool,
}

impl WidgetTree {
    /// A tree holding only an empty root container.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(WidgetNode::new(WidgetKind::Container));
        let mut children = SecondaryMap::new();
        children.insert(root, Vec::new());
        Self { nodes, children, root }
    }

    /// The root container.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Append a new node as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a container of this tree.
    pub fn append(&mut self, parent: NodeId, node: WidgetNode) -> NodeId {
        let is_container = self
            .nodes
            .get(parent)
            .is_some_and(|p| p.kind.is_container());
        assert!(is_container, "parent must be a container in this tree");

        let id = self.nodes.insert(node);
        if self.nodes[id].kind.is_container() {
            self.children.insert(id, Vec::new());
        }
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        id
    }

    /// Children of a node in declaration order. Empty for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Immutable access to a node.
    pub fn get(&self, id: NodeId) -> Option<&WidgetNode> {
        self.nodes.get(id)
    }

    /// Mutable access to a node.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut WidgetNode> {
        self.nodes.get_mut(id)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether only the root exists and it has no children.
    pub fn is_empty(&self) -> bool {
        self.children(self.root).is_empty()
    }

    /// Pre-order depth-first traversal from the root.
    pub fn walk_depth_first(&self) -> Vec<NodeId> {
        let mut result = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Pre-order outline of the whole tree, for structural comparison.
    pub fn outline(&self) -> Vec<NodeOutline> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            out.push(NodeOutline {
                depth,
                kind: node.kind.clone(),
                styles: node.styles.clone(),
                has_click: node.has_click(),
            });
            for &child in self.children(id).iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        out
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WidgetTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetTree")
            .field("len", &self.len())
            .field("outline", &self.outline())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> WidgetNode {
        WidgetNode::new(WidgetKind::Text(s.into()))
    }

    /// Build a small test tree:
    /// ```text
    ///       root
    ///      /    \
    ///    box     c
    ///   /  \
    ///  a    b
    /// ```
    fn build_tree() -> (WidgetTree, NodeId, NodeId, NodeId, NodeId) {
        let mut tree = WidgetTree::new();
        let root = tree.root();
        let boxed = tree.append(root, WidgetNode::new(WidgetKind::Container));
        let a = tree.append(boxed, text("a"));
        let b = tree.append(boxed, text("b"));
        let c = tree.append(root, text("c"));
        (tree, boxed, a, b, c)
    }

    #[test]
    fn new_tree_has_root_only() {
        let tree = WidgetTree::new();
        assert_eq!(tree.len(), 1);
        assert!(tree.is_empty());
        assert!(tree.get(tree.root()).is_some_and(|n| n.kind.is_container()));
    }

    #[test]
    fn append_keeps_declaration_order() {
        let (tree, boxed, a, b, c) = build_tree();
        assert_eq!(tree.children(tree.root()), &[boxed, c]);
        assert_eq!(tree.children(boxed), &[a, b]);
        assert!(tree.children(a).is_empty());
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn walk_is_pre_order() {
        let (tree, boxed, a, b, c) = build_tree();
        assert_eq!(tree.walk_depth_first(), vec![tree.root(), boxed, a, b, c]);
    }

    #[test]
    fn outline_depths() {
        let (tree, ..) = build_tree();
        let depths: Vec<usize> = tree.outline().iter().map(|o| o.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 2, 1]);
    }

    #[test]
    #[should_panic(expected = "parent must be a container")]
    fn append_to_text_panics() {
        let (mut tree, _, a, _, _) = build_tree();
        tree.append(a, text("nope"));
    }
}
