//! TaffyTree wrapper for layout computation.
//!
//! [`LayoutEngine`] mirrors a freshly built [`WidgetTree`] into a taffy layout
//! tree, runs layout against the viewport, and reports node boxes as [`Rect`]s.
//! The taffy tree is cleared and rebuilt on every sync; nothing carries over
//! between frames.

use slotmap::SecondaryMap;
use taffy::prelude::{AvailableSpace, Dimension, FromLength, TaffyTree};

use crate::geometry::{Point, Rect};
use crate::tree::{NodeId, WidgetTree};

use super::resolve::resolve_styles;
use super::LayoutError;

/// Wraps a [`TaffyTree`] and the mapping from widget [`NodeId`]s to taffy node ids.
pub struct LayoutEngine {
    tree: TaffyTree<()>,
    node_map: SecondaryMap<NodeId, taffy::NodeId>,
    root: Option<(NodeId, taffy::NodeId)>,
}

impl LayoutEngine {
    /// Create a new, empty layout engine.
    pub fn new() -> Self {
        Self {
            tree: TaffyTree::new(),
            node_map: SecondaryMap::new(),
            root: None,
        }
    }

    /// Rebuild the taffy tree from `widgets`.
    ///
    /// Walks the widget tree in pre-order exactly once. Each node's style set is
    /// resolved against the default table and pushed into a new taffy leaf, and
    /// each child is inserted at its declaration index.
    pub fn sync(&mut self, widgets: &WidgetTree) -> Result<(), LayoutError> {
        self.tree.clear();
        self.node_map.clear();
        self.root = None;

        for id in widgets.walk_depth_first() {
            let Some(node) = widgets.get(id) else {
                continue;
            };
            let style = resolve_styles(&node.styles.resolve(), &node.kind);
            let taffy_id = self.tree.new_leaf(style)?;
            self.node_map.insert(id, taffy_id);
        }

        for id in widgets.walk_depth_first() {
            let Some(&parent) = self.node_map.get(id) else {
                continue;
            };
            for (index, child) in widgets.children(id).iter().enumerate() {
                if let Some(&child_id) = self.node_map.get(*child) {
                    self.tree.insert_child_at_index(parent, index, child_id)?;
                }
            }
        }

        let root = widgets.root();
        self.root = self.node_map.get(root).map(|&t| (root, t));
        Ok(())
    }

    /// Run layout. The root container is sized to the viewport.
    pub fn compute(&mut self, width: f32, height: f32) -> Result<(), LayoutError> {
        let Some((_, root)) = self.root else {
            return Ok(());
        };

        let mut root_style = self.tree.style(root)?.clone();
        root_style.size = taffy::geometry::Size {
            width: Dimension::from_length(width),
            height: Dimension::from_length(height),
        };
        self.tree.set_style(root, root_style)?;

        self.tree.compute_layout(
            root,
            taffy::geometry::Size {
                width: AvailableSpace::Definite(width),
                height: AvailableSpace::Definite(height),
            },
        )?;
        Ok(())
    }

    /// Box of `node` relative to its parent's origin.
    pub fn layout(&self, node: NodeId) -> Option<Rect> {
        let taffy_id = self.node_map.get(node)?;
        let layout = self.tree.layout(*taffy_id).ok()?;
        Some(Rect::new(
            layout.location.x,
            layout.location.y,
            layout.size.width,
            layout.size.height,
        ))
    }

    /// Absolute boxes of every node of `widgets`, in pre-order.
    pub fn absolute_boxes(&self, widgets: &WidgetTree) -> Vec<(NodeId, Rect)> {
        let mut out = Vec::with_capacity(widgets.len());
        let mut stack = vec![(widgets.root(), Point::ZERO)];
        while let Some((id, parent_origin)) = stack.pop() {
            let Some(rect) = self.layout(id) else {
                continue;
            };
            let abs = rect.translate(parent_origin);
            out.push((id, abs));
            for &child in widgets.children(id).iter().rev() {
                stack.push((child, abs.origin()));
            }
        }
        out
    }

    /// Whether the taffy tree has exactly the shape of `widgets`: same node
    /// count and, per container, the same children in the same order.
    pub fn mirrors(&self, widgets: &WidgetTree) -> bool {
        if self.tree.total_node_count() != widgets.len() {
            return false;
        }
        widgets.walk_depth_first().into_iter().all(|id| {
            let Some(&taffy_id) = self.node_map.get(id) else {
                return false;
            };
            let Ok(taffy_children) = self.tree.children(taffy_id) else {
                return false;
            };
            let expected: Vec<_> = widgets
                .children(id)
                .iter()
                .filter_map(|&c| self.node_map.get(c).copied())
                .collect();
            expected.len() == widgets.children(id).len() && expected == taffy_children
        })
    }

    /// Number of nodes in the taffy tree.
    pub fn len(&self) -> usize {
        self.tree.total_node_count()
    }

    /// Whether the taffy tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Edge, FlexDirection, Styles};
    use crate::tree::TreeBuilder;
    use pretty_assertions::assert_eq;

    fn build(declare: impl FnOnce(&mut TreeBuilder)) -> WidgetTree {
        let mut b = TreeBuilder::new();
        b.begin();
        declare(&mut b);
        b.finish()
    }

    fn laid_out(tree: &WidgetTree, w: f32, h: f32) -> LayoutEngine {
        let mut engine = LayoutEngine::new();
        engine.sync(tree).unwrap();
        engine.compute(w, h).unwrap();
        engine
    }

    #[test]
    fn new_engine_is_empty() {
        let engine = LayoutEngine::new();
        assert!(engine.is_empty());
        assert!(engine.root.is_none());
    }

    #[test]
    fn compute_without_sync_is_noop() {
        let mut engine = LayoutEngine::default();
        assert!(engine.compute(10.0, 10.0).is_ok());
    }

    // ── Mirroring ────────────────────────────────────────────────────

    #[test]
    fn sync_mirrors_shape() {
        let tree = build(|b| {
            b.container(|b| {
                b.text("a");
                b.container(|b| {
                    b.text("b");
                });
            });
            b.text("c");
        });
        let engine = laid_out(&tree, 100.0, 100.0);
        assert_eq!(engine.len(), tree.len());
        assert!(engine.mirrors(&tree));
    }

    #[test]
    fn resync_replaces_previous_frame() {
        let big = build(|b| {
            for i in 0..10 {
                b.text(format!("{i}"));
            }
        });
        let small = build(|b| {
            b.text("only");
        });
        let mut engine = LayoutEngine::new();
        engine.sync(&big).unwrap();
        engine.sync(&small).unwrap();
        assert_eq!(engine.len(), 2);
        assert!(engine.mirrors(&small));
        assert!(!engine.mirrors(&big));
    }

    // ── Geometry ─────────────────────────────────────────────────────

    #[test]
    fn root_fills_viewport() {
        let tree = build(|_| {});
        let engine = laid_out(&tree, 640.0, 480.0);
        assert_eq!(engine.layout(tree.root()), Some(Rect::new(0.0, 0.0, 640.0, 480.0)));
    }

    #[test]
    fn root_follows_viewport_between_computes() {
        let tree = build(|_| {});
        let mut engine = laid_out(&tree, 640.0, 480.0);
        engine.compute(320.0, 200.0).unwrap();
        assert_eq!(engine.layout(tree.root()), Some(Rect::new(0.0, 0.0, 320.0, 200.0)));
    }

    #[test]
    fn column_stacks_in_declaration_order() {
        let mut a = None;
        let mut b_id = None;
        let tree = build(|b| {
            b.container(|b| {
                a = Some(b.text("A").id());
                b_id = Some(b.text("B").id());
            })
            .with_styles(Styles::new().width(100.0));
        });
        let engine = laid_out(&tree, 100.0, 100.0);
        let ra = engine.layout(a.unwrap()).unwrap();
        let rb = engine.layout(b_id.unwrap()).unwrap();
        assert!(ra.y <= rb.y);
        assert_eq!(ra.height, 18.0);
        assert_eq!(rb.y, 18.0);
    }

    #[test]
    fn row_places_side_by_side() {
        let mut ids = Vec::new();
        let tree = build(|b| {
            b.container(|b| {
                ids.push(b.container(|_| {}).with_styles(Styles::new().width(30.0)).id());
                ids.push(b.container(|_| {}).with_styles(Styles::new().width(20.0)).id());
            })
            .with_styles(Styles::new().flex_direction(FlexDirection::Row));
        });
        let engine = laid_out(&tree, 100.0, 50.0);
        assert_eq!(engine.layout(ids[0]).map(|r| r.x), Some(0.0));
        assert_eq!(engine.layout(ids[1]).map(|r| r.x), Some(30.0));
    }

    #[test]
    fn absolute_boxes_accumulate_offsets() {
        let mut inner = None;
        let tree = build(|b| {
            b.container(|b| {
                inner = Some(b.text("x").id());
            })
            .with_styles(Styles::new().margin(Edge::Top, 10.0).padding(Edge::Left, 5.0));
        });
        let engine = laid_out(&tree, 100.0, 100.0);
        let boxes = engine.absolute_boxes(&tree);
        assert_eq!(boxes.len(), 3);
        assert_eq!(boxes[0].0, tree.root());
        let (id, rect) = boxes[2];
        assert_eq!(Some(id), inner);
        assert_eq!(rect.origin(), Point::new(5.0, 10.0));
    }

    #[test]
    fn percent_width_resolves_against_parent() {
        let mut id = None;
        let tree = build(|b| {
            id = Some(b.container(|_| {}).with_styles(Styles::new().width_pct(50.0)).id());
        });
        let engine = laid_out(&tree, 200.0, 100.0);
        assert_eq!(engine.layout(id.unwrap()).map(|r| r.width), Some(100.0));
    }
}
