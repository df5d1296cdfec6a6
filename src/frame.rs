//! A laid-out frame: the tree of one rebuild pass plus the boxes the layout
//! engine computed for it.
//!
//! The frame outlives the pass that built it so that clicks arriving before the
//! next rebuild are routed against what is currently on screen.

use crate::event::{isolate, ClickEvent, Invocation};
use crate::geometry::Rect;
use crate::layout::{LayoutEngine, LayoutError, SpatialMap};
use crate::tree::{NodeId, WidgetTree};

/// One rebuilt, laid-out widget tree.
pub struct Frame {
    tree: WidgetTree,
    spatial: SpatialMap,
    width: f32,
    height: f32,
}

impl Frame {
    /// Lay out `tree` in a `width` x `height` viewport.
    pub fn layout(
        tree: WidgetTree,
        engine: &mut LayoutEngine,
        width: f32,
        height: f32,
    ) -> Result<Self, LayoutError> {
        engine.sync(&tree)?;
        engine.compute(width, height)?;
        debug_assert!(engine.mirrors(&tree), "layout tree diverged from widget tree");
        let spatial = SpatialMap::from_ordered(engine.absolute_boxes(&tree));
        Ok(Self { tree, spatial, width, height })
    }

    /// The widget tree.
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    /// Viewport size the frame was laid out for.
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Absolute box of a node.
    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.spatial.rect(id)
    }

    /// Every node with its absolute box, in pre-order.
    pub fn boxes(&self) -> &[(NodeId, Rect)] {
        self.spatial.entries()
    }

    /// First text leaf (pre-order) showing exactly `text`.
    pub fn find_text(&self, text: &str) -> Option<NodeId> {
        self.boxes()
            .iter()
            .map(|(id, _)| *id)
            .find(|id| self.tree.get(*id).and_then(|n| n.kind.text()) == Some(text))
    }

    /// The deepest node at (x, y) that has a click callback.
    pub fn click_target(&self, x: f32, y: f32) -> Option<NodeId> {
        self.spatial
            .hit_test(x, y)
            .into_iter()
            .find(|id| self.tree.get(*id).is_some_and(|n| n.has_click()))
    }

    /// Invoke the click callback of the node under the click, if any.
    pub fn route_click(&mut self, event: &ClickEvent) -> Invocation {
        let Some(target) = self.click_target(event.x, event.y) else {
            return Invocation::Unhandled;
        };
        match self.tree.get_mut(target).and_then(|n| n.on_click.as_mut()) {
            Some(callback) => isolate(|| callback(event)),
            None => Invocation::Unhandled,
        }
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("nodes", &self.tree.len())
            .finish()
    }
}
