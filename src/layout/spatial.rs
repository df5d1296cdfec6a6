//! Spatial map for hit testing.
//!
//! [`SpatialMap`] holds node boxes in painter's order (pre-order of the widget
//! tree): later entries are drawn on top of, and nested inside, earlier ones.

use crate::geometry::Rect;
use crate::tree::NodeId;

/// Node boxes ordered back-to-front.
#[derive(Debug, Clone, Default)]
pub struct SpatialMap {
    entries: Vec<(NodeId, Rect)>,
}

impl SpatialMap {
    /// Create an empty spatial map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(NodeId, Rect)` pairs; the last entry is frontmost.
    pub fn from_ordered(entries: Vec<(NodeId, Rect)>) -> Self {
        Self { entries }
    }

    /// All nodes whose box contains the point, frontmost first.
    pub fn hit_test(&self, x: f32, y: f32) -> Vec<NodeId> {
        self.entries
            .iter()
            .rev()
            .filter(|(_, rect)| rect.contains(x, y))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Box of a node, if present.
    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.entries.iter().find(|(n, _)| *n == id).map(|(_, r)| *r)
    }

    /// Entries in painter's order.
    pub fn entries(&self) -> &[(NodeId, Rect)] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn make_ids(count: usize) -> Vec<NodeId> {
        let mut arena: SlotMap<NodeId, ()> = SlotMap::with_key();
        (0..count).map(|_| arena.insert(())).collect()
    }

    #[test]
    fn empty_map_hits_nothing() {
        let map = SpatialMap::new();
        assert!(map.is_empty());
        assert!(map.hit_test(1.0, 1.0).is_empty());
    }

    #[test]
    fn nested_boxes_frontmost_first() {
        let ids = make_ids(3);
        let map = SpatialMap::from_ordered(vec![
            (ids[0], Rect::new(0.0, 0.0, 100.0, 100.0)),
            (ids[1], Rect::new(10.0, 10.0, 50.0, 50.0)),
            (ids[2], Rect::new(70.0, 70.0, 10.0, 10.0)),
        ]);
        assert_eq!(map.hit_test(20.0, 20.0), vec![ids[1], ids[0]]);
        assert_eq!(map.hit_test(75.0, 75.0), vec![ids[2], ids[0]]);
        assert_eq!(map.hit_test(95.0, 5.0), vec![ids[0]]);
        assert!(map.hit_test(150.0, 5.0).is_empty());
    }

    #[test]
    fn rect_lookup() {
        let ids = make_ids(2);
        let map = SpatialMap::from_ordered(vec![(ids[0], Rect::new(1.0, 2.0, 3.0, 4.0))]);
        assert_eq!(map.rect(ids[0]), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
        assert_eq!(map.rect(ids[1]), None);
        assert_eq!(map.len(), 1);
    }
}
