//! Widget tree: node model, slotmap arena, and the per-pass builder.

pub mod builder;
pub mod node;
#[allow(clippy::module_inception)]
pub mod tree;

pub use builder::{Handle, TreeBuilder};
pub use node::{ClickCallback, NodeId, WidgetKind, WidgetNode};
pub use tree::{NodeOutline, WidgetTree};
