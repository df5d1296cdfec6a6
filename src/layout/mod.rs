//! Layout: style resolution into taffy, per-frame layout, hit testing.

pub mod engine;
pub mod resolve;
pub mod spatial;

pub use engine::LayoutEngine;
pub use spatial::SpatialMap;

/// Errors reported by the layout engine.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout engine error: {0}")]
    Taffy(#[from] taffy::TaffyError),
}
