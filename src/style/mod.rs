//! Style model: unset-able values, the style set cascade, and default resolution.

pub mod color;
pub mod properties;
pub mod resolve;
pub mod set;
pub mod value;

pub use color::Color;
pub use properties::{
    Align, FlexDirection, Justify, Overflow, Position, TextAlign, TextBaseline, Wrap,
    BUNDLED_FONTS, FONT_BOLD, FONT_BOLD_ITALIC, FONT_ITALIC, FONT_MONO_BOLD,
    FONT_MONO_BOLD_ITALIC, FONT_MONO_ITALIC, FONT_MONO_REGULAR, FONT_REGULAR,
};
pub use resolve::ResolvedStyle;
pub use set::{combine, conditional, Styles};
pub use value::{Edge, Edges, Length, StyleValue};

/// Errors raised by style construction and composition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    /// A declaration API was called with arguments it cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}
