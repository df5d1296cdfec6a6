//! Enumerated style properties and font family names.

use std::fmt;

/// Positioning scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Relative,
    Absolute,
}

/// Overflow behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overflow {
    Visible,
    Hidden,
    Scroll,
}

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlexDirection {
    Column,
    ColumnReverse,
    Row,
    RowReverse,
}

/// Flex line wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wrap {
    NoWrap,
    Wrap,
    WrapReverse,
}

/// Main-axis distribution of flex items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Justify {
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
}

/// Cross-axis alignment, shared by align-items, align-content and align-self.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Align {
    Auto,
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
    Baseline,
    SpaceBetween,
    SpaceAround,
}

/// Horizontal anchoring of text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchoring of text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

// ---------------------------------------------------------------------------
// Fonts
// ---------------------------------------------------------------------------

pub const FONT_REGULAR: &str = "Roboto-Regular";
pub const FONT_ITALIC: &str = "Roboto-Italic";
pub const FONT_BOLD: &str = "Roboto-Bold";
pub const FONT_BOLD_ITALIC: &str = "Roboto-BoldItalic";

pub const FONT_MONO_REGULAR: &str = "RobotoMono-Regular";
pub const FONT_MONO_ITALIC: &str = "RobotoMono-Italic";
pub const FONT_MONO_BOLD: &str = "RobotoMono-Bold";
pub const FONT_MONO_BOLD_ITALIC: &str = "RobotoMono-BoldItalic";

/// Every bundled font family, in registration order.
pub const BUNDLED_FONTS: [&str; 8] = [
    FONT_REGULAR,
    FONT_ITALIC,
    FONT_BOLD,
    FONT_BOLD_ITALIC,
    FONT_MONO_REGULAR,
    FONT_MONO_ITALIC,
    FONT_MONO_BOLD,
    FONT_MONO_BOLD_ITALIC,
];

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Position::Relative => "relative",
            Position::Absolute => "absolute",
        })
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Overflow::Visible => "visible",
            Overflow::Hidden => "hidden",
            Overflow::Scroll => "scroll",
        })
    }
}

impl fmt::Display for FlexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FlexDirection::Column => "column",
            FlexDirection::ColumnReverse => "column-reverse",
            FlexDirection::Row => "row",
            FlexDirection::RowReverse => "row-reverse",
        })
    }
}

impl fmt::Display for Wrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Wrap::NoWrap => "no-wrap",
            Wrap::Wrap => "wrap",
            Wrap::WrapReverse => "wrap-reverse",
        })
    }
}

impl fmt::Display for Justify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Justify::FlexStart => "flex-start",
            Justify::Center => "center",
            Justify::FlexEnd => "flex-end",
            Justify::SpaceBetween => "space-between",
            Justify::SpaceAround => "space-around",
        })
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Align::Auto => "auto",
            Align::FlexStart => "flex-start",
            Align::Center => "center",
            Align::FlexEnd => "flex-end",
            Align::Stretch => "stretch",
            Align::Baseline => "baseline",
            Align::SpaceBetween => "space-between",
            Align::SpaceAround => "space-around",
        })
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        })
    }
}

impl fmt::Display for TextBaseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
            TextBaseline::Bottom => "bottom",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_kebab_case() {
        assert_eq!(Justify::SpaceBetween.to_string(), "space-between");
        assert_eq!(Align::FlexStart.to_string(), "flex-start");
        assert_eq!(Wrap::NoWrap.to_string(), "no-wrap");
        assert_eq!(FlexDirection::ColumnReverse.to_string(), "column-reverse");
    }

    #[test]
    fn display_simple_names() {
        assert_eq!(Position::Absolute.to_string(), "absolute");
        assert_eq!(Overflow::Hidden.to_string(), "hidden");
        assert_eq!(TextAlign::Center.to_string(), "center");
        assert_eq!(TextBaseline::Middle.to_string(), "middle");
    }

    #[test]
    fn bundled_fonts_are_distinct() {
        let mut names = BUNDLED_FONTS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUNDLED_FONTS.len());
    }
}
