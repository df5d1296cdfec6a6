//! Resolved style -> taffy Style conversion.
//!
//! Maps a [`ResolvedStyle`] onto taffy's layout types ([`taffy::Style`],
//! [`Dimension`], [`LengthPercentageAuto`], etc.). Percentages are stored by the
//! style model in the 0..100 range and handed to taffy as 0..1 fractions.

use taffy::prelude::{
    Dimension, FromLength, FromPercent, LengthPercentage, LengthPercentageAuto, TaffyAuto,
};

use crate::style::{
    Align, FlexDirection, Justify, Length, Overflow, Position, ResolvedStyle, Wrap,
};
use crate::tree::WidgetKind;

/// Convert a [`Length`] to a sizing [`Dimension`]. `None` is auto.
pub fn resolve_dimension(length: Option<Length>) -> Dimension {
    match length {
        Some(Length::Px(v)) => Dimension::from_length(v),
        Some(Length::Percent(v)) => Dimension::from_percent(v / 100.0),
        None => Dimension::AUTO,
    }
}

/// Convert `[top, right, bottom, left]` pixel margins to a taffy rect.
pub fn resolve_margin(edges: [f32; 4]) -> taffy::geometry::Rect<LengthPercentageAuto> {
    let [top, right, bottom, left] = edges;
    taffy::geometry::Rect {
        top: LengthPercentageAuto::from_length(top),
        right: LengthPercentageAuto::from_length(right),
        bottom: LengthPercentageAuto::from_length(bottom),
        left: LengthPercentageAuto::from_length(left),
    }
}

/// Convert `[top, right, bottom, left]` pixel padding to a taffy rect (no auto).
pub fn resolve_padding(edges: [f32; 4]) -> taffy::geometry::Rect<LengthPercentage> {
    let [top, right, bottom, left] = edges;
    taffy::geometry::Rect {
        top: LengthPercentage::from_length(top),
        right: LengthPercentage::from_length(right),
        bottom: LengthPercentage::from_length(bottom),
        left: LengthPercentage::from_length(left),
    }
}

fn resolve_direction(direction: FlexDirection) -> taffy::style::FlexDirection {
    match direction {
        FlexDirection::Column => taffy::style::FlexDirection::Column,
        FlexDirection::ColumnReverse => taffy::style::FlexDirection::ColumnReverse,
        FlexDirection::Row => taffy::style::FlexDirection::Row,
        FlexDirection::RowReverse => taffy::style::FlexDirection::RowReverse,
    }
}

fn resolve_wrap(wrap: Wrap) -> taffy::style::FlexWrap {
    match wrap {
        Wrap::NoWrap => taffy::style::FlexWrap::NoWrap,
        Wrap::Wrap => taffy::style::FlexWrap::Wrap,
        Wrap::WrapReverse => taffy::style::FlexWrap::WrapReverse,
    }
}

fn resolve_justify(justify: Justify) -> taffy::style::JustifyContent {
    match justify {
        Justify::FlexStart => taffy::style::JustifyContent::FlexStart,
        Justify::Center => taffy::style::JustifyContent::Center,
        Justify::FlexEnd => taffy::style::JustifyContent::FlexEnd,
        Justify::SpaceBetween => taffy::style::JustifyContent::SpaceBetween,
        Justify::SpaceAround => taffy::style::JustifyContent::SpaceAround,
    }
}

/// Item alignment. `Auto` and the distribution values have no item meaning and
/// fall back to the engine behavior.
fn resolve_align_items(align: Align) -> Option<taffy::style::AlignItems> {
    match align {
        Align::FlexStart => Some(taffy::style::AlignItems::FlexStart),
        Align::Center => Some(taffy::style::AlignItems::Center),
        Align::FlexEnd => Some(taffy::style::AlignItems::FlexEnd),
        Align::Stretch => Some(taffy::style::AlignItems::Stretch),
        Align::Baseline => Some(taffy::style::AlignItems::Baseline),
        Align::Auto | Align::SpaceBetween | Align::SpaceAround => None,
    }
}

fn resolve_align_content(align: Align) -> Option<taffy::style::AlignContent> {
    match align {
        Align::FlexStart => Some(taffy::style::AlignContent::FlexStart),
        Align::Center => Some(taffy::style::AlignContent::Center),
        Align::FlexEnd => Some(taffy::style::AlignContent::FlexEnd),
        Align::Stretch => Some(taffy::style::AlignContent::Stretch),
        Align::SpaceBetween => Some(taffy::style::AlignContent::SpaceBetween),
        Align::SpaceAround => Some(taffy::style::AlignContent::SpaceAround),
        Align::Auto | Align::Baseline => None,
    }
}

fn resolve_position(position: Position) -> taffy::style::Position {
    match position {
        Position::Relative => taffy::style::Position::Relative,
        Position::Absolute => taffy::style::Position::Absolute,
    }
}

fn resolve_overflow(overflow: Overflow) -> taffy::style::Overflow {
    match overflow {
        Overflow::Visible => taffy::style::Overflow::Visible,
        Overflow::Hidden => taffy::style::Overflow::Hidden,
        Overflow::Scroll => taffy::style::Overflow::Scroll,
    }
}

/// Convert a fully resolved style into a [`taffy::Style`] for a node of `kind`.
///
/// Text leaves get a minimum height equal to their font size unless an explicit
/// `min_height` was set.
pub fn resolve_styles(style: &ResolvedStyle, kind: &WidgetKind) -> taffy::Style {
    let mut out = taffy::Style {
        display: taffy::style::Display::Flex,
        ..taffy::Style::default()
    };

    out.flex_direction = resolve_direction(style.flex_direction);
    out.flex_wrap = resolve_wrap(style.wrap);
    out.justify_content = Some(resolve_justify(style.justify_content));
    out.align_items = resolve_align_items(style.align_items);
    out.align_content = resolve_align_content(style.align_content);
    out.align_self = resolve_align_items(style.align_self);
    out.flex_grow = style.flex_grow;
    out.flex_shrink = style.flex_shrink;

    out.size = taffy::geometry::Size {
        width: resolve_dimension(style.width),
        height: resolve_dimension(style.height),
    };

    let text_min_height = match kind {
        WidgetKind::Text(_) => Some(Length::Px(style.font_size)),
        WidgetKind::Container => None,
    };
    out.min_size = taffy::geometry::Size {
        width: resolve_dimension(style.min_width),
        height: resolve_dimension(style.min_height.or(text_min_height)),
    };
    out.max_size = taffy::geometry::Size {
        width: resolve_dimension(style.max_width),
        height: resolve_dimension(style.max_height),
    };

    out.margin = resolve_margin(style.margin);
    out.padding = resolve_padding(style.padding);

    out.position = resolve_position(style.position);
    let overflow = resolve_overflow(style.overflow);
    out.overflow = taffy::geometry::Point { x: overflow, y: overflow };

    out
}
