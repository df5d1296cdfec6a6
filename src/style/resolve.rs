//! Resolution of a style set against the engine default table.
//!
//! [`ResolvedStyle`] is what the layout and paint passes consume: every property
//! has a concrete value. Sizes stay optional because "no size" means auto.

use super::color::Color;
use super::properties::{
    Align, FlexDirection, Justify, Overflow, Position, TextAlign, TextBaseline, Wrap,
    FONT_REGULAR,
};
use super::set::Styles;
use super::value::Length;

/// Default font size in pixels for unset `font_size`.
pub const DEFAULT_FONT_SIZE: f32 = 18.0;

/// A style set with every unset property replaced by its default.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub min_width: Option<Length>,
    pub min_height: Option<Length>,
    pub max_width: Option<Length>,
    pub max_height: Option<Length>,

    /// `[top, right, bottom, left]` in pixels.
    pub margin: [f32; 4],
    /// `[top, right, bottom, left]` in pixels.
    pub padding: [f32; 4],

    pub position: Position,
    pub overflow: Overflow,

    pub flex_direction: FlexDirection,
    pub wrap: Wrap,
    pub justify_content: Justify,
    pub align_items: Align,
    pub align_content: Align,
    pub align_self: Align,
    pub flex_grow: f32,
    pub flex_shrink: f32,

    pub font_family: String,
    pub font_size: f32,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,

    pub color: Color,
    pub background: Color,
    pub border_radius: f32,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            min_width: None,
            min_height: None,
            max_width: None,
            max_height: None,
            margin: [0.0; 4],
            padding: [0.0; 4],
            position: Position::Relative,
            overflow: Overflow::Visible,
            flex_direction: FlexDirection::Column,
            wrap: Wrap::NoWrap,
            justify_content: Justify::FlexStart,
            align_items: Align::Stretch,
            align_content: Align::FlexStart,
            align_self: Align::Auto,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            font_family: FONT_REGULAR.to_owned(),
            font_size: DEFAULT_FONT_SIZE,
            text_align: TextAlign::Left,
            text_baseline: TextBaseline::Middle,
            color: Color::WHITE,
            background: Color::TRANSPARENT,
            border_radius: 0.0,
        }
    }
}

impl Styles {
    /// Substitute defaults for every unset property.
    pub fn resolve(&self) -> ResolvedStyle {
        let d = ResolvedStyle::default();
        ResolvedStyle {
            width: self.width.into_option(),
            height: self.height.into_option(),
            min_width: self.min_width.into_option(),
            min_height: self.min_height.into_option(),
            max_width: self.max_width.into_option(),
            max_height: self.max_height.into_option(),
            margin: self.margin.resolve(0.0),
            padding: self.padding.resolve(0.0),
            position: self.position.unwrap_or(d.position),
            overflow: self.overflow.unwrap_or(d.overflow),
            flex_direction: self.flex_direction.unwrap_or(d.flex_direction),
            wrap: self.wrap.unwrap_or(d.wrap),
            justify_content: self.justify_content.unwrap_or(d.justify_content),
            align_items: self.align_items.unwrap_or(d.align_items),
            align_content: self.align_content.unwrap_or(d.align_content),
            align_self: self.align_self.unwrap_or(d.align_self),
            flex_grow: self.flex_grow.unwrap_or(d.flex_grow),
            flex_shrink: self.flex_shrink.unwrap_or(d.flex_shrink),
            font_family: self.font_family.clone().unwrap_or(d.font_family),
            font_size: self.font_size.unwrap_or(d.font_size),
            text_align: self.text_align.unwrap_or(d.text_align),
            text_baseline: self.text_baseline.unwrap_or(d.text_baseline),
            color: self.color.unwrap_or(d.color),
            background: self.background.unwrap_or(d.background),
            border_radius: self.border_radius.unwrap_or(d.border_radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::value::Edge;
    use crate::style::set::combine;
    use pretty_assertions::assert_eq;

    #[test]
    fn unset_resolves_to_default_table() {
        let r = Styles::new().resolve();
        assert_eq!(r.flex_direction, FlexDirection::Column);
        assert_eq!(r.justify_content, Justify::FlexStart);
        assert_eq!(r.align_items, Align::Stretch);
        assert_eq!(r.align_content, Align::FlexStart);
        assert_eq!(r.align_self, Align::Auto);
        assert_eq!(r.flex_grow, 0.0);
        assert_eq!(r.flex_shrink, 1.0);
        assert_eq!(r.overflow, Overflow::Visible);
        assert_eq!(r.position, Position::Relative);
        assert_eq!(r.margin, [0.0; 4]);
        assert_eq!(r.padding, [0.0; 4]);
        assert_eq!(r.font_size, 18.0);
        assert_eq!(r.text_align, TextAlign::Left);
        assert_eq!(r.text_baseline, TextBaseline::Middle);
    }

    #[test]
    fn unset_resolves_exactly_to_default() {
        assert_eq!(Styles::new().resolve(), ResolvedStyle::default());
    }

    #[test]
    fn unset_paint_defaults() {
        let r = Styles::new().resolve();
        assert_eq!(r.color, Color::WHITE);
        assert_eq!(r.background, Color::TRANSPARENT);
        assert_eq!(r.border_radius, 0.0);
        assert_eq!(r.font_family, FONT_REGULAR);
        assert_eq!(r.width, None);
    }

    #[test]
    fn set_values_survive_resolution() {
        let r = Styles::new()
            .flex_direction(FlexDirection::Row)
            .margin(Edge::Top, 3.0)
            .font_size(20.0)
            .width_pct(50.0)
            .resolve();
        assert_eq!(r.flex_direction, FlexDirection::Row);
        assert_eq!(r.margin, [3.0, 0.0, 0.0, 0.0]);
        assert_eq!(r.font_size, 20.0);
        assert_eq!(r.width, Some(Length::Percent(50.0)));
    }

    #[test]
    fn combined_width_resolves_to_percent_only() {
        let merged = combine(&[Styles::new().width(50.0), Styles::new().width_pct(50.0)]).unwrap();
        let r = merged.resolve();
        assert_eq!(r.width, Some(Length::Percent(50.0)));
        assert_eq!(ResolvedStyle { width: None, ..r }, ResolvedStyle::default());
    }
}
