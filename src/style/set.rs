//! The style set: every property of one widget, each independently unset-able.
//!
//! A fresh [`Styles`] has all properties unset. Setters take the set by value and
//! return the updated set, so a shared base set can only be extended through an
//! explicit `clone()`; declarations never mutate a set they do not own.
//!
//! [`combine`] is the cascade: for every property, the last set in the list that
//! set it wins. Defaults are never filled in here; that happens in the resolver.

use super::color::Color;
use super::properties::{
    Align, FlexDirection, Justify, Overflow, Position, TextAlign, TextBaseline, Wrap,
};
use super::value::{Edge, Edges, Length, StyleValue};
use super::StyleError;

/// All style properties for a node. Each field is a [`StyleValue`]; `Unset` means
/// "not specified by this set".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Styles {
    // Sizing
    pub width: StyleValue<Length>,
    pub height: StyleValue<Length>,
    pub min_width: StyleValue<Length>,
    pub min_height: StyleValue<Length>,
    pub max_width: StyleValue<Length>,
    pub max_height: StyleValue<Length>,

    // Spacing
    pub padding: Edges,
    pub margin: Edges,

    // Positioning
    pub position: StyleValue<Position>,
    pub overflow: StyleValue<Overflow>,

    // Flex
    pub flex_direction: StyleValue<FlexDirection>,
    pub wrap: StyleValue<Wrap>,
    pub justify_content: StyleValue<Justify>,
    pub align_items: StyleValue<Align>,
    pub align_content: StyleValue<Align>,
    pub align_self: StyleValue<Align>,
    pub flex_grow: StyleValue<f32>,
    pub flex_shrink: StyleValue<f32>,

    // Text
    pub font_family: StyleValue<String>,
    pub font_size: StyleValue<f32>,
    pub text_align: StyleValue<TextAlign>,
    pub text_baseline: StyleValue<TextBaseline>,

    // Paint
    pub color: StyleValue<Color>,
    pub background: StyleValue<Color>,
    pub border_radius: StyleValue<f32>,
}

impl Styles {
    /// Create a new `Styles` with every property unset.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Sizing ───────────────────────────────────────────────────────

    pub fn width(mut self, px: f32) -> Self {
        self.width = StyleValue::Set(Length::Px(px));
        self
    }

    pub fn width_pct(mut self, pct: f32) -> Self {
        self.width = StyleValue::Set(Length::Percent(pct));
        self
    }

    pub fn height(mut self, px: f32) -> Self {
        self.height = StyleValue::Set(Length::Px(px));
        self
    }

    pub fn height_pct(mut self, pct: f32) -> Self {
        self.height = StyleValue::Set(Length::Percent(pct));
        self
    }

    pub fn min_width(mut self, px: f32) -> Self {
        self.min_width = StyleValue::Set(Length::Px(px));
        self
    }

    pub fn min_width_pct(mut self, pct: f32) -> Self {
        self.min_width = StyleValue::Set(Length::Percent(pct));
        self
    }

    pub fn min_height(mut self, px: f32) -> Self {
        self.min_height = StyleValue::Set(Length::Px(px));
        self
    }

    pub fn min_height_pct(mut self, pct: f32) -> Self {
        self.min_height = StyleValue::Set(Length::Percent(pct));
        self
    }

    pub fn max_width(mut self, px: f32) -> Self {
        self.max_width = StyleValue::Set(Length::Px(px));
        self
    }

    pub fn max_width_pct(mut self, pct: f32) -> Self {
        self.max_width = StyleValue::Set(Length::Percent(pct));
        self
    }

    pub fn max_height(mut self, px: f32) -> Self {
        self.max_height = StyleValue::Set(Length::Px(px));
        self
    }

    pub fn max_height_pct(mut self, pct: f32) -> Self {
        self.max_height = StyleValue::Set(Length::Percent(pct));
        self
    }

    // ── Spacing ──────────────────────────────────────────────────────

    /// Set the margin on the sides selected by `edge`. Other sides keep their value.
    pub fn margin(mut self, edge: Edge, px: f32) -> Self {
        self.margin = self.margin.apply(edge, px);
        self
    }

    /// Set the padding on the sides selected by `edge`. Other sides keep their value.
    pub fn padding(mut self, edge: Edge, px: f32) -> Self {
        self.padding = self.padding.apply(edge, px);
        self
    }

    // ── Positioning ──────────────────────────────────────────────────

    pub fn position(mut self, position: Position) -> Self {
        self.position = StyleValue::Set(position);
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = StyleValue::Set(overflow);
        self
    }

    // ── Flex ─────────────────────────────────────────────────────────

    pub fn flex_direction(mut self, direction: FlexDirection) -> Self {
        self.flex_direction = StyleValue::Set(direction);
        self
    }

    pub fn wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = StyleValue::Set(wrap);
        self
    }

    pub fn justify_content(mut self, justify: Justify) -> Self {
        self.justify_content = StyleValue::Set(justify);
        self
    }

    pub fn align_items(mut self, align: Align) -> Self {
        self.align_items = StyleValue::Set(align);
        self
    }

    pub fn align_content(mut self, align: Align) -> Self {
        self.align_content = StyleValue::Set(align);
        self
    }

    pub fn align_self(mut self, align: Align) -> Self {
        self.align_self = StyleValue::Set(align);
        self
    }

    pub fn flex_grow(mut self, grow: f32) -> Self {
        self.flex_grow = StyleValue::Set(grow);
        self
    }

    pub fn flex_shrink(mut self, shrink: f32) -> Self {
        self.flex_shrink = StyleValue::Set(shrink);
        self
    }

    // ── Text ─────────────────────────────────────────────────────────

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = StyleValue::Set(family.into());
        self
    }

    pub fn font_size(mut self, px: f32) -> Self {
        self.font_size = StyleValue::Set(px);
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = StyleValue::Set(align);
        self
    }

    pub fn text_baseline(mut self, baseline: TextBaseline) -> Self {
        self.text_baseline = StyleValue::Set(baseline);
        self
    }

    // ── Paint ────────────────────────────────────────────────────────

    pub fn color(mut self, color: Color) -> Self {
        self.color = StyleValue::Set(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = StyleValue::Set(color);
        self
    }

    pub fn border_radius(mut self, px: f32) -> Self {
        self.border_radius = StyleValue::Set(px);
        self
    }

    // ── Cascade ──────────────────────────────────────────────────────

    /// Layer `other` on top of `self`. For each property, if `other` has a value,
    /// use it; otherwise keep `self`'s value.
    pub fn merge(&self, other: &Styles) -> Styles {
        fn pick<T: Clone>(base: &StyleValue<T>, other: &StyleValue<T>) -> StyleValue<T> {
            base.clone().overlay(other.clone())
        }

        Styles {
            width: pick(&self.width, &other.width),
            height: pick(&self.height, &other.height),
            min_width: pick(&self.min_width, &other.min_width),
            min_height: pick(&self.min_height, &other.min_height),
            max_width: pick(&self.max_width, &other.max_width),
            max_height: pick(&self.max_height, &other.max_height),

            padding: self.padding.overlay(other.padding),
            margin: self.margin.overlay(other.margin),

            position: pick(&self.position, &other.position),
            overflow: pick(&self.overflow, &other.overflow),

            flex_direction: pick(&self.flex_direction, &other.flex_direction),
            wrap: pick(&self.wrap, &other.wrap),
            justify_content: pick(&self.justify_content, &other.justify_content),
            align_items: pick(&self.align_items, &other.align_items),
            align_content: pick(&self.align_content, &other.align_content),
            align_self: pick(&self.align_self, &other.align_self),
            flex_grow: pick(&self.flex_grow, &other.flex_grow),
            flex_shrink: pick(&self.flex_shrink, &other.flex_shrink),

            font_family: pick(&self.font_family, &other.font_family),
            font_size: pick(&self.font_size, &other.font_size),
            text_align: pick(&self.text_align, &other.text_align),
            text_baseline: pick(&self.text_baseline, &other.text_baseline),

            color: pick(&self.color, &other.color),
            background: pick(&self.background, &other.background),
            border_radius: pick(&self.border_radius, &other.border_radius),
        }
    }

    /// Returns `true` if no property is set.
    pub fn is_empty(&self) -> bool {
        *self == Styles::default()
    }
}

/// Combine style sets left to right: per property, the last set that defines it wins.
///
/// Fails with [`StyleError::InvalidArgument`] when `layers` is empty.
pub fn combine(layers: &[Styles]) -> Result<Styles, StyleError> {
    let (first, rest) = layers
        .split_first()
        .ok_or(StyleError::InvalidArgument("combine needs at least one style set"))?;
    Ok(rest.iter().fold(first.clone(), |acc, layer| acc.merge(layer)))
}

/// Build a selector between two complete style sets, evaluated at declaration time.
///
/// ```ignore
/// let selected = conditional(Styles::new().background(GREEN), Styles::new());
/// ui.container(|_| {}).with_styles(selected(i == index));
/// ```
pub fn conditional(when_true: Styles, when_false: Styles) -> impl Fn(bool) -> Styles {
    move |cond| {
        if cond {
            when_true.clone()
        } else {
            when_false.clone()
        }
    }
}
