//! Style values: the explicit unset state, lengths, and four-sided edges.

use std::fmt;

// ---------------------------------------------------------------------------
// StyleValue
// ---------------------------------------------------------------------------

/// A single style property that is either unset or carries a concrete value.
///
/// Unset means "not specified here": a later layer in a cascade may set it, and
/// if nobody does the resolver substitutes the engine default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleValue<T> {
    #[default]
    Unset,
    Set(T),
}

impl<T> StyleValue<T> {
    /// Whether a concrete value is present.
    pub fn is_set(&self) -> bool {
        matches!(self, StyleValue::Set(_))
    }

    /// Whether the value is unset.
    pub fn is_unset(&self) -> bool {
        matches!(self, StyleValue::Unset)
    }

    /// Borrow the concrete value, if any.
    pub fn get(&self) -> Option<&T> {
        match self {
            StyleValue::Set(v) => Some(v),
            StyleValue::Unset => None,
        }
    }

    /// Lay `top` over `self`: `top` if it is set, otherwise `self`.
    pub fn overlay(self, top: StyleValue<T>) -> StyleValue<T> {
        match top {
            StyleValue::Set(_) => top,
            StyleValue::Unset => self,
        }
    }

    /// Convert into an `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            StyleValue::Set(v) => Some(v),
            StyleValue::Unset => None,
        }
    }

    /// The concrete value, or `default` when unset.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            StyleValue::Set(v) => v,
            StyleValue::Unset => default,
        }
    }
}

impl<T> From<Option<T>> for StyleValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => StyleValue::Set(v),
            None => StyleValue::Unset,
        }
    }
}

impl<T: fmt::Display> fmt::Display for StyleValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Set(v) => v.fmt(f),
            StyleValue::Unset => f.write_str("unset"),
        }
    }
}

// ---------------------------------------------------------------------------
// Length
// ---------------------------------------------------------------------------

/// A sizing length: absolute pixels or a percentage of the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    /// Percentage in the 0..100 range.
    Percent(f32),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{v}px"),
            Length::Percent(v) => write!(f, "{v}%"),
        }
    }
}

// ---------------------------------------------------------------------------
// Edge / Edges
// ---------------------------------------------------------------------------

/// Which sides a margin or padding setter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    All,
    /// Top and bottom.
    Vertical,
    /// Left and right.
    Horizontal,
    Top,
    Right,
    Bottom,
    Left,
}

/// Four independently unset-able edge values in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub top: StyleValue<f32>,
    pub right: StyleValue<f32>,
    pub bottom: StyleValue<f32>,
    pub left: StyleValue<f32>,
}

impl Edges {
    /// All four edges unset.
    pub const UNSET: Edges = Edges {
        top: StyleValue::Unset,
        right: StyleValue::Unset,
        bottom: StyleValue::Unset,
        left: StyleValue::Unset,
    };

    /// Return a copy with `px` written to the sides selected by `edge`.
    pub fn apply(mut self, edge: Edge, px: f32) -> Edges {
        let v = StyleValue::Set(px);
        match edge {
            Edge::All => {
                self.top = v;
                self.right = v;
                self.bottom = v;
                self.left = v;
            }
            Edge::Vertical => {
                self.top = v;
                self.bottom = v;
            }
            Edge::Horizontal => {
                self.right = v;
                self.left = v;
            }
            Edge::Top => self.top = v,
            Edge::Right => self.right = v,
            Edge::Bottom => self.bottom = v,
            Edge::Left => self.left = v,
        }
        self
    }

    /// Per-edge [`StyleValue::overlay`].
    pub fn overlay(self, top: Edges) -> Edges {
        Edges {
            top: self.top.overlay(top.top),
            right: self.right.overlay(top.right),
            bottom: self.bottom.overlay(top.bottom),
            left: self.left.overlay(top.left),
        }
    }

    /// Resolve to `[top, right, bottom, left]`, substituting `default` for unset edges.
    pub fn resolve(self, default: f32) -> [f32; 4] {
        [
            self.top.unwrap_or(default),
            self.right.unwrap_or(default),
            self.bottom.unwrap_or(default),
            self.left.unwrap_or(default),
        ]
    }

    /// Whether every edge is unset.
    pub fn is_unset(&self) -> bool {
        self.top.is_unset() && self.right.is_unset() && self.bottom.is_unset() && self.left.is_unset()
    }
}
