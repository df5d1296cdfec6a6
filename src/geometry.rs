//! Core geometry types: Rect (layout pixels), Region (terminal cells), and the
//! cell metrics mapping between them.
//!
//! Layout results come back from the solver as floating-point pixel boxes ([`Rect`]).
//! The terminal renderer rasterizes them onto an integer cell grid ([`Region`]).

use std::ops::Add;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A position in layout pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A box in layout pixels: left/top plus width/height, as reported by the layout engine.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rect.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// The right edge (exclusive): `x + width`.
    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive): `y + height`.
    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// The top-left corner.
    #[inline]
    pub const fn origin(self) -> Point {
        Point { x: self.x, y: self.y }
    }

    /// Whether the point (x, y) lies inside this rect. Edges are half-open.
    #[inline]
    pub fn contains(self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Move the rect by `offset`.
    #[inline]
    pub fn translate(self, offset: Point) -> Rect {
        Rect { x: self.x + offset.x, y: self.y + offset.y, ..self }
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A rectangular region in terminal cells defined by position and size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// An empty region at the origin.
    pub const EMPTY: Region = Region { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new region.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The right edge (exclusive): `x + width`.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive): `y + height`.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// Whether the region covers no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the point (x, y) lies inside this region.
    #[inline]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Compute the intersection of two regions.
    ///
    /// Returns [`Region::EMPTY`] if the regions do not overlap.
    #[inline]
    pub const fn intersection(self, other: Region) -> Region {
        let x1 = if self.x > other.x { self.x } else { other.x };
        let y1 = if self.y > other.y { self.y } else { other.y };

        let sr = self.right();
        let or = other.right();
        let x2 = if sr < or { sr } else { or };

        let sb = self.bottom();
        let ob = other.bottom();
        let y2 = if sb < ob { sb } else { ob };

        let w = x2 - x1;
        let h = y2 - y1;

        if w <= 0 || h <= 0 {
            Region::EMPTY
        } else {
            Region { x: x1, y: y1, width: w, height: h }
        }
    }
}

// ---------------------------------------------------------------------------
// CellMetrics
// ---------------------------------------------------------------------------

/// Size of one terminal cell in layout pixels. Maps between the pixel space of
/// layout and the integer cell grid of the terminal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellMetrics {
    pub width: f32,
    pub height: f32,
}

impl CellMetrics {
    /// Create new cell metrics.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Pixel position of the centre of cell (col, row).
    #[inline]
    pub fn cell_center(self, col: u16, row: u16) -> Point {
        Point {
            x: (f32::from(col) + 0.5) * self.width,
            y: (f32::from(row) + 0.5) * self.height,
        }
    }

    /// Pixel extent of a grid of `cols` x `rows` cells.
    #[inline]
    pub fn grid_to_pixels(self, cols: u16, rows: u16) -> (u32, u32) {
        (
            (f32::from(cols) * self.width).round() as u32,
            (f32::from(rows) * self.height).round() as u32,
        )
    }

    /// Cells covered by a pixel rect. Edges snap to the nearest cell boundary.
    pub fn rect_to_region(self, rect: Rect) -> Region {
        let x1 = (rect.x / self.width).round() as i32;
        let y1 = (rect.y / self.height).round() as i32;
        let x2 = (rect.right() / self.width).round() as i32;
        let y2 = (rect.bottom() / self.height).round() as i32;
        Region::new(x1, y1, (x2 - x1).max(0), (y2 - y1).max(0))
    }
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self::new(9.0, 18.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Rect ─────────────────────────────────────────────────────────

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.origin(), Point::new(10.0, 20.0));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(9.9, 9.9));
        assert!(!r.contains(10.0, 5.0));
        assert!(!r.contains(5.0, 10.0));
        assert!(!r.contains(-0.1, 5.0));
    }

    #[test]
    fn rect_translate() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0).translate(Point::new(10.0, 20.0));
        assert_eq!(r, Rect::new(11.0, 22.0, 3.0, 4.0));
    }

    #[test]
    fn point_add() {
        assert_eq!(Point::new(1.0, 2.0) + Point::new(3.0, 4.0), Point::new(4.0, 6.0));
    }

    // ── Region ───────────────────────────────────────────────────────

    #[test]
    fn region_contains() {
        let r = Region::new(2, 3, 4, 5);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 3));
        assert!(!r.contains(2, 8));
    }

    #[test]
    fn region_intersection_overlap() {
        let a = Region::new(0, 0, 10, 10);
        let b = Region::new(5, 5, 10, 10);
        assert_eq!(a.intersection(b), Region::new(5, 5, 5, 5));
    }

    #[test]
    fn region_intersection_disjoint() {
        let a = Region::new(0, 0, 5, 5);
        let b = Region::new(10, 10, 5, 5);
        assert_eq!(a.intersection(b), Region::EMPTY);
        assert!(a.intersection(b).is_empty());
    }

    // ── CellMetrics ──────────────────────────────────────────────────

    #[test]
    fn cell_center_lands_inside_its_cell() {
        let m = CellMetrics::default();
        let p = m.cell_center(2, 3);
        assert_eq!(p, Point::new(22.5, 63.0));
        assert_eq!(m.rect_to_region(Rect::new(18.0, 54.0, 9.0, 18.0)), Region::new(2, 3, 1, 1));
        assert!(Rect::new(18.0, 54.0, 9.0, 18.0).contains(p.x, p.y));
    }

    #[test]
    fn grid_to_pixels() {
        assert_eq!(CellMetrics::default().grid_to_pixels(80, 24), (720, 432));
    }

    #[test]
    fn rect_to_region_snaps() {
        let m = CellMetrics::new(10.0, 20.0);
        assert_eq!(m.rect_to_region(Rect::new(0.0, 0.0, 100.0, 18.0)), Region::new(0, 0, 10, 1));
        assert_eq!(m.rect_to_region(Rect::new(14.0, 41.0, 2.0, 2.0)), Region::new(1, 2, 1, 0));
    }
}
