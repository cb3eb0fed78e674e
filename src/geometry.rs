//! Core geometry types: Offset, Size, Region, Transform.
//!
//! All widget geometry is stored in whole pixels. Conversions from floating
//! point round to the nearest pixel, so sub-pixel positions never reach the
//! widget tree.

use std::ops::{Add, Neg, Sub};

/// Round a float to the nearest whole pixel.
#[inline]
pub fn round_px(value: f32) -> i32 {
    value.round() as i32
}

// ---------------------------------------------------------------------------
// Offset
// ---------------------------------------------------------------------------

/// A 2D position or displacement in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    /// The origin.
    pub const ZERO: Offset = Offset { x: 0, y: 0 };

    /// Create a new offset.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Offset {
    type Output = Offset;
    #[inline]
    fn add(self, rhs: Offset) -> Offset {
        Offset { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Offset {
    type Output = Offset;
    #[inline]
    fn sub(self, rhs: Offset) -> Offset {
        Offset { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Neg for Offset {
    type Output = Offset;
    #[inline]
    fn neg(self) -> Offset {
        Offset { x: -self.x, y: -self.y }
    }
}

impl From<(i32, i32)> for Offset {
    fn from((x, y): (i32, i32)) -> Self {
        Offset { x, y }
    }
}

impl From<(f32, f32)> for Offset {
    fn from((x, y): (f32, f32)) -> Self {
        Offset { x: round_px(x), y: round_px(y) }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size in pixels (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0, height: 0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether the local point lies inside `0..width` and `0..height`.
    #[inline]
    pub const fn contains(self, point: Offset) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    /// Grow both dimensions by `amount` on every side.
    #[inline]
    pub const fn pad(self, amount: i32) -> Size {
        Size { width: self.width + amount * 2, height: self.height + amount * 2 }
    }

    /// Convert to a [`Region`] positioned at the origin.
    #[inline]
    pub const fn to_region(self) -> Region {
        Region { x: 0, y: 0, width: self.width, height: self.height }
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Size { width, height }
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Size { width: round_px(width), height: round_px(height) }
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A rectangle defined by position and size, in pixels.
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

    /// Build a region from a position and a size.
    #[inline]
    pub const fn from_parts(offset: Offset, size: Size) -> Self {
        Self { x: offset.x, y: offset.y, width: size.width, height: size.height }
    }

    /// The right edge (exclusive).
    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive).
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// The top-left corner.
    #[inline]
    pub const fn offset(self) -> Offset {
        Offset { x: self.x, y: self.y }
    }

    /// The dimensions.
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Whether the point lies inside this region.
    #[inline]
    pub const fn contains(self, point: Offset) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// A local-to-parent transform.
///
/// Widgets are only ever translated by the layout engine, so the transform is
/// a pure integer translation. Composition accumulates an ancestor chain into
/// a single window-space transform.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Transform {
    pub dx: i32,
    pub dy: i32,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Transform = Transform { dx: 0, dy: 0 };

    /// A translation by `offset`.
    #[inline]
    pub const fn translation(offset: Offset) -> Self {
        Self { dx: offset.x, dy: offset.y }
    }

    /// Compose `self` (outer, parent space) with `inner` (child space).
    #[inline]
    pub const fn then(self, inner: Transform) -> Transform {
        Transform { dx: self.dx + inner.dx, dy: self.dy + inner.dy }
    }

    /// Map a local point into the transform's target space.
    #[inline]
    pub const fn apply(self, point: Offset) -> Offset {
        Offset { x: point.x + self.dx, y: point.y + self.dy }
    }

    /// Map a point from the target space back into local space.
    #[inline]
    pub const fn invert(self, point: Offset) -> Offset {
        Offset { x: point.x - self.dx, y: point.y - self.dy }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_arithmetic() {
        let a = Offset::new(3, 4);
        let b = Offset::new(1, 2);
        assert_eq!(a + b, Offset::new(4, 6));
        assert_eq!(a - b, Offset::new(2, 2));
        assert_eq!(-a, Offset::new(-3, -4));
    }

    #[test]
    fn float_conversions_round_to_whole_pixels() {
        assert_eq!(Offset::from((10.4_f32, 10.6_f32)), Offset::new(10, 11));
        assert_eq!(Size::from((99.5_f32, 0.49_f32)), Size::new(100, 0));
        assert_eq!(round_px(-1.6), -2);
    }

    #[test]
    fn size_contains_is_half_open() {
        let s = Size::new(10, 5);
        assert!(s.contains(Offset::new(0, 0)));
        assert!(s.contains(Offset::new(9, 4)));
        assert!(!s.contains(Offset::new(10, 4)));
        assert!(!s.contains(Offset::new(3, -1)));
    }

    #[test]
    fn size_pad() {
        assert_eq!(Size::new(10, 4).pad(2), Size::new(14, 8));
    }

    #[test]
    fn region_contains_point() {
        let r = Region::new(5, 5, 10, 10);
        assert!(r.contains(Offset::new(5, 5)));
        assert!(r.contains(Offset::new(14, 14)));
        assert!(!r.contains(Offset::new(15, 5)));
        assert!(!r.contains(Offset::new(4, 5)));
    }

    #[test]
    fn region_parts() {
        let r = Region::from_parts(Offset::new(2, 3), Size::new(4, 5));
        assert_eq!(r.right(), 6);
        assert_eq!(r.bottom(), 8);
        assert_eq!(r.offset(), Offset::new(2, 3));
        assert_eq!(r.size(), Size::new(4, 5));
        assert_eq!(Size::new(4, 5).to_region(), Region::new(0, 0, 4, 5));
    }

    #[test]
    fn transform_compose_and_invert() {
        let parent = Transform::translation(Offset::new(10, 10));
        let child = Transform::translation(Offset::new(3, 4));
        let world = parent.then(child);
        assert_eq!(world, Transform { dx: 13, dy: 14 });
        let p = world.apply(Offset::new(1, 1));
        assert_eq!(p, Offset::new(14, 15));
        assert_eq!(world.invert(p), Offset::new(1, 1));
        assert_eq!(Transform::IDENTITY.then(child), child);
    }
}
