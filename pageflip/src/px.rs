//! Integer pixel geometry for the paging engine.
//!
//! Frames reported by a viewport adapter live in the scrollable content's
//! coordinate space: origin at the top-left of the content, x increasing to
//! the right. Negative coordinates are valid for content scrolled past the
//! viewport's left edge.
//!
//! - [`Px`] — a single pixel coordinate value
//! - [`PxPosition`] — a point in content space
//! - [`PxSize`] — a width/height pair
//! - [`PxRect`] — an axis-aligned rectangle with half-open edges

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A physical pixel coordinate value.
///
/// Supports negative values so content offsets and off-screen frames can be
/// expressed directly. Arithmetic that could overflow is available in
/// saturating form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// The maximum representable pixel value.
    pub const MAX: Self = Self(i32::MAX);

    /// Creates a pixel value from a raw `i32`.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw `i32` value.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Converts to `f32`.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Adds without overflowing.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Subtracts without overflowing.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Multiplies by a page index without overflowing.
    ///
    /// Page x-offsets are `page_width * index`; with pathological widths the
    /// product can exceed `i32`, so it is clamped instead of wrapping.
    pub fn saturating_mul_index(self, index: usize) -> Self {
        let wide = i64::from(self.0) * index as i64;
        if wide > i64::from(i32::MAX) {
            Self::MAX
        } else if wide < i64::from(i32::MIN) {
            Self(i32::MIN)
        } else {
            Self(wide as i32)
        }
    }

    /// Returns the larger of two values.
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// Returns the smaller of two values.
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

impl Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<i32> for Px {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<i32> for Px {
    type Output = Self;

    fn div(self, rhs: i32) -> Self {
        Self(self.0 / rhs)
    }
}

impl Neg for Px {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// A point in content-space pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// Horizontal coordinate.
    pub x: Px,
    /// Vertical coordinate.
    pub y: Px,
}

impl PxPosition {
    /// The origin point.
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
    };

    /// Creates a position from coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by the given deltas.
    pub fn offset(self, dx: Px, dy: Px) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxSize {
    /// Horizontal extent.
    pub width: Px,
    /// Vertical extent.
    pub height: Px,
}

impl PxSize {
    /// A zero-area size.
    pub const ZERO: Self = Self {
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a size from extents.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// Whether either extent is zero or negative.
    pub fn is_empty(self) -> bool {
        self.width <= Px::ZERO || self.height <= Px::ZERO
    }
}

/// An axis-aligned rectangle in content-space pixels.
///
/// Edges are half-open: a rect covers `[x, x + width)` horizontally and
/// `[y, y + height)` vertically, so adjacent page frames never both claim
/// the shared boundary column.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxRect {
    /// Top-left corner.
    pub origin: PxPosition,
    /// Extents.
    pub size: PxSize,
}

impl PxRect {
    /// A zero-area rect at the origin.
    pub const ZERO: Self = Self {
        origin: PxPosition::ZERO,
        size: PxSize::ZERO,
    };

    /// Creates a rect from raw coordinates and extents.
    pub fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            origin: PxPosition::new(x, y),
            size: PxSize::new(width, height),
        }
    }

    /// The left edge.
    pub fn x(self) -> Px {
        self.origin.x
    }

    /// The top edge.
    pub fn y(self) -> Px {
        self.origin.y
    }

    /// Horizontal extent.
    pub fn width(self) -> Px {
        self.size.width
    }

    /// Vertical extent.
    pub fn height(self) -> Px {
        self.size.height
    }

    /// The first column to the right of the rect.
    pub fn right(self) -> Px {
        self.origin.x.saturating_add(self.size.width)
    }

    /// The first row below the rect.
    pub fn bottom(self) -> Px {
        self.origin.y.saturating_add(self.size.height)
    }

    /// The geometric center point.
    pub fn center(self) -> PxPosition {
        PxPosition::new(
            self.origin.x.saturating_add(self.size.width / 2),
            self.origin.y.saturating_add(self.size.height / 2),
        )
    }

    /// Whether the rect has zero area.
    pub fn is_empty(self) -> bool {
        self.size.is_empty()
    }

    /// Whether the point lies inside the rect (half-open edges).
    pub fn contains(self, point: PxPosition) -> bool {
        !self.is_empty()
            && point.x >= self.origin.x
            && point.x < self.right()
            && point.y >= self.origin.y
            && point.y < self.bottom()
    }

    /// Whether two rects overlap in at least one pixel.
    pub fn intersects(self, other: Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.origin.x < other.right()
            && other.origin.x < self.right()
            && self.origin.y < other.bottom()
            && other.origin.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_index_offset() {
        assert_eq!(Px(320).saturating_mul_index(3), Px(960));
        assert_eq!(Px(320).saturating_mul_index(0), Px::ZERO);
        assert_eq!(Px(i32::MAX).saturating_mul_index(2), Px::MAX);
    }

    #[test]
    fn rect_center() {
        let rect = PxRect::new(Px(320), Px(0), Px(320), Px(480));
        assert_eq!(rect.center(), PxPosition::new(Px(480), Px(240)));
    }

    #[test]
    fn contains_is_half_open() {
        let page0 = PxRect::new(Px(0), Px(0), Px(320), Px(480));
        let page1 = PxRect::new(Px(320), Px(0), Px(320), Px(480));
        let boundary = PxPosition::new(Px(320), Px(240));

        assert!(!page0.contains(boundary));
        assert!(page1.contains(boundary));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let rect = PxRect::new(Px(10), Px(10), Px::ZERO, Px(100));
        assert!(!rect.contains(PxPosition::new(Px(10), Px(10))));
        assert!(rect.is_empty());
    }

    #[test]
    fn intersection_excludes_touching_edges() {
        let a = PxRect::new(Px(0), Px(0), Px(320), Px(480));
        let b = PxRect::new(Px(320), Px(0), Px(320), Px(480));
        let c = PxRect::new(Px(319), Px(0), Px(320), Px(480));

        assert!(!a.intersects(b));
        assert!(a.intersects(c));
    }
}
