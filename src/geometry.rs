//! Integer geometry in canvas pixel space.
//!
//! The origin is the top-left corner of the canvas, `x` grows to the right
//! and `y` grows downward. Areas are widened to `u64` so that the sum over a
//! whole sprite directory cannot overflow.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in the canvas (top-left corner of a region)
///
/// Serialized as `{"X": .., "Y": ..}` to stay compatible with existing
/// manifest consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    #[serde(rename = "X")]
    pub x: u32,
    #[serde(rename = "Y")]
    pub y: u32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of a region in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    #[serde(rename = "X")]
    pub width: u32,
    #[serde(rename = "Y")]
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Area in pixels
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// True if `other` is no larger than `self` on both axes
    pub fn fits(&self, other: Size) -> bool {
        other.width <= self.width && other.height <= self.height
    }

    /// Grow both axes by `amount`
    pub fn grow(&self, amount: u32) -> Size {
        Size::new(self.width.saturating_add(amount), self.height.saturating_add(amount))
    }

    /// Shrink both axes by `amount`, stopping at zero
    pub fn shrink(&self, amount: u32) -> Size {
        Size::new(self.width.saturating_sub(amount), self.height.saturating_sub(amount))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An axis-aligned rectangle covering `[x, x + width) x [y, y + height)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { origin: Point::new(x, y), size: Size::new(width, height) }
    }

    /// Rectangle of `size` anchored at the canvas origin
    pub fn from_size(size: Size) -> Self {
        Self { origin: Point::ORIGIN, size }
    }

    pub fn x(&self) -> u32 {
        self.origin.x
    }

    pub fn y(&self) -> u32 {
        self.origin.y
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Exclusive right edge
    pub fn right(&self) -> u64 {
        u64::from(self.origin.x) + u64::from(self.size.width)
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> u64 {
        u64::from(self.origin.y) + u64::from(self.size.height)
    }

    pub fn area(&self) -> u64 {
        self.size.area()
    }

    pub fn is_empty(&self) -> bool {
        self.size.width == 0 || self.size.height == 0
    }

    /// True if `other` lies entirely inside this rectangle
    pub fn contains(&self, other: &Rect) -> bool {
        other.origin.x >= self.origin.x
            && other.origin.y >= self.origin.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// True if the two rectangles share at least one pixel
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        u64::from(self.origin.x) < other.right()
            && u64::from(other.origin.x) < self.right()
            && u64::from(self.origin.y) < other.bottom()
            && u64::from(other.origin.y) < self.bottom()
    }

    /// Cut with a vertical line `width` pixels from the left edge.
    ///
    /// Returns `(left, right)`; both keep the full height.
    pub fn split_vertical(&self, width: u32) -> (Rect, Rect) {
        let width = width.min(self.size.width);
        let left = Rect::new(self.origin.x, self.origin.y, width, self.size.height);
        let right = Rect::new(
            self.origin.x + width,
            self.origin.y,
            self.size.width - width,
            self.size.height,
        );
        (left, right)
    }

    /// Cut with a horizontal line `height` pixels below the top edge.
    ///
    /// Returns `(top, bottom)`; both keep the full width.
    pub fn split_horizontal(&self, height: u32) -> (Rect, Rect) {
        let height = height.min(self.size.height);
        let top = Rect::new(self.origin.x, self.origin.y, self.size.width, height);
        let bottom = Rect::new(
            self.origin.x,
            self.origin.y + height,
            self.size.width,
            self.size.height - height,
        );
        (top, bottom)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.size, self.origin)
    }
}
