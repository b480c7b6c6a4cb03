//! Integer rectangles on the pixel grid.

use std::fmt;

use crate::rect::Rect;

/// Integer-coordinate rectangle, typically produced by [`Rect::irect`].
///
/// Coordinates are 64-bit so outward rounding never clamps page-scale
/// values. Width and height are signed: an inverted rect reports negative
/// extents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IRect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl IRect {
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Signed horizontal extent, saturating at the `i64` range.
    pub fn width(&self) -> i64 {
        self.x1.saturating_sub(self.x0)
    }

    /// Signed vertical extent, saturating at the `i64` range.
    pub fn height(&self) -> i64 {
        self.y1.saturating_sub(self.y0)
    }

    /// True if the rect has zero or negative extent on either axis.
    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// Widen to floating-point coordinates (exact up to 2^53).
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x0 as f64,
            self.y0 as f64,
            self.x1 as f64,
            self.y1 as f64,
        )
    }
}

impl From<IRect> for Rect {
    fn from(r: IRect) -> Self {
        r.rect()
    }
}

impl fmt::Display for IRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IRect({}, {}, {}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}
