//! Axis-aligned rectangles in floating-point page space.

use std::fmt;

use crate::irect::IRect;
use crate::matrix::Matrix;
use crate::point::Point;
use crate::quad::Quad;

/// Axis-aligned rectangle given by two corners.
///
/// Coordinates follow the document engine's convention:
/// - `x0`, `y0`: top-left corner (y increases downward)
/// - `x1`, `y1`: bottom-right corner
///
/// The ordering is conventional, not enforced. A rect with `x0 >= x1` or
/// `y0 >= y1` is *empty*; use [`Rect::normalize`] to reorder the corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rect spanning from `top_left` to `bottom_right`, taken verbatim.
    pub fn from_points(top_left: Point, bottom_right: Point) -> Self {
        Self::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y)
    }

    /// Width of the rectangle (always non-negative).
    pub fn width(&self) -> f64 {
        (self.x1 - self.x0).abs()
    }

    /// Height of the rectangle (always non-negative).
    pub fn height(&self) -> f64 {
        (self.y1 - self.y0).abs()
    }

    /// True if the rectangle has zero or negative extent on either axis.
    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// Legacy "infinite rect" test: `x0 > x1 - 1 && y0 > y1 - 1`.
    ///
    /// This is the predicate the binding layer has always used. It is also
    /// true for any rect narrower than one unit on both axes, including the
    /// zero rect `(0, 0, 0, 0)`.
    pub fn is_infinite(&self) -> bool {
        self.x0 > self.x1 - 1.0 && self.y0 > self.y1 - 1.0
    }

    /// True if `p` lies inside the rect or on its edges.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x0 && p.x <= self.x1 && p.y >= self.y0 && p.y <= self.y1
    }

    /// True if `other` lies entirely inside this rect (edges inclusive).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x0 >= self.x0 && other.y0 >= self.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }

    /// True if the two rects overlap with positive area.
    ///
    /// Empty rects never intersect anything, and rects that only share an
    /// edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x0 < other.x1 && self.x1 > other.x0 && self.y0 < other.y1 && self.y1 > other.y0
    }

    /// Component-wise intersection. Disjoint inputs give an empty result.
    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }

    /// Smallest rect covering both rects.
    ///
    /// If either operand is empty the other one is returned unchanged.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Extend each bound independently so that `p` is covered.
    pub fn include_point(&self, p: Point) -> Rect {
        Rect {
            x0: self.x0.min(p.x),
            y0: self.y0.min(p.y),
            x1: self.x1.max(p.x),
            y1: self.y1.max(p.y),
        }
    }

    /// Bounding box of the rect's four corners after applying `m`.
    ///
    /// Empty rects are returned unchanged.
    pub fn transform(&self, m: &Matrix) -> Rect {
        if self.is_empty() {
            return *self;
        }
        let corners = [
            self.top_left().transform(m),
            self.top_right().transform(m),
            self.bottom_right().transform(m),
            self.bottom_left().transform(m),
        ];
        let first = corners[0];
        corners[1..]
            .iter()
            .fold(Rect::from_points(first, first), |r, p| r.include_point(*p))
    }

    /// Reorder the bounds so that `x0 <= x1` and `y0 <= y1`.
    pub fn normalize(&self) -> Rect {
        Rect {
            x0: self.x0.min(self.x1),
            y0: self.y0.min(self.y1),
            x1: self.x0.max(self.x1),
            y1: self.y0.max(self.y1),
        }
    }

    /// `(x0, y0)`.
    pub fn top_left(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    /// `(x1, y0)`.
    pub fn top_right(&self) -> Point {
        Point::new(self.x1, self.y0)
    }

    /// `(x0, y1)`.
    pub fn bottom_left(&self) -> Point {
        Point::new(self.x0, self.y1)
    }

    /// `(x1, y1)`.
    pub fn bottom_right(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// The rect as a [`Quad`] with corners in UL, UR, LL, LR order.
    pub fn quad(&self) -> Quad {
        Quad::new(
            self.top_left(),
            self.top_right(),
            self.bottom_left(),
            self.bottom_right(),
        )
    }

    /// Round outward to the pixel grid: floor the minima, ceil the maxima.
    ///
    /// Coordinates beyond the `i64` range saturate and NaN maps to 0.
    pub fn irect(&self) -> IRect {
        IRect::new(
            self.x0.floor() as i64,
            self.y0.floor() as i64,
            self.x1.ceil() as i64,
            self.y1.ceil() as i64,
        )
    }
}

/// Components use the same float form as [`Point`]'s `Display`.
impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect({}, {}, {}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}
