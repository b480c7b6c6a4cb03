//! Quadrilaterals, as returned for search hits and text-markup annotations.

use std::fmt;

use crate::matrix::Matrix;
use crate::point::Point;
use crate::rect::Rect;

/// Four named corners: upper-left, upper-right, lower-left, lower-right.
///
/// No ordering or convexity is enforced. A rotated text run produces a
/// tilted quad; callers that need an axis-aligned box use [`Quad::rect`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quad {
    pub ul: Point,
    pub ur: Point,
    pub ll: Point,
    pub lr: Point,
}

impl Quad {
    pub fn new(ul: Point, ur: Point, ll: Point, lr: Point) -> Self {
        Self { ul, ur, ll, lr }
    }

    /// Smallest axis-aligned rect enclosing all four corners.
    pub fn rect(&self) -> Rect {
        Rect::from_points(self.ul, self.ul)
            .include_point(self.ur)
            .include_point(self.ll)
            .include_point(self.lr)
    }

    /// True when the bounding rect is empty.
    ///
    /// A zero-area quad whose corners are spread along both axes (for
    /// example three collinear points on a diagonal) is *not* empty.
    pub fn is_empty(&self) -> bool {
        self.rect().is_empty()
    }

    /// True when every corner exactly equals the matching corner of
    /// [`Quad::rect`]. No tolerance is applied.
    pub fn is_rectangular(&self) -> bool {
        let r = self.rect();
        self.ul == r.top_left()
            && self.ur == r.top_right()
            && self.ll == r.bottom_left()
            && self.lr == r.bottom_right()
    }

    /// Convexity test around the cycle UL → UR → LR → LL.
    ///
    /// Only one winding is accepted: every turn must have a non-negative
    /// cross product, which is the orientation [`Rect::quad`] produces in
    /// y-down page space. The mirrored winding reports `false`.
    pub fn is_convex(&self) -> bool {
        cross(self.ul, self.ur, self.lr) >= 0.0
            && cross(self.ur, self.lr, self.ll) >= 0.0
            && cross(self.lr, self.ll, self.ul) >= 0.0
            && cross(self.ll, self.ul, self.ur) >= 0.0
    }

    /// Apply `m` to each corner.
    pub fn transform(&self, m: &Matrix) -> Quad {
        Quad {
            ul: self.ul.transform(m),
            ur: self.ur.transform(m),
            ll: self.ll.transform(m),
            lr: self.lr.transform(m),
        }
    }
}

/// z component of `(b - a) × (c - a)`.
fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

impl From<Rect> for Quad {
    fn from(r: Rect) -> Self {
        r.quad()
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quad({}, {}, {}, {})", self.ul, self.ur, self.ll, self.lr)
    }
}
