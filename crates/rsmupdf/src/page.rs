//! Page rotation transforms.
//!
//! The document engine reports a page's bounding rect in unrotated page
//! space together with its `/Rotate` value. [`PageTransform`] turns that
//! pair into the matrices that map between unrotated page space and the
//! rotated space the page is displayed in.

use rsmupdf_core::{Matrix, Point, Rect, paper_rect};

use crate::error::{Error, Result};

/// Rotation and derotation matrices for one page.
///
/// # Coordinate Transform Pipeline
///
/// 1. Offset from the page rect's top-left corner
/// 2. Rotate clockwise by 0°/90°/180°/270° (y increases downward)
/// 3. Shift so the rotated page again starts at the origin
///
/// # Example
///
/// ```
/// use rsmupdf::{PageTransform, Point, Rect};
///
/// // US Letter page rotated a quarter turn
/// let page = PageTransform::new(Rect::new(0.0, 0.0, 612.0, 792.0), 90).unwrap();
/// assert_eq!(page.rotated_rect(), Rect::new(0.0, 0.0, 792.0, 612.0));
///
/// // The page's top-left corner ends up top-right.
/// assert_eq!(page.rotate_point(Point::new(0.0, 0.0)), Point::new(792.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTransform {
    rect: Rect,
    rotation: i32,
}

impl PageTransform {
    /// Create a transform from the page rect and its `/Rotate` value.
    ///
    /// The rect is normalized and the rotation reduced into `0..360`
    /// (so `-90` becomes `270`).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRotation`] if `rotation` is not a multiple of 90.
    pub fn new(rect: Rect, rotation: i32) -> Result<Self> {
        let normalized = rotation.rem_euclid(360);
        if normalized % 90 != 0 {
            return Err(Error::InvalidRotation(rotation));
        }
        Ok(Self {
            rect: rect.normalize(),
            rotation: normalized,
        })
    }

    /// Create a transform for a named paper size (see [`paper_rect`]).
    pub fn for_paper(name: &str, rotation: i32) -> Result<Self> {
        let rect = paper_rect(name)?;
        Self::new(rect, rotation)
    }

    /// Unrotated page rect.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Page rotation in degrees (0, 90, 180 or 270).
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    /// Matrix from unrotated page space to rotated display space.
    pub fn rotation_matrix(&self) -> Matrix {
        let w = self.rect.width();
        let h = self.rect.height();
        let turn = match self.rotation {
            90 => Matrix::new(0.0, 1.0, -1.0, 0.0, h, 0.0),
            180 => Matrix::new(-1.0, 0.0, 0.0, -1.0, w, h),
            270 => Matrix::new(0.0, -1.0, 1.0, 0.0, 0.0, w),
            _ => Matrix::IDENTITY,
        };
        Matrix::translate(-self.rect.x0, -self.rect.y0).concat(&turn)
    }

    /// Matrix from rotated display space back to unrotated page space.
    ///
    /// Quarter turns always have determinant ±1, so the identity fallback of
    /// [`Matrix::invert`] is never taken here.
    pub fn derotation_matrix(&self) -> Matrix {
        let (inverse, _) = self.rotation_matrix().invert();
        inverse
    }

    /// The page rect as it appears after rotation.
    pub fn rotated_rect(&self) -> Rect {
        self.rect.transform(&self.rotation_matrix())
    }

    /// Map a point from page space to rotated display space.
    pub fn rotate_point(&self, p: Point) -> Point {
        p.transform(&self.rotation_matrix())
    }

    /// Map a point from rotated display space back to page space.
    pub fn derotate_point(&self, p: Point) -> Point {
        p.transform(&self.derotation_matrix())
    }
}
