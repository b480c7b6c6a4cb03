//! Affine transformation matrices.

use std::fmt;

use crate::error::GeometryError;

/// A 2D affine transform stored as six scalars.
///
/// The matrix is the row-vector form
///
/// ```text
/// | a b 0 |
/// | c d 0 |
/// | e f 1 |
/// ```
///
/// so a point `(x, y)` maps to `(x·a + y·c + e, x·b + y·d + f)`. This is the
/// same layout as a PDF content-stream `cm` operand array.
///
/// # Example
///
/// ```
/// use rsmupdf_core::{Matrix, Point};
///
/// // Scale first, then translate.
/// let m = Matrix::scale(2.0, 2.0).concat(&Matrix::translate(10.0, 20.0));
/// assert_eq!(Point::new(1.0, 1.0).transform(&m), Point::new(12.0, 22.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    /// The identity transform `(1, 0, 0, 1, 0, 0)`.
    pub const IDENTITY: Matrix = Matrix {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Scaling by `sx` horizontally and `sy` vertically.
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Translation by `(tx, ty)`.
    pub fn translate(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Rotation by `degrees`, counter-clockwise in a y-up frame.
    ///
    /// Built from `sin`/`cos`, so multiples of 90° other than 0 carry
    /// rounding residue in the zero entries (see [`Matrix::is_rectilinear`]).
    pub fn rotate(degrees: f64) -> Self {
        let rad = degrees.to_radians();
        let (s, c) = rad.sin_cos();
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    /// Shear with horizontal factor `sx` and vertical factor `sy`.
    pub fn shear(sx: f64, sy: f64) -> Self {
        Self::new(1.0, sy, sx, 1.0, 0.0, 0.0)
    }

    /// Compose `self` with `other`: the result applies `self` first, then `other`.
    pub fn concat(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    /// Prepend a scale, so points are scaled before `self` applies.
    pub fn pre_scale(&self, sx: f64, sy: f64) -> Matrix {
        Matrix::scale(sx, sy).concat(self)
    }

    /// Prepend a translation, so points are translated before `self` applies.
    pub fn pre_translate(&self, tx: f64, ty: f64) -> Matrix {
        Matrix::translate(tx, ty).concat(self)
    }

    /// Prepend a rotation, so points are rotated before `self` applies.
    pub fn pre_rotate(&self, degrees: f64) -> Matrix {
        Matrix::rotate(degrees).concat(self)
    }

    /// Determinant of the linear part, `a·d − b·c`.
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// True when the determinant is not exactly zero.
    pub fn is_invertible(&self) -> bool {
        self.determinant() != 0.0
    }

    /// Invert the matrix.
    ///
    /// Returns `(inverse, true)` on success. A singular matrix (determinant
    /// exactly zero) yields `(Matrix::IDENTITY, false)` instead of failing.
    pub fn invert(&self) -> (Matrix, bool) {
        match self.try_invert() {
            Ok(inverse) => (inverse, true),
            Err(_) => (Matrix::IDENTITY, false),
        }
    }

    /// Invert the matrix, reporting a singular matrix as an error.
    pub fn try_invert(&self) -> Result<Matrix, GeometryError> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(GeometryError::SingularMatrix { determinant: det });
        }
        let inv_det = 1.0 / det;
        Ok(Matrix {
            a: self.d * inv_det,
            b: -self.b * inv_det,
            c: -self.c * inv_det,
            d: self.a * inv_det,
            e: (self.c * self.f - self.d * self.e) * inv_det,
            f: (self.b * self.e - self.a * self.f) * inv_det,
        })
    }

    /// True if the matrix maps axis-aligned rectangles to axis-aligned rectangles.
    ///
    /// Holds when `b` and `c` are both zero (scale/flip) or `a` and `d` are
    /// both zero (quarter turn). The comparison is exact: a 90° rotation
    /// built with [`Matrix::rotate`] is usually *not* rectilinear because
    /// `cos(π/2)` is not exactly zero.
    pub fn is_rectilinear(&self) -> bool {
        (self.b == 0.0 && self.c == 0.0) || (self.a == 0.0 && self.d == 0.0)
    }

    /// The matrix as `[a, b, c, d, e, f]`.
    pub fn to_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }
}

impl From<[f64; 6]> for Matrix {
    fn from([a, b, c, d, e, f]: [f64; 6]) -> Self {
        Self { a, b, c, d, e, f }
    }
}

/// Components use the same float form as [`Point`](crate::Point)'s `Display`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Matrix({}, {}, {}, {}, {}, {})",
            self.a, self.b, self.c, self.d, self.e, self.f
        )
    }
}
