//! Error type for the geometry core.
//!
//! Almost every geometry operation is total. [`GeometryError`] covers the
//! few that are not: inverting a singular matrix through
//! [`Matrix::try_invert`](crate::Matrix::try_invert) and looking up an unknown
//! paper size with [`paper_rect`](crate::paper_rect).

use std::fmt;

/// Errors reported by the fallible geometry helpers.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The matrix has a zero determinant and cannot be inverted.
    SingularMatrix {
        /// The determinant that was found (always exactly zero).
        determinant: f64,
    },
    /// A paper size name was not recognised.
    UnknownPaperSize(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::SingularMatrix { determinant } => {
                write!(f, "matrix is not invertible (determinant {determinant})")
            }
            GeometryError::UnknownPaperSize(name) => write!(f, "unknown paper size: {name:?}"),
        }
    }
}

impl std::error::Error for GeometryError {}
