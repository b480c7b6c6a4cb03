//! Error types for the page and render helpers.
//!
//! Uses [`thiserror`] for ergonomic error derivation. [`Error`] wraps the
//! core [`GeometryError`] so both layers propagate through one `?`.

use rsmupdf_core::{GeometryError, Matrix};
use thiserror::Error;

/// Error type for page and render transform operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Page rotation is not a multiple of 90 degrees.
    #[error("invalid page rotation: {0} (must be a multiple of 90)")]
    InvalidRotation(i32),

    /// A render resolution of zero was requested.
    #[error("invalid resolution: {0} dpi")]
    InvalidDpi(u32),

    /// A render matrix contains NaN or an infinity.
    #[error("render matrix has non-finite entries: {0}")]
    NonFiniteMatrix(Matrix),

    /// A core geometry error.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
