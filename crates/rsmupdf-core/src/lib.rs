//! rsmupdf-core: engine-independent geometry value types.
//!
//! This crate provides the coordinate types ([`Point`], [`Matrix`], [`Rect`],
//! [`IRect`], [`Quad`]) exchanged with the native document engine, plus named
//! paper sizes. Every type is a `Copy` value with structural equality;
//! operations return new values and never mutate in place.
//!
//! Coordinates follow the engine's page space: origin at the top-left
//! corner, y increasing downward, units in points (1/72 inch).
//!
//! Two predicates compare floats exactly and are kept that way on purpose:
//! [`Matrix::is_rectilinear`] and [`Quad::is_rectangular`].

pub mod error;
pub mod irect;
pub mod matrix;
pub mod paper;
pub mod point;
pub mod quad;
pub mod rect;

pub use error::GeometryError;
pub use irect::IRect;
pub use matrix::Matrix;
pub use paper::{
    PAPER_A3, PAPER_A4, PAPER_A5, PAPER_LEGAL, PAPER_LETTER, paper_names, paper_rect, paper_size,
};
pub use point::Point;
pub use quad::Quad;
pub use rect::Rect;
