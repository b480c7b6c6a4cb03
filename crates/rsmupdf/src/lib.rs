//! rsmupdf: geometry layer of a MuPDF document-engine binding.
//!
//! This is the public API facade. It re-exports the value types from
//! rsmupdf-core and adds the helpers that sit on the engine boundary:
//! page rotation transforms ([`PageTransform`]) and render transform
//! requests ([`RenderOptions`]).
//!
//! # Architecture
//!
//! - **rsmupdf-core**: points, matrices, rects, quads, paper sizes
//! - **rsmupdf** (this crate): page and render transforms, unified [`Error`]
//!
//! Parsing, rendering, text extraction and annotation editing belong to the
//! native engine. They consume and produce the types exported here.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every value type and [`RenderOptions`]
//! - `tracing`: debug events for fallbacks (unknown paper names, empty render areas)

pub mod error;
pub mod page;
pub mod render;

pub use error::{Error, Result};
pub use page::PageTransform;
pub use render::{BASE_DPI, RenderOptions};
pub use rsmupdf_core;
pub use rsmupdf_core::{
    GeometryError, IRect, Matrix, PAPER_A3, PAPER_A4, PAPER_A5, PAPER_LEGAL, PAPER_LETTER, Point,
    Quad, Rect, paper_names, paper_rect, paper_size,
};
