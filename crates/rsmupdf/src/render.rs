//! Render transform requests.
//!
//! The rasterizer lives in the document engine; it only needs one matrix
//! and an optional clip. [`RenderOptions`] collects the caller's intents
//! (resolution, zoom, rotation, explicit matrix, clip) and folds them into
//! that matrix with [`Matrix::concat`].

use rsmupdf_core::{IRect, Matrix, Rect};

use crate::error::{Error, Result};

/// Resolution of PDF user space: one point is 1/72 inch.
pub const BASE_DPI: f64 = 72.0;

/// Options for turning a page into pixels.
///
/// ```
/// use rsmupdf::{IRect, Rect, RenderOptions};
///
/// let opts = RenderOptions::default().with_dpi(144);
/// let page = Rect::new(0.0, 0.0, 612.0, 792.0);
/// assert_eq!(opts.pixel_bounds(&page), IRect::new(0, 0, 1224, 1584));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderOptions {
    /// Base transform applied to page space (default: identity).
    pub matrix: Matrix,
    /// Target resolution. When set, a `dpi / 72` scale is applied *before*
    /// `matrix`. `Some(0)` is treated as unset and rejected by
    /// [`RenderOptions::validate`].
    pub dpi: Option<u32>,
    /// Page-space clip rect; only the part of the page inside it is rendered.
    pub clip: Option<Rect>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            matrix: Matrix::IDENTITY,
            dpi: None,
            clip: None,
        }
    }
}

impl RenderOptions {
    /// Replace the base matrix.
    pub fn with_matrix(mut self, matrix: Matrix) -> Self {
        self.matrix = matrix;
        self
    }

    /// Set the target resolution in dots per inch.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = Some(dpi);
        self
    }

    /// Append a zoom after the current matrix.
    pub fn with_zoom(mut self, sx: f64, sy: f64) -> Self {
        self.matrix = self.matrix.concat(&Matrix::scale(sx, sy));
        self
    }

    /// Append a rotation (degrees) after the current matrix.
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.matrix = self.matrix.concat(&Matrix::rotate(degrees));
        self
    }

    /// Restrict rendering to `clip` (page space).
    pub fn with_clip(mut self, clip: Rect) -> Self {
        self.clip = Some(clip);
        self
    }

    /// Check the options before handing them to the engine.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDpi`] for a resolution of zero.
    /// - [`Error::NonFiniteMatrix`] if the base matrix holds NaN or an infinity.
    pub fn validate(&self) -> Result<()> {
        if let Some(0) = self.dpi {
            return Err(Error::InvalidDpi(0));
        }
        if !self.matrix.to_array().iter().all(|v| v.is_finite()) {
            return Err(Error::NonFiniteMatrix(self.matrix));
        }
        Ok(())
    }

    /// The single matrix the rasterizer should apply to page space.
    pub fn transform(&self) -> Matrix {
        match self.dpi {
            Some(dpi) if dpi > 0 => {
                let zoom = f64::from(dpi) / BASE_DPI;
                Matrix::scale(zoom, zoom).concat(&self.matrix)
            }
            _ => self.matrix,
        }
    }

    /// Pixel-grid bounds of the rendered output for a page.
    ///
    /// The page rect (clipped, if a clip is set) is transformed and rounded
    /// outward. A clip that misses the page yields an empty [`IRect`].
    pub fn pixel_bounds(&self, page_rect: &Rect) -> IRect {
        let area = match self.clip {
            Some(clip) => page_rect.intersect(&clip),
            None => *page_rect,
        };
        if area.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(page = %page_rect, clip = ?self.clip, "render area is empty");
            return IRect::default();
        }
        area.transform(&self.transform()).irect()
    }
}
