//! Named paper sizes in PDF points (1 pt = 1/72 inch).
//!
//! Sizes are portrait rects anchored at the origin. Names accept a `-l` or
//! `-landscape` suffix that swaps width and height.

use crate::error::GeometryError;
use crate::rect::Rect;

/// ISO A3, 842 × 1191 pt.
pub const PAPER_A3: Rect = paper(842.0, 1191.0);
/// ISO A4, 595 × 842 pt.
pub const PAPER_A4: Rect = paper(595.0, 842.0);
/// ISO A5, 420 × 595 pt.
pub const PAPER_A5: Rect = paper(420.0, 595.0);
/// US Letter, 612 × 792 pt.
pub const PAPER_LETTER: Rect = paper(612.0, 792.0);
/// US Legal, 612 × 1008 pt.
pub const PAPER_LEGAL: Rect = paper(612.0, 1008.0);

const fn paper(width: f64, height: f64) -> Rect {
    Rect {
        x0: 0.0,
        y0: 0.0,
        x1: width,
        y1: height,
    }
}

/// Known sizes as `(name, width, height)`.
const PAPER_SIZES: &[(&str, f64, f64)] = &[
    ("a0", 2384.0, 3370.0),
    ("a1", 1684.0, 2384.0),
    ("a2", 1191.0, 1684.0),
    ("a3", 842.0, 1191.0),
    ("a4", 595.0, 842.0),
    ("a5", 420.0, 595.0),
    ("a6", 298.0, 420.0),
    ("a7", 210.0, 298.0),
    ("a8", 147.0, 210.0),
    ("a9", 105.0, 147.0),
    ("a10", 74.0, 105.0),
    ("b0", 2835.0, 4008.0),
    ("b1", 2004.0, 2835.0),
    ("b2", 1417.0, 2004.0),
    ("b3", 1001.0, 1417.0),
    ("b4", 709.0, 1001.0),
    ("b5", 499.0, 709.0),
    ("letter", 612.0, 792.0),
    ("legal", 612.0, 1008.0),
    ("tabloid", 792.0, 1224.0),
    ("ledger", 1224.0, 792.0),
];

/// Names accepted by [`paper_rect`], without orientation suffixes.
pub fn paper_names() -> impl Iterator<Item = &'static str> {
    PAPER_SIZES.iter().map(|(name, _, _)| *name)
}

/// Look up a paper size by name.
///
/// Matching ignores case and surrounding whitespace. `"a4-l"` and
/// `"a4-landscape"` give A4 in landscape orientation. With a landscape
/// suffix only the text before the first `-` names the size, so
/// `"a4-wide-l"` is also A4 landscape.
///
/// # Errors
///
/// Returns [`GeometryError::UnknownPaperSize`] for unrecognised names.
pub fn paper_rect(name: &str) -> Result<Rect, GeometryError> {
    let lower = name.trim().to_lowercase();
    let landscape = lower.ends_with("-l") || lower.ends_with("-landscape");
    let base = if landscape {
        lower.split('-').next().unwrap_or_default()
    } else {
        lower.as_str()
    };

    let (width, height) = PAPER_SIZES
        .iter()
        .find(|(n, _, _)| *n == base)
        .map(|(_, w, h)| (*w, *h))
        .ok_or_else(|| GeometryError::UnknownPaperSize(name.to_string()))?;

    if landscape {
        Ok(paper(height, width))
    } else {
        Ok(paper(width, height))
    }
}

/// Lenient form of [`paper_rect`]: unknown names fall back to A4.
pub fn paper_size(name: &str) -> Rect {
    match paper_rect(name) {
        Ok(rect) => rect,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %_err, "falling back to A4");
            PAPER_A4
        }
    }
}
