//! Glued character splitting
//!
//! Adjacent glyphs that touch in the scan come out of column
//! segmentation as one wide glyph. Glyphs much wider than the line's
//! mean are probed near their middle for a column that no stroke crosses.

use crate::error::RecogResult;
use glyphscan_core::{GlyphImage, PixelGrid};
use tracing::trace;

/// Glyphs wider than this multiple of the mean width are probed.
pub const WIDE_GLYPH_RATIO: f64 = 1.5;

/// Candidate seams lie within this many columns of the midpoint.
pub const SEAM_SEARCH_RADIUS: i64 = 5;

/// Find a column of `glyph` that no stroke crosses.
///
/// Columns `mid - 5 .. mid + 5` are tried left to right, skipping those
/// without a right neighbor. A column is crossed if, on any row other
/// than the first and last, a black pixel has a black E, NE or SE
/// neighbor. The last uncrossed column wins.
pub fn find_seam(glyph: &PixelGrid) -> Option<u32> {
    let width = i64::from(glyph.width());
    let height = i64::from(glyph.height());
    let mid = width / 2;

    let mut seam = None;
    for col in (mid - SEAM_SEARCH_RADIUS)..(mid + SEAM_SEARCH_RADIUS) {
        if col < 0 || col + 1 >= width {
            continue;
        }
        let crossed = (1..height - 1).any(|row| {
            glyph.is_black_at(col, row)
                && (glyph.is_black_at(col + 1, row)
                    || glyph.is_black_at(col + 1, row + 1)
                    || glyph.is_black_at(col + 1, row - 1))
        });
        if !crossed {
            seam = Some(col as u32);
        }
    }
    seam
}

/// Split every unusually wide glyph at its seam, if it has one.
///
/// The mean width is taken over non-space glyphs only. Spaces and glyphs
/// within [`WIDE_GLYPH_RATIO`] of the mean pass through untouched.
///
/// # Errors
///
/// Propagates a failed column split.
pub fn split_double_chars(glyphs: Vec<GlyphImage>) -> RecogResult<Vec<GlyphImage>> {
    let widths: Vec<f64> = glyphs
        .iter()
        .filter_map(GlyphImage::pixels)
        .map(|g| f64::from(g.width()))
        .collect();
    if widths.is_empty() {
        return Ok(glyphs);
    }
    let mean = widths.iter().sum::<f64>() / widths.len() as f64;

    let mut out = Vec::with_capacity(glyphs.len());
    for glyph in glyphs {
        let seam = glyph
            .pixels()
            .filter(|grid| f64::from(grid.width()) / mean > WIDE_GLYPH_RATIO)
            .and_then(find_seam);
        match (glyph, seam) {
            (GlyphImage::Pixels(grid), Some(seam)) => {
                trace!(width = grid.width(), seam, "splitting glued glyph");
                let (left, right) = grid.split_at_column(seam)?;
                out.push(GlyphImage::Pixels(left));
                out.push(GlyphImage::Pixels(right));
            }
            (glyph, _) => out.push(glyph),
        }
    }
    Ok(out)
}
