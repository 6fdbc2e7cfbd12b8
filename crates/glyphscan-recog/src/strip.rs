//! Vertical trimming of glyph crops

use crate::error::RecogResult;
use crate::segment::{Axis, find_spans};
use glyphscan_core::{PixelGrid, Span};

/// Drop the blank rows above and below the ink of `glyph`.
///
/// Columns are left untouched, and blank rows between ink rows are kept.
///
/// # Errors
///
/// Returns [`crate::RecogError::NoContent`] if `glyph` has no ink.
pub fn strip(glyph: &PixelGrid) -> RecogResult<PixelGrid> {
    let spans = find_spans(glyph, Axis::Rows)?;
    // find_spans never returns an empty list
    let first = spans[0].start;
    let last = spans[spans.len() - 1].end;
    if first == 0 && last == glyph.height() {
        return Ok(glyph.clone());
    }
    Ok(glyph.crop_rows(Span::new(first, last))?)
}
