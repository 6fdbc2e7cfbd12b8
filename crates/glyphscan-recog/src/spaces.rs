//! Space inference
//!
//! Word gaps are found statistically: the white run before each glyph is
//! compared to the mean of all such runs on the line.

use crate::error::RecogResult;
use crate::segment::{Axis, find_spans};
use glyphscan_core::{GlyphImage, PixelGrid, Span};

/// A gap counts as a word break when it exceeds the mean gap by this
/// ratio.
pub const SPACE_GAP_RATIO: f64 = 1.25;

/// Flag, for each span, whether a space precedes it.
///
/// The gap before span 0 is its start; the gap before span `i` is the
/// white run `start_i - end_{i-1}`. Span 0 is never flagged, and a mean
/// gap of zero flags nothing.
pub fn space_before(spans: &[Span]) -> Vec<bool> {
    if spans.is_empty() {
        return Vec::new();
    }
    let gaps: Vec<f64> = spans
        .iter()
        .enumerate()
        .map(|(i, span)| match i {
            0 => f64::from(span.start),
            _ => f64::from(span.start.saturating_sub(spans[i - 1].end)),
        })
        .collect();
    let mean = gaps.iter().sum::<f64>() / gaps.len() as f64;
    if mean <= 0.0 {
        return vec![false; spans.len()];
    }
    gaps.iter()
        .enumerate()
        .map(|(i, gap)| i > 0 && gap / mean > SPACE_GAP_RATIO)
        .collect()
}

/// Interleave [`GlyphImage::Space`] markers into the glyphs of `line`.
///
/// `chars` are the column crops of `line` in order.
///
/// # Errors
///
/// Returns [`crate::RecogError::NoContent`] for a line without ink.
pub fn add_spaces(line: &PixelGrid, chars: Vec<PixelGrid>) -> RecogResult<Vec<GlyphImage>> {
    let spans = find_spans(line, Axis::Columns)?;
    let flags = space_before(&spans);

    let mut glyphs = Vec::with_capacity(chars.len() * 2);
    for (i, grid) in chars.into_iter().enumerate() {
        if flags.get(i).copied().unwrap_or(false) {
            glyphs.push(GlyphImage::Space);
        }
        glyphs.push(GlyphImage::Pixels(grid));
    }
    Ok(glyphs)
}
