//! Outline and hole features

use crate::error::RecogResult;
use glyphscan_core::PixelGrid;
use glyphscan_region::{
    HoleCategory, NORMALIZED_SIZE, Outline, Point, classify_hole, extract_outlines, sample_count,
};
use glyphscan_transform::resize;

/// Traced outlines of a glyph normalized to [`NORMALIZED_SIZE`] square,
/// with the category of its hole.
///
/// Outlines are kept at full length. They are sampled when compared, so
/// a template can be sampled at whatever count the unknown glyph needs.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineFeatures {
    hole: HoleCategory,
    outlines: Vec<Outline>,
}

impl OutlineFeatures {
    pub fn new(hole: HoleCategory, outlines: Vec<Outline>) -> Self {
        Self { hole, outlines }
    }

    pub fn hole(&self) -> HoleCategory {
        self.hole
    }

    pub fn outlines(&self) -> &[Outline] {
        &self.outlines
    }

    /// Common sample count for this glyph's outlines.
    pub fn sample_count(&self) -> usize {
        sample_count(&self.outlines)
    }

    /// Every outline sampled down to `n` points.
    pub fn sampled(&self, n: usize) -> Vec<Vec<Point>> {
        self.outlines.iter().map(|o| o.sample(n)).collect()
    }
}

/// Normalize a binarized glyph and trace its outline features.
///
/// # Errors
///
/// Returns [`glyphscan_region::RegionError::NoContent`] (wrapped) when
/// the normalized glyph has no black pixels.
pub fn outline_features(glyph: &PixelGrid) -> RecogResult<OutlineFeatures> {
    let normalized = resize(glyph, NORMALIZED_SIZE, NORMALIZED_SIZE)?;
    let outlines = extract_outlines(&normalized)?;
    let hole = classify_hole(&outlines);
    Ok(OutlineFeatures { hole, outlines })
}

/// Summed point-to-point distance between `probe` outlines and the
/// outlines of `template` sampled at `n`.
///
/// Outlines pair up by position, and points by index within each pair;
/// anything past the shorter side of a pair is ignored.
pub fn outline_distance(probe: &[Vec<Point>], template: &OutlineFeatures, n: usize) -> f64 {
    probe
        .iter()
        .zip(template.outlines())
        .map(|(points, outline)| {
            points
                .iter()
                .zip(outline.sample(n))
                .map(|(a, b)| a.distance(b))
                .sum::<f64>()
        })
        .sum()
}
