//! Segmented glyph images

use crate::grid::PixelGrid;

/// One slot of a segmented text line: either cropped pixels or an
/// inferred space with no pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphImage {
    /// Cropped glyph pixels
    Pixels(PixelGrid),
    /// Inter-word gap
    Space,
}

impl GlyphImage {
    #[inline]
    pub fn is_space(&self) -> bool {
        matches!(self, GlyphImage::Space)
    }

    /// The pixels, or `None` for a space.
    #[inline]
    pub fn pixels(&self) -> Option<&PixelGrid> {
        match self {
            GlyphImage::Pixels(grid) => Some(grid),
            GlyphImage::Space => None,
        }
    }
}

impl From<PixelGrid> for GlyphImage {
    fn from(grid: PixelGrid) -> Self {
        GlyphImage::Pixels(grid)
    }
}
