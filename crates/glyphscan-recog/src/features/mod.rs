//! Glyph feature extraction
//!
//! Two independent representations, one per [`RecogMethod`]:
//!
//! - [`SquareFeatures`] - black-pixel density over a 5×5 partition
//! - [`OutlineFeatures`] - traced outlines plus hole category
//!
//! Both expect a binarized, stripped glyph.

mod outline;
mod squares;

pub use outline::{OutlineFeatures, outline_distance, outline_features};
pub use squares::{GRID_CELLS, SQUARE_FEATURE_LEN, SquareFeatures, square_features};

use crate::error::RecogResult;
use crate::options::RecogMethod;
use glyphscan_core::PixelGrid;

/// Features of one glyph under one method
#[derive(Debug, Clone, PartialEq)]
pub enum Features {
    Squares(SquareFeatures),
    Outline(OutlineFeatures),
}

impl Features {
    /// The method these features belong to
    pub fn method(&self) -> RecogMethod {
        match self {
            Features::Squares(_) => RecogMethod::Squares,
            Features::Outline(_) => RecogMethod::Outline,
        }
    }
}

/// Extract the features `method` matches on.
///
/// # Errors
///
/// Returns a glyph-level error when the glyph cannot be normalized or
/// traced.
pub fn extract_features(glyph: &PixelGrid, method: RecogMethod) -> RecogResult<Features> {
    match method {
        RecogMethod::Squares => Ok(Features::Squares(square_features(glyph)?)),
        RecogMethod::Outline => Ok(Features::Outline(outline_features(glyph)?)),
    }
}
