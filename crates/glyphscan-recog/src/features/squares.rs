//! Grid-density features

use crate::error::RecogResult;
use glyphscan_core::PixelGrid;
use glyphscan_transform::{apportion, resize};

/// Cells per axis of the density grid.
pub const GRID_CELLS: u32 = 5;

/// Number of values in a [`SquareFeatures`] vector.
pub const SQUARE_FEATURE_LEN: usize = (GRID_CELLS * GRID_CELLS) as usize;

/// Black-pixel fraction of each cell of a 5×5 partition, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct SquareFeatures([f64; SQUARE_FEATURE_LEN]);

impl SquareFeatures {
    /// Wrap precomputed cell values.
    pub fn new(values: [f64; SQUARE_FEATURE_LEN]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64; SQUARE_FEATURE_LEN] {
        &self.0
    }

    /// Sum of squared differences to `other`.
    pub fn distance(&self, other: &SquareFeatures) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }
}

/// Compute the density features of a binarized glyph.
///
/// The glyph is resized to five times its size so both axes divide
/// evenly into [`GRID_CELLS`] bands. Cell `(i, j)` covers row band `i`
/// and column band `i`, not `j`: every group of five values repeats the
/// diagonal cell of its row band. Stored templates depend on this layout,
/// so it is kept.
///
/// # Errors
///
/// Propagates resize failures.
pub fn square_features(glyph: &PixelGrid) -> RecogResult<SquareFeatures> {
    let big = resize(
        glyph,
        glyph.height() * GRID_CELLS,
        glyph.width() * GRID_CELLS,
    )?;
    let heights = apportion(big.height(), GRID_CELLS);
    let widths = apportion(big.width(), GRID_CELLS);

    let mut values = [0.0; SQUARE_FEATURE_LEN];
    for i in 0..GRID_CELLS as usize {
        let fraction = band_fraction(&big, heights[i], heights[i + 1], widths[i], widths[i + 1]);
        for j in 0..GRID_CELLS as usize {
            values[i * GRID_CELLS as usize + j] = fraction;
        }
    }
    Ok(SquareFeatures(values))
}

fn band_fraction(grid: &PixelGrid, y0: u32, y1: u32, x0: u32, x1: u32) -> f64 {
    let mut black = 0u32;
    let mut total = 0u32;
    for y in y0..y1 {
        for x in x0..x1 {
            if grid.get_pixel_unchecked(x, y).is_black() {
                black += 1;
            }
            total += 1;
        }
    }
    if total == 0 {
        0.0
    } else {
        f64::from(black) / f64::from(total)
    }
}
