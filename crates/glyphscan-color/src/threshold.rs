//! Binary thresholding
//!
//! A pixel is classified by the sum of its three channels: sums below
//! the threshold become pure black, everything else pure white. The
//! output of [`binarize`] therefore contains only [`Rgb::BLACK`] and
//! [`Rgb::WHITE`], and binarizing it again changes nothing.

use glyphscan_core::{PixelGrid, Rgb};

/// Channel-sum threshold used by [`binarize`].
///
/// `465 = 3 * 155`: a gray of 155 or brighter counts as background.
pub const BINARIZE_THRESHOLD: u32 = 465;

/// Binarize with [`BINARIZE_THRESHOLD`].
///
/// # Examples
///
/// ```
/// use glyphscan_core::{PixelGrid, Rgb};
/// use glyphscan_color::binarize;
///
/// let grid = PixelGrid::from_rows(&[[Rgb::new(100, 200, 164), Rgb::new(100, 200, 165)]]).unwrap();
/// let bin = binarize(&grid);
/// assert_eq!(bin.row(0), &[Rgb::BLACK, Rgb::WHITE]);
/// ```
pub fn binarize(grid: &PixelGrid) -> PixelGrid {
    grid.map(|px| {
        if px.channel_sum() < BINARIZE_THRESHOLD {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    })
}
