//! Image scaling operations
//!
//! Upscaling replaces every pixel with an N×N block of itself. Resizing
//! to a target size first upscales until the grid covers the target,
//! then collapses each apportioned source rectangle into one pixel by
//! majority vote between pure black and everything else.

use crate::{TransformError, TransformResult};
use glyphscan_core::{PixelGrid, Rgb};

/// Replication factor used throughout the recognition pipeline.
pub const UPSCALE_FACTOR: u32 = 3;

/// Partition `n` into `d` contiguous runs of near-equal length.
///
/// Returns `d + 1` boundaries from `0` to `n`. Every run is `n / d` or
/// `n / d + 1` long, and the longer runs come last. `d == 0` yields
/// just `[0]`.
///
/// # Examples
///
/// ```
/// use glyphscan_transform::apportion;
///
/// assert_eq!(apportion(10, 3), vec![0, 3, 6, 10]);
/// ```
pub fn apportion(n: u32, d: u32) -> Vec<u32> {
    if d == 0 {
        return vec![0];
    }
    let small = n / d;
    let remainder = n % d;
    // After d - remainder short runs, the rest fits exactly in long runs
    let switch = d - remainder;

    let mut bounds = Vec::with_capacity(d as usize + 1);
    let mut pos = 0;
    bounds.push(pos);
    for i in 0..d {
        pos += if i < switch { small } else { small + 1 };
        bounds.push(pos);
    }
    bounds
}

/// Replace every pixel with a `factor`×`factor` block of itself.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] if `factor` is 0.
pub fn upscale(grid: &PixelGrid, factor: u32) -> TransformResult<PixelGrid> {
    if factor == 0 {
        return Err(TransformError::InvalidScaleFactor(factor));
    }
    let width = grid.width() * factor;
    let height = grid.height() * factor;
    let f = factor as usize;

    let mut data = Vec::with_capacity(width as usize * height as usize);
    for row in grid.rows() {
        let start = data.len();
        for &px in row {
            data.extend(std::iter::repeat_n(px, f));
        }
        let end = data.len();
        for _ in 1..f {
            data.extend_from_within(start..end);
        }
    }

    Ok(PixelGrid::from_raw(width, height, data)?)
}

/// Resize to exactly `height` rows of `width` columns.
///
/// While the grid is smaller than the target on either axis it is
/// upscaled by [`UPSCALE_FACTOR`]. Each output pixel is then pure black
/// if its source rectangle holds at least as many pure black pixels as
/// other pixels, and pure white otherwise.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] for a zero target.
pub fn resize(grid: &PixelGrid, height: u32, width: u32) -> TransformResult<PixelGrid> {
    if height == 0 || width == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "resize target {}x{} must be non-zero",
            width, height
        )));
    }

    let mut src = grid.clone();
    while src.height() < height || src.width() < width {
        src = upscale(&src, UPSCALE_FACTOR)?;
    }

    let heights = apportion(src.height(), height);
    let widths = apportion(src.width(), width);

    let mut data = Vec::with_capacity(width as usize * height as usize);
    for rows in heights.windows(2) {
        for cols in widths.windows(2) {
            let mut black = 0u32;
            let mut other = 0u32;
            for y in rows[0]..rows[1] {
                for x in cols[0]..cols[1] {
                    if src.get_pixel_unchecked(x, y).is_black() {
                        black += 1;
                    } else {
                        other += 1;
                    }
                }
            }
            data.push(if black >= other { Rgb::BLACK } else { Rgb::WHITE });
        }
    }

    Ok(PixelGrid::from_raw(width, height, data)?)
}
