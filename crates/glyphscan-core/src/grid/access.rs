//! Pixel access functions
//!
//! Getting and setting individual pixels. Out-of-bounds reads return
//! `None` (or `false` for the signed-coordinate probes) rather than
//! panicking.

use super::{PixelGrid, Rgb};
use crate::error::{Error, Result};

impl PixelGrid {
    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Get a pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Rgb {
        self.data[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgb) -> Result<()> {
        if x >= self.width {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width as usize,
            });
        }
        if y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height as usize,
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = px;
        Ok(())
    }

    /// Set a pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, px: Rgb) {
        let idx = self.index(x, y);
        self.data[idx] = px;
    }

    /// True if (x, y) lies inside the grid and is pure black.
    ///
    /// Signed coordinates let callers probe neighbors without
    /// pre-checking the edges.
    #[inline]
    pub fn is_black_at(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return false;
        }
        self.get_pixel_unchecked(x as u32, y as u32).is_black()
    }
}
