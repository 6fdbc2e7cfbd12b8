//! PixelGrid - The main raster container
//!
//! `PixelGrid` is a rectangular, non-empty raster of RGB triples. Every
//! transform in the pipeline takes a grid by reference and returns a new
//! one, so grids compare with `==` and can be checked for idempotence
//! directly.
//!
//! # Pixel layout
//!
//! - Pixels are stored row-major in a single `Vec<Rgb>`
//! - `(x, y)` addresses column `x` of row `y`
//! - Width and height are always at least 1

mod access;
mod clip;

use crate::error::{Error, Result};

/// A single RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black `(0, 0, 0)`
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white `(255, 255, 255)`, the background color
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a pixel from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Sum of the three channels (0..=765).
    #[inline]
    pub fn channel_sum(self) -> u32 {
        u32::from(self.r) + u32::from(self.g) + u32::from(self.b)
    }

    /// True for pure black only.
    #[inline]
    pub fn is_black(self) -> bool {
        self == Self::BLACK
    }

    /// True for anything that is not pure white.
    #[inline]
    pub fn is_ink(self) -> bool {
        self != Self::WHITE
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(px: Rgb) -> Self {
        (px.r, px.g, px.b)
    }
}

/// Rectangular raster of RGB pixels
///
/// # Examples
///
/// ```
/// use glyphscan_core::{PixelGrid, Rgb};
///
/// let grid = PixelGrid::new(4, 3, Rgb::WHITE).unwrap();
/// assert_eq!(grid.width(), 4);
/// assert_eq!(grid.height(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<Rgb>,
}

impl PixelGrid {
    /// Create a grid of the given size filled with `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, fill: Rgb) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![fill; width as usize * height as usize],
        })
    }

    /// Build a grid from a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the size is zero or the
    /// buffer length does not equal `width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<Rgb>) -> Result<Self> {
        let expected = (width as usize).checked_mul(height as usize);
        if width == 0 || height == 0 || expected != Some(data.len()) {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid from a sequence of rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for no rows or empty rows and
    /// [`Error::RaggedRows`] when the rows differ in length.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[Rgb]>,
    {
        let first = rows.first().map_or(0, |r| r.as_ref().len());
        if first == 0 {
            return Err(Error::InvalidDimension {
                width: first as u32,
                height: rows.len() as u32,
            });
        }
        let mut data = Vec::with_capacity(first * rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != first {
                return Err(Error::RaggedRows {
                    row: i,
                    expected: first,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_raw(first as u32, rows.len() as u32, data)
    }

    /// Grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `width * height`
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Raw row-major pixel data.
    #[inline]
    pub fn data(&self) -> &[Rgb] {
        &self.data
    }

    /// Pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgb] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Iterate over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Apply `f` to every pixel, producing a new grid of the same size.
    pub fn map<F>(&self, f: F) -> PixelGrid
    where
        F: Fn(Rgb) -> Rgb,
    {
        PixelGrid {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&px| f(px)).collect(),
        }
    }

    /// Number of pure black pixels.
    pub fn count_black(&self) -> usize {
        self.data.iter().filter(|px| px.is_black()).count()
    }

    /// True if row `y` holds at least one ink pixel.
    pub fn row_has_ink(&self, y: u32) -> bool {
        self.row(y).iter().any(|px| px.is_ink())
    }

    /// True if column `x` holds at least one ink pixel.
    pub fn column_has_ink(&self, x: u32) -> bool {
        (0..self.height).any(|y| self.get_pixel_unchecked(x, y).is_ink())
    }

    /// True if any pixel is ink.
    pub fn has_ink(&self) -> bool {
        self.data.iter().any(|px| px.is_ink())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
