//! Clipping grids to spans
//!
//! Row and column crops driven by [`Span`]s, plus the two-way column
//! split used to separate glued glyphs.

use super::PixelGrid;
use crate::error::{Error, Result};
use crate::span::Span;

impl PixelGrid {
    /// Keep only the rows in `rows` (all columns).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for an empty span and
    /// [`Error::IndexOutOfBounds`] when the span exceeds the height.
    pub fn crop_rows(&self, rows: Span) -> Result<PixelGrid> {
        self.check_span(rows, self.height)?;
        let start = self.index(0, rows.start);
        let end = self.index(0, rows.end);
        PixelGrid::from_raw(self.width, rows.len(), self.data[start..end].to_vec())
    }

    /// Keep only the columns in `cols` (all rows).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for an empty span and
    /// [`Error::IndexOutOfBounds`] when the span exceeds the width.
    pub fn crop_cols(&self, cols: Span) -> Result<PixelGrid> {
        self.check_span(cols, self.width)?;
        let mut data = Vec::with_capacity(cols.len() as usize * self.height as usize);
        for row in self.rows() {
            data.extend_from_slice(&row[cols.start as usize..cols.end as usize]);
        }
        PixelGrid::from_raw(cols.len(), self.height, data)
    }

    /// Split into columns `[0, seam]` and `[seam + 1, width)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] unless `seam + 1 < width`, so
    /// both halves are non-empty.
    pub fn split_at_column(&self, seam: u32) -> Result<(PixelGrid, PixelGrid)> {
        if seam + 1 >= self.width {
            return Err(Error::IndexOutOfBounds {
                index: seam as usize + 1,
                len: self.width as usize,
            });
        }
        let left = self.crop_cols(Span::new(0, seam + 1))?;
        let right = self.crop_cols(Span::new(seam + 1, self.width))?;
        Ok((left, right))
    }

    fn check_span(&self, span: Span, limit: u32) -> Result<()> {
        if span.is_empty() {
            return Err(Error::InvalidParameter(format!(
                "empty span {}..{}",
                span.start, span.end
            )));
        }
        if span.end > limit {
            return Err(Error::IndexOutOfBounds {
                index: span.end as usize,
                len: limit as usize,
            });
        }
        Ok(())
    }
}
