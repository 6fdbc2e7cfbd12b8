//! Run segmentation
//!
//! A row (or column) is ink when any pixel across it is not white.
//! Consecutive ink positions form spans. Lines come from row spans,
//! characters from column spans within a line.

use crate::error::{RecogError, RecogResult};
use glyphscan_core::{PixelGrid, Span};
use tracing::trace;

/// Axis along which runs are collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// One position per row
    Rows,
    /// One position per column
    Columns,
}

/// Collect the maximal runs of ink positions along `axis`.
///
/// # Errors
///
/// Returns [`RecogError::NoContent`] if no position along the axis has
/// ink.
pub fn find_spans(grid: &PixelGrid, axis: Axis) -> RecogResult<Vec<Span>> {
    let count = match axis {
        Axis::Rows => grid.height(),
        Axis::Columns => grid.width(),
    };
    let has_ink = |pos| match axis {
        Axis::Rows => grid.row_has_ink(pos),
        Axis::Columns => grid.column_has_ink(pos),
    };

    let mut spans = Vec::new();
    let mut start = None;
    for pos in 0..count {
        match (has_ink(pos), start) {
            (true, None) => start = Some(pos),
            (false, Some(s)) => {
                spans.push(Span::new(s, pos));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push(Span::new(s, count));
    }

    if spans.is_empty() {
        let what = match axis {
            Axis::Rows => "no ink rows",
            Axis::Columns => "no ink columns",
        };
        return Err(RecogError::NoContent(what.to_string()));
    }
    Ok(spans)
}

/// Fold short spans into the span that follows them.
///
/// A span's height for this test is `len - 1`. A span whose height is
/// below half the mean height is absorbed by its successor: the merged
/// span starts where the short one started. The last span is never
/// absorbed and keeps its true end.
pub fn merge_small_spans(spans: &[Span]) -> Vec<Span> {
    if spans.is_empty() {
        return Vec::new();
    }
    let height = |s: &Span| f64::from(s.len().saturating_sub(1));
    let mean = spans.iter().map(height).sum::<f64>() / spans.len() as f64;

    let mut merged = Vec::with_capacity(spans.len());
    let mut start = spans[0].start;
    let last = spans.len() - 1;
    for (i, span) in spans.iter().enumerate() {
        if i < last && height(span) < mean / 2.0 {
            continue;
        }
        merged.push(Span::new(start, span.end));
        if let Some(next) = spans.get(i + 1) {
            start = next.start;
        }
    }
    merged
}

/// Row spans of the text lines in `page`.
///
/// # Errors
///
/// Returns [`RecogError::NoContent`] for a page without ink.
pub fn line_spans(page: &PixelGrid, merge_small: bool) -> RecogResult<Vec<Span>> {
    let spans = find_spans(page, Axis::Rows)?;
    if merge_small {
        let merged = merge_small_spans(&spans);
        trace!(raw = spans.len(), merged = merged.len(), "line spans");
        Ok(merged)
    } else {
        Ok(spans)
    }
}

/// Crop `page` into one full-width grid per text line.
///
/// # Errors
///
/// Returns [`RecogError::NoContent`] for a page without ink.
pub fn split_lines(page: &PixelGrid, merge_small: bool) -> RecogResult<Vec<PixelGrid>> {
    line_spans(page, merge_small)?
        .into_iter()
        .map(|span| Ok(page.crop_rows(span)?))
        .collect()
}

/// Crop a line into one full-height grid per column span.
///
/// # Errors
///
/// Returns [`RecogError::NoContent`] for a line without ink.
pub fn split_chars(line: &PixelGrid) -> RecogResult<Vec<PixelGrid>> {
    find_spans(line, Axis::Columns)?
        .into_iter()
        .map(|span| Ok(line.crop_cols(span)?))
        .collect()
}
