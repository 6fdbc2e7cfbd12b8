//! glyphscan core - Basic data structures for glyph recognition
//!
//! This crate provides the value types shared by every stage of the
//! recognizer:
//!
//! - [`PixelGrid`] / [`Rgb`] - Rectangular RGB raster
//! - [`Span`] - Half-open row or column range
//! - [`GlyphImage`] - A segmented glyph or an inferred space

pub mod error;
pub mod glyph;
pub mod grid;
pub mod span;

pub use error::{Error, Result};
pub use glyph::GlyphImage;
pub use grid::{PixelGrid, Rgb};
pub use span::Span;
