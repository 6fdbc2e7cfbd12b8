//! glyphscan - Heuristic text recognition for Rust
//!
//! Converts an image of printed text into a string with no trained
//! model: the page is binarized, cut into lines and glyphs, and each
//! glyph is matched to the nearest entry of a small template library
//! cut from a reference alphabet image.
//!
//! # Overview
//!
//! - Image I/O (PNG, JPEG, PNM)
//! - Binarization and block scaling
//! - Outline tracing and hole classification
//! - Segmentation, space inference and template matching
//!
//! # Example
//!
//! ```
//! use glyphscan::recog::{RecogMethod, TemplateLibrary, recognize};
//! use glyphscan::{PixelGrid, Rgb};
//!
//! let bar = PixelGrid::new(1, 5, Rgb::BLACK).unwrap();
//! let library = TemplateLibrary::from_glyphs(RecogMethod::Squares, [('l', bar)]).unwrap();
//!
//! let mut page = PixelGrid::new(9, 7, Rgb::WHITE).unwrap();
//! for y in 1..6 {
//!     page.set_pixel(2, y, Rgb::BLACK).unwrap();
//!     page.set_pixel(4, y, Rgb::BLACK).unwrap();
//! }
//! assert_eq!(recognize(&page, &library, "squares").unwrap(), "ll");
//! ```

// Re-export core types (primary data structures used everywhere)
pub use glyphscan_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use glyphscan_color as color;
pub use glyphscan_io as io;
pub use glyphscan_recog as recog;
pub use glyphscan_region as region;
pub use glyphscan_transform as transform;
