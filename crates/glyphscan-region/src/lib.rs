//! glyphscan-region - Outline analysis for glyph recognition
//!
//! This crate provides the shape analysis used by outline matching:
//!
//! - **Outline tracing** ([`outline`]) - boundary detection, greedy
//!   nearest-neighbor chaining, and selection of the dominant outlines
//! - **Hole classification** ([`hole`]) - where a glyph's inner outline
//!   sits relative to the midline
//!
//! # Example
//!
//! ```
//! use glyphscan_core::{PixelGrid, Rgb};
//! use glyphscan_region::{HoleCategory, classify_hole, extract_outlines};
//!
//! let block = PixelGrid::new(10, 10, Rgb::BLACK).unwrap();
//! let outlines = extract_outlines(&block).unwrap();
//! assert_eq!(outlines.len(), 1);
//! assert_eq!(outlines[0].len(), 36);
//! assert_eq!(classify_hole(&outlines), HoleCategory::None);
//! ```

pub mod error;
pub mod hole;
pub mod outline;

pub use error::{RegionError, RegionResult};
pub use hole::{HOLE_MIDLINE, HoleCategory, classify_hole};
pub use outline::{
    CHAIN_OFFSETS, MAX_SAMPLES, NORMALIZED_SIZE, Outline, Point, boundary_points, chain_paths,
    extract_outlines, sample_count, select_outlines,
};
