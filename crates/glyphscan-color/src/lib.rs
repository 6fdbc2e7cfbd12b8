//! glyphscan-color - Color processing for glyph recognition
//!
//! Everything downstream of decoding works on two colors only. This
//! crate provides the reduction:
//!
//! - **Thresholding** ([`threshold`]): channel-sum binarization

pub mod threshold;

pub use threshold::{BINARIZE_THRESHOLD, binarize};
