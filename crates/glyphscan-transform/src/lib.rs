//! glyphscan-transform - Geometric transformations for glyphscan
//!
//! This crate provides the two scaling operations the recognizer needs:
//!
//! - Integer block replication ([`upscale`])
//! - Majority-vote resizing to exact target dimensions ([`resize`]),
//!   built on the [`apportion`] axis partition

mod error;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use scale::{UPSCALE_FACTOR, apportion, resize, upscale};
