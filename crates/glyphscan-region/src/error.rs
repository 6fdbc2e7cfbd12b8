//! Error types for glyphscan-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glyphscan_core::Error),

    /// The glyph has no black pixels to trace
    #[error("no outline found: glyph has no black pixels")]
    NoContent,
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
