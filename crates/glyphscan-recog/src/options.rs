//! Recognition configuration
//!
//! Everything that selects or tunes pipeline behavior lives here and is
//! validated before any pipeline stage runs.

use crate::error::{RecogError, RecogResult};
use glyphscan_transform::UPSCALE_FACTOR;
use std::fmt;
use std::str::FromStr;

/// Labels of the reference alphabet image, in reading order.
pub const DEFAULT_ALPHABET: [char; 54] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L',
    'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '.', ',',
];

/// Character emitted for a glyph that could not be matched.
pub const DEFAULT_PLACEHOLDER: char = '?';

/// Feature extraction and matching strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecogMethod {
    /// 5×5 grid of black-pixel densities, squared-difference distance
    #[default]
    Squares,
    /// Sampled outlines grouped by hole category, point-wise distance
    Outline,
}

impl RecogMethod {
    /// Identifier accepted by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            RecogMethod::Squares => "squares",
            RecogMethod::Outline => "outline",
        }
    }
}

impl fmt::Display for RecogMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecogMethod {
    type Err = RecogError;

    fn from_str(s: &str) -> RecogResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "squares" => Ok(RecogMethod::Squares),
            "outline" => Ok(RecogMethod::Outline),
            _ => Err(RecogError::UnknownMethod(s.to_string())),
        }
    }
}

/// Options for text recognition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecogOptions {
    /// Matching strategy (default: squares)
    pub method: RecogMethod,
    /// Character substituted for glyphs that fail to match (default: '?')
    pub placeholder: char,
    /// Block replication applied to the page before segmentation (default: 3)
    pub upscale_factor: u32,
    /// Fold short row runs into the following line (default: true)
    pub merge_small_lines: bool,
}

impl Default for RecogOptions {
    fn default() -> Self {
        Self {
            method: RecogMethod::default(),
            placeholder: DEFAULT_PLACEHOLDER,
            upscale_factor: UPSCALE_FACTOR,
            merge_small_lines: true,
        }
    }
}

impl RecogOptions {
    /// Set the matching strategy
    pub fn with_method(mut self, method: RecogMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the placeholder character
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set the page upscale factor
    pub fn with_upscale_factor(mut self, factor: u32) -> Self {
        self.upscale_factor = factor;
        self
    }

    /// Enable or disable small line merging
    pub fn with_merge_small_lines(mut self, merge: bool) -> Self {
        self.merge_small_lines = merge;
        self
    }

    /// Check option values that do not depend on a library.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] if the upscale factor is 0.
    pub fn validate(&self) -> RecogResult<()> {
        if self.upscale_factor == 0 {
            return Err(RecogError::InvalidParameter(
                "upscale_factor must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
