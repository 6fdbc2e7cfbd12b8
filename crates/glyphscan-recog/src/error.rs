//! Error types for glyphscan-recog

use crate::options::RecogMethod;
use glyphscan_region::HoleCategory;
use thiserror::Error;

/// Errors that can occur during recognition operations
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glyphscan_core::Error),

    /// Transform library error
    #[error("transform error: {0}")]
    Transform(#[from] glyphscan_transform::TransformError),

    /// Region library error
    #[error("region error: {0}")]
    Region(#[from] glyphscan_region::RegionError),

    /// Image I/O error
    #[error("I/O error: {0}")]
    Io(#[from] glyphscan_io::IoError),

    /// Unrecognized feature/matching strategy identifier
    #[error("unknown recognition method '{0}' (expected 'squares' or 'outline')")]
    UnknownMethod(String),

    /// No content found in image
    #[error("no content found: {0}")]
    NoContent(String),

    /// Outline matching found no template with the glyph's hole category
    #[error("no template has hole category '{hole}'")]
    UnmatchedHoleCategory { hole: HoleCategory },

    /// Library was built for a different method than the one requested
    #[error("template library was built for '{library}' but '{requested}' was requested")]
    MethodMismatch {
        library: RecogMethod,
        requested: RecogMethod,
    },

    /// Library templates and pages are upscaled by different factors
    #[error("template library was upscaled by {library} but pages use {requested}")]
    ScaleMismatch { library: u32, requested: u32 },

    /// Alphabet image and label list disagree on the glyph count
    #[error("alphabet image has {found} glyphs but {expected} labels were given")]
    GlyphCountMismatch { expected: usize, found: usize },

    /// A template store has no glyph for a label
    #[error("no template stored for '{0}'")]
    MissingTemplate(char),

    /// The template library has no entries
    #[error("template library is empty")]
    EmptyLibrary,

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl RecogError {
    /// True for failures confined to a single glyph, which recognition
    /// recovers from by substituting the placeholder character.
    pub fn is_glyph_failure(&self) -> bool {
        matches!(
            self,
            RecogError::NoContent(_)
                | RecogError::UnmatchedHoleCategory { .. }
                | RecogError::Region(glyphscan_region::RegionError::NoContent)
        )
    }
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
