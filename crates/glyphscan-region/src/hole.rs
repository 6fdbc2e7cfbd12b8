//! Hole classification
//!
//! Where a glyph's inner outline sits vertically is a cheap, robust cue:
//! 'b' and 'd' have a low hole, 'P' and 'R' a high one, 'o' and 'D' one
//! spanning the middle. The classification is done in the normalized
//! square space, against its horizontal midline.

use crate::outline::{NORMALIZED_SIZE, Outline};
use std::fmt;

/// Midline of the normalized space.
pub const HOLE_MIDLINE: i32 = (NORMALIZED_SIZE / 2) as i32;

/// Vertical position of a glyph's inner outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HoleCategory {
    /// Only one outline
    #[default]
    None,
    /// Hole lies entirely below the midline
    LowerHalf,
    /// Hole crosses the midline
    Middle,
    /// Hole lies entirely above the midline
    UpperHalf,
}

impl fmt::Display for HoleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HoleCategory::None => "none",
            HoleCategory::LowerHalf => "lower half",
            HoleCategory::Middle => "middle",
            HoleCategory::UpperHalf => "upper half",
        };
        f.write_str(name)
    }
}

/// Classify the second outline of `outlines` against [`HOLE_MIDLINE`].
///
/// Fewer than two outlines is [`HoleCategory::None`]. Otherwise the hole
/// is [`HoleCategory::LowerHalf`] if even its smallest y is past the
/// midline, [`HoleCategory::UpperHalf`] if even its largest y falls short
/// of it, and [`HoleCategory::Middle`] otherwise.
pub fn classify_hole(outlines: &[Outline]) -> HoleCategory {
    let Some(hole) = outlines.get(1) else {
        return HoleCategory::None;
    };
    let (Some(min_y), Some(max_y)) = (hole.min_y(), hole.max_y()) else {
        return HoleCategory::None;
    };

    if min_y > HOLE_MIDLINE {
        HoleCategory::LowerHalf
    } else if max_y < HOLE_MIDLINE {
        HoleCategory::UpperHalf
    } else {
        HoleCategory::Middle
    }
}
