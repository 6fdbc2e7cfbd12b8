//! Nearest-template matching

use crate::error::{RecogError, RecogResult};
use crate::features::{Features, OutlineFeatures, SquareFeatures, outline_distance};
use crate::library::TemplateLibrary;

/// Best template for a glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    /// Label of the winning template
    pub label: char,
    /// Distance to it; lower is closer
    pub score: f64,
}

/// Find the template in `library` nearest to `features`.
///
/// Squares features are compared to every template by squared
/// difference. Outline features are only compared to templates with the
/// same hole category, by summed point distance at the glyph's own sample
/// count. Equal scores resolve to the earlier template.
///
/// # Errors
///
/// - [`RecogError::EmptyLibrary`] if the library has no templates
/// - [`RecogError::MethodMismatch`] if `features` and `library` use
///   different methods
/// - [`RecogError::UnmatchedHoleCategory`] if no outline template shares
///   the glyph's hole category
pub fn best_match(features: &Features, library: &TemplateLibrary) -> RecogResult<MatchResult> {
    if library.is_empty() {
        return Err(RecogError::EmptyLibrary);
    }
    if features.method() != library.method() {
        return Err(RecogError::MethodMismatch {
            library: library.method(),
            requested: features.method(),
        });
    }
    match features {
        Features::Squares(probe) => match_squares(probe, library),
        Features::Outline(probe) => match_outline(probe, library),
    }
}

fn match_squares(probe: &SquareFeatures, library: &TemplateLibrary) -> RecogResult<MatchResult> {
    let scored = library.entries().iter().filter_map(|entry| match &entry.features {
        Features::Squares(template) => Some((entry.label, probe.distance(template))),
        Features::Outline(_) => None,
    });
    first_minimum(scored).ok_or(RecogError::EmptyLibrary)
}

fn match_outline(probe: &OutlineFeatures, library: &TemplateLibrary) -> RecogResult<MatchResult> {
    let n = probe.sample_count();
    let sampled = probe.sampled(n);
    let scored = library.entries().iter().filter_map(|entry| match &entry.features {
        Features::Outline(template) if template.hole() == probe.hole() => {
            Some((entry.label, outline_distance(&sampled, template, n)))
        }
        _ => None,
    });
    first_minimum(scored).ok_or(RecogError::UnmatchedHoleCategory { hole: probe.hole() })
}

fn first_minimum<I: Iterator<Item = (char, f64)>>(scored: I) -> Option<MatchResult> {
    let mut best: Option<MatchResult> = None;
    for (label, score) in scored {
        if best.is_none_or(|b| score < b.score) {
            best = Some(MatchResult { label, score });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{SQUARE_FEATURE_LEN, extract_features};
    use crate::library::TemplateEntry;
    use crate::options::RecogMethod;
    use glyphscan_core::{PixelGrid, Rgb};
    use glyphscan_region::{HoleCategory, Outline, Point};

    fn squares(v: f64) -> Features {
        Features::Squares(SquareFeatures::new([v; SQUARE_FEATURE_LEN]))
    }

    fn library_of(glyphs: &[(char, PixelGrid)], method: RecogMethod) -> TemplateLibrary {
        TemplateLibrary::from_glyphs(method, glyphs.iter().cloned()).unwrap()
    }

    fn ring() -> PixelGrid {
        let mut grid = PixelGrid::new(5, 5, Rgb::BLACK).unwrap();
        for y in 1..4 {
            for x in 1..4 {
                grid.set_pixel(x, y, Rgb::WHITE).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_first_minimum_prefers_earlier() {
        let scored = [('a', 2.0), ('b', 1.0), ('c', 1.0), ('d', 3.0)];
        let best = first_minimum(scored.into_iter()).unwrap();
        assert_eq!(best.label, 'b');
        assert_eq!(best.score, 1.0);
        assert!(first_minimum(std::iter::empty()).is_none());
    }

    #[test]
    fn test_squares_self_match_scores_zero() {
        let bar = PixelGrid::new(1, 5, Rgb::BLACK).unwrap();
        let lib = library_of(&[('o', ring()), ('l', bar)], RecogMethod::Squares);
        for entry in lib.entries() {
            let result = best_match(&entry.features, &lib).unwrap();
            assert_eq!(result.label, entry.label);
            assert_eq!(result.score, 0.0);
        }
    }

    #[test]
    fn test_squares_nearest() {
        let bar = PixelGrid::new(1, 5, Rgb::BLACK).unwrap();
        let lib = library_of(&[('o', ring()), ('l', bar)], RecogMethod::Squares);
        // A solid block is every cell black, like the bar
        let block = PixelGrid::new(9, 9, Rgb::BLACK).unwrap();
        let probe = extract_features(&block, RecogMethod::Squares).unwrap();
        assert_eq!(best_match(&probe, &lib).unwrap().label, 'l');
    }

    #[test]
    fn test_outline_filters_by_hole() {
        let bar = PixelGrid::new(2, 6, Rgb::BLACK).unwrap();
        let lib = library_of(&[('l', bar), ('o', ring())], RecogMethod::Outline);
        let probe = extract_features(&ring(), RecogMethod::Outline).unwrap();
        let result = best_match(&probe, &lib).unwrap();
        assert_eq!(result.label, 'o');
    }

    #[test]
    fn test_outline_unmatched_hole() {
        let bar = PixelGrid::new(2, 6, Rgb::BLACK).unwrap();
        let lib = library_of(&[('l', bar)], RecogMethod::Outline);
        let probe = Features::Outline(OutlineFeatures::new(
            HoleCategory::UpperHalf,
            vec![Outline::new(vec![Point::new(1, 1)]); 2],
        ));
        let err = best_match(&probe, &lib).unwrap_err();
        assert!(matches!(
            err,
            RecogError::UnmatchedHoleCategory {
                hole: HoleCategory::UpperHalf
            }
        ));
        assert!(err.is_glyph_failure());
    }

    #[test]
    fn test_method_mismatch_and_empty() {
        let bar = PixelGrid::new(1, 5, Rgb::BLACK).unwrap();
        let lib = library_of(&[('l', bar)], RecogMethod::Outline);
        assert!(matches!(
            best_match(&squares(0.5), &lib),
            Err(RecogError::MethodMismatch { .. })
        ));
        let empty = library_of(&[], RecogMethod::Squares);
        assert!(matches!(
            best_match(&squares(0.5), &empty),
            Err(RecogError::EmptyLibrary)
        ));
    }

    #[test]
    fn test_entries_are_public_for_inspection() {
        let entry = TemplateEntry {
            label: 'x',
            features: squares(1.0),
        };
        assert_eq!(entry.features.method(), RecogMethod::Squares);
    }
}
