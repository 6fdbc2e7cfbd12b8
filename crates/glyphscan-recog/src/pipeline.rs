//! Page recognition
//!
//! # Pipeline
//!
//! 1. Upscale the page and binarize it
//! 2. Cut it into lines, merging small row runs into the next line
//! 3. Per line: cut columns, insert spaces, split glued glyphs
//! 4. Per glyph: a space becomes `' '`; otherwise strip it, drop it as
//!    noise if it is under a tenth of the line's mean glyph area, and
//!    match it against the library
//!
//! Lines are joined with `'\n'`. A glyph that fails on its own (no
//! traceable outline, no template with its hole category) becomes the
//! placeholder character and is recorded in the report.

use crate::error::{RecogError, RecogResult};
use crate::features::extract_features;
use crate::library::TemplateLibrary;
use crate::matcher::best_match;
use crate::options::{RecogMethod, RecogOptions};
use crate::segment::{split_chars, split_lines};
use crate::spaces::add_spaces;
use crate::split::split_double_chars;
use crate::strip::strip;
use glyphscan_color::binarize;
use glyphscan_core::{GlyphImage, PixelGrid};
use glyphscan_transform::upscale;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Glyphs below this fraction of the line's mean area are noise.
pub const NOISE_AREA_DIVISOR: f64 = 10.0;

/// Upscale a page by `factor`, then binarize it.
///
/// # Errors
///
/// Returns an error if `factor` is 0.
pub fn prepare_page(image: &PixelGrid, factor: u32) -> RecogResult<PixelGrid> {
    Ok(binarize(&upscale(image, factor)?))
}

/// A glyph replaced by the placeholder
#[derive(Debug)]
pub struct GlyphFailure {
    /// Zero-based line index
    pub line: usize,
    /// Zero-based index among the line's glyphs, spaces included
    pub glyph: usize,
    /// What went wrong
    pub error: RecogError,
}

/// Recognized text with per-glyph diagnostics
#[derive(Debug, Default)]
pub struct RecognitionReport {
    /// Text of each line, top to bottom
    pub lines: Vec<String>,
    /// Glyphs that fell back to the placeholder
    pub failures: Vec<GlyphFailure>,
}

impl RecognitionReport {
    /// Lines joined with `'\n'`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// True if every glyph was matched or dropped as noise.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Reusable recognizer bound to one template library
///
/// The library is shared read-only, so one `Recognizer` (or clones of
/// it) can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Recognizer {
    library: Arc<TemplateLibrary>,
    options: RecogOptions,
}

impl Recognizer {
    /// Create a recognizer, checking the options against the library.
    ///
    /// # Errors
    ///
    /// - [`RecogError::InvalidParameter`] for an upscale factor of 0
    /// - [`RecogError::EmptyLibrary`] for a library without templates
    /// - [`RecogError::MethodMismatch`] if the library was built for a
    ///   different method than `options.method`
    /// - [`RecogError::ScaleMismatch`] if the library was upscaled by a
    ///   different factor than `options.upscale_factor`
    pub fn new(library: Arc<TemplateLibrary>, options: RecogOptions) -> RecogResult<Self> {
        validate(&library, &options)?;
        Ok(Self { library, options })
    }

    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    pub fn options(&self) -> &RecogOptions {
        &self.options
    }

    /// Recognize the text of `image`.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::NoContent`] if the page or one of its lines
    /// has no ink. Per-glyph failures do not abort; see
    /// [`Recognizer::recognize_detailed`].
    pub fn recognize(&self, image: &PixelGrid) -> RecogResult<String> {
        Ok(self.recognize_detailed(image)?.text())
    }

    /// Recognize the text of `image`, reporting failed glyphs.
    pub fn recognize_detailed(&self, image: &PixelGrid) -> RecogResult<RecognitionReport> {
        run(image, &self.library, &self.options)
    }

    /// Decode the image at `path` and recognize its text.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::Io`] if the file cannot be decoded.
    pub fn recognize_path<P: AsRef<Path>>(&self, path: P) -> RecogResult<String> {
        let image = glyphscan_io::read_image(path)?;
        self.recognize(&image)
    }
}

/// Recognize the text of `image` with a method given by name.
///
/// `method` is parsed before anything else runs.
///
/// # Errors
///
/// Returns [`RecogError::UnknownMethod`] for a name other than
/// `"squares"` or `"outline"`, plus everything
/// [`Recognizer::recognize`] can return.
///
/// # Examples
///
/// ```
/// use glyphscan_core::{PixelGrid, Rgb};
/// use glyphscan_recog::{RecogError, RecogMethod, TemplateLibrary, recognize};
///
/// let bar = PixelGrid::new(1, 4, Rgb::BLACK).unwrap();
/// let library = TemplateLibrary::from_glyphs(RecogMethod::Squares, [('l', bar)]).unwrap();
/// let page = PixelGrid::new(8, 8, Rgb::WHITE).unwrap();
///
/// let err = recognize(&page, &library, "pixels").unwrap_err();
/// assert!(matches!(err, RecogError::UnknownMethod(_)));
/// ```
pub fn recognize(image: &PixelGrid, library: &TemplateLibrary, method: &str) -> RecogResult<String> {
    let method: RecogMethod = method.parse()?;
    recognize_with(image, library, &RecogOptions::default().with_method(method))
}

/// Recognize the text of `image` with explicit options.
///
/// # Errors
///
/// See [`Recognizer::new`] and [`Recognizer::recognize`].
pub fn recognize_with(
    image: &PixelGrid,
    library: &TemplateLibrary,
    options: &RecogOptions,
) -> RecogResult<String> {
    validate(library, options)?;
    Ok(run(image, library, options)?.text())
}

fn validate(library: &TemplateLibrary, options: &RecogOptions) -> RecogResult<()> {
    options.validate()?;
    if library.is_empty() {
        return Err(RecogError::EmptyLibrary);
    }
    if library.method() != options.method {
        return Err(RecogError::MethodMismatch {
            library: library.method(),
            requested: options.method,
        });
    }
    if library.upscale_factor() != options.upscale_factor {
        return Err(RecogError::ScaleMismatch {
            library: library.upscale_factor(),
            requested: options.upscale_factor,
        });
    }
    Ok(())
}

fn run(
    image: &PixelGrid,
    library: &TemplateLibrary,
    options: &RecogOptions,
) -> RecogResult<RecognitionReport> {
    let page = prepare_page(image, options.upscale_factor)?;
    let lines = split_lines(&page, options.merge_small_lines)?;
    debug!(
        width = page.width(),
        height = page.height(),
        lines = lines.len(),
        "segmented page"
    );

    let mut report = RecognitionReport::default();
    for (line_index, line) in lines.iter().enumerate() {
        let chars = split_chars(line)?;
        let glyphs = split_double_chars(add_spaces(line, chars)?)?;
        let mean_area = mean_glyph_area(&glyphs);

        let mut text = String::with_capacity(glyphs.len());
        for (glyph_index, glyph) in glyphs.iter().enumerate() {
            match recognize_glyph(glyph, mean_area, library, options.method) {
                Ok(Some(c)) => text.push(c),
                Ok(None) => {}
                Err(err) if err.is_glyph_failure() => {
                    warn!(
                        line = line_index,
                        glyph = glyph_index,
                        error = %err,
                        "glyph replaced by placeholder"
                    );
                    text.push(options.placeholder);
                    report.failures.push(GlyphFailure {
                        line: line_index,
                        glyph: glyph_index,
                        error: err,
                    });
                }
                Err(err) => return Err(err),
            }
        }
        debug!(line = line_index, glyphs = glyphs.len(), text = %text, "recognized line");
        report.lines.push(text);
    }
    Ok(report)
}

/// Mean area of the non-space glyphs, before stripping.
fn mean_glyph_area(glyphs: &[GlyphImage]) -> f64 {
    let areas: Vec<f64> = glyphs
        .iter()
        .filter_map(GlyphImage::pixels)
        .map(|g| g.area() as f64)
        .collect();
    if areas.is_empty() {
        0.0
    } else {
        areas.iter().sum::<f64>() / areas.len() as f64
    }
}

/// `Some(c)` for a recognized glyph or space, `None` for noise.
fn recognize_glyph(
    glyph: &GlyphImage,
    mean_area: f64,
    library: &TemplateLibrary,
    method: RecogMethod,
) -> RecogResult<Option<char>> {
    let grid = match glyph {
        GlyphImage::Space => return Ok(Some(' ')),
        GlyphImage::Pixels(grid) => strip(grid)?,
    };
    if (grid.area() as f64) < mean_area / NOISE_AREA_DIVISOR {
        return Ok(None);
    }
    let features = extract_features(&grid, method)?;
    Ok(Some(best_match(&features, library)?.label))
}
