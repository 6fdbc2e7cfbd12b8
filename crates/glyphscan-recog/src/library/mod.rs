//! Template library
//!
//! A library is an ordered list of labeled feature sets, built once and
//! then only read. It is produced in two steps:
//!
//! 1. [`save_alphabet`] segments a reference alphabet image into one
//!    glyph per label and persists them in a [`TemplateStore`].
//! 2. [`TemplateLibrary::load`] reads the glyphs back and extracts the
//!    features of one [`RecogMethod`].
//!
//! [`TemplateLibrary::from_glyphs`] skips storage entirely.
//!
//! Templates are upscaled at load time just like pages are at
//! recognition time, and a library remembers its factor so a
//! [`Recognizer`](crate::Recognizer) can refuse pages prepared at a
//! different one.

mod store;

pub use store::{DirectoryStore, MemoryStore, TemplateStore, template_file_name};

use crate::error::{RecogError, RecogResult};
use crate::features::{Features, extract_features};
use crate::options::RecogMethod;
use crate::segment::{split_chars, split_lines};
use crate::strip::strip;
use glyphscan_color::binarize;
use glyphscan_core::PixelGrid;
use glyphscan_transform::{UPSCALE_FACTOR, upscale};
use tracing::debug;

/// One labeled reference glyph
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateEntry {
    pub label: char,
    pub features: Features,
}

/// Ordered, immutable set of templates for one method
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateLibrary {
    method: RecogMethod,
    upscale_factor: u32,
    entries: Vec<TemplateEntry>,
}

impl TemplateLibrary {
    /// Build a library from labeled template glyphs, upscaled by
    /// [`UPSCALE_FACTOR`].
    ///
    /// Every glyph goes through the same preparation as a stored
    /// template; see [`prepare_template`].
    ///
    /// # Errors
    ///
    /// Returns an error if a glyph is blank or cannot be traced.
    pub fn from_glyphs<I>(method: RecogMethod, glyphs: I) -> RecogResult<Self>
    where
        I: IntoIterator<Item = (char, PixelGrid)>,
    {
        Self::from_glyphs_scaled(method, UPSCALE_FACTOR, glyphs)
    }

    /// Build a library whose templates are upscaled by `factor`.
    ///
    /// Pair it with [`RecogOptions::with_upscale_factor`] set to the same
    /// factor.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] for a factor of 0, or
    /// any error [`TemplateLibrary::from_glyphs`] can return.
    ///
    /// [`RecogOptions::with_upscale_factor`]: crate::RecogOptions::with_upscale_factor
    pub fn from_glyphs_scaled<I>(method: RecogMethod, factor: u32, glyphs: I) -> RecogResult<Self>
    where
        I: IntoIterator<Item = (char, PixelGrid)>,
    {
        if factor == 0 {
            return Err(RecogError::InvalidParameter(
                "template upscale factor must be at least 1".to_string(),
            ));
        }
        let entries = glyphs
            .into_iter()
            .map(|(label, glyph)| {
                Ok(TemplateEntry {
                    label,
                    features: prepare_template(&glyph, method, factor)?,
                })
            })
            .collect::<RecogResult<Vec<_>>>()?;
        debug!(%method, factor, templates = entries.len(), "built template library");
        Ok(Self {
            method,
            upscale_factor: factor,
            entries,
        })
    }

    /// Load the glyph of every label in `labels` from `store`.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::MissingTemplate`] for a label the store does
    /// not hold, or any preparation error.
    pub fn load<S: TemplateStore + ?Sized>(
        store: &S,
        labels: &[char],
        method: RecogMethod,
    ) -> RecogResult<Self> {
        Self::load_scaled(store, labels, method, UPSCALE_FACTOR)
    }

    /// [`TemplateLibrary::load`] with templates upscaled by `factor`.
    pub fn load_scaled<S: TemplateStore + ?Sized>(
        store: &S,
        labels: &[char],
        method: RecogMethod,
        factor: u32,
    ) -> RecogResult<Self> {
        let glyphs = labels
            .iter()
            .map(|&label| Ok((label, store.load(label)?)))
            .collect::<RecogResult<Vec<_>>>()?;
        Self::from_glyphs_scaled(method, factor, glyphs)
    }

    pub fn method(&self) -> RecogMethod {
        self.method
    }

    /// Factor the templates were upscaled by
    pub fn upscale_factor(&self) -> u32 {
        self.upscale_factor
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in library order
    pub fn labels(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|e| e.label)
    }
}

/// Turn a stored template glyph into features.
///
/// The glyph is upscaled by `factor`, binarized and stripped, mirroring
/// how glyphs are cut from a page.
///
/// # Errors
///
/// Returns [`RecogError::NoContent`] for a blank glyph, or a tracing
/// failure in outline mode.
pub fn prepare_template(
    glyph: &PixelGrid,
    method: RecogMethod,
    factor: u32,
) -> RecogResult<Features> {
    let prepared = strip(&binarize(&upscale(glyph, factor)?))?;
    extract_features(&prepared, method)
}

/// Cut a reference alphabet image into glyphs and pair them with labels.
///
/// The image is upscaled by [`UPSCALE_FACTOR`] and binarized, split into
/// lines (merging small ones) and columns, and every glyph is stripped.
/// Spaces are not inferred and glued glyphs are not split.
///
/// This fixes the resolution templates are stored at. The recognition
/// factor is applied on top when they are loaded, see
/// [`TemplateLibrary::load_scaled`].
///
/// # Errors
///
/// Returns [`RecogError::GlyphCountMismatch`] unless the image holds
/// exactly one glyph per label, and [`RecogError::NoContent`] for a blank
/// image.
pub fn extract_alphabet_glyphs(
    alphabet: &PixelGrid,
    labels: &[char],
) -> RecogResult<Vec<(char, PixelGrid)>> {
    let page = binarize(&upscale(alphabet, UPSCALE_FACTOR)?);

    let mut glyphs = Vec::with_capacity(labels.len());
    for line in split_lines(&page, true)? {
        for glyph in split_chars(&line)? {
            glyphs.push(strip(&glyph)?);
        }
    }
    if glyphs.len() != labels.len() {
        return Err(RecogError::GlyphCountMismatch {
            expected: labels.len(),
            found: glyphs.len(),
        });
    }
    Ok(labels.iter().copied().zip(glyphs).collect())
}

/// Cut a reference alphabet image into glyphs and save each one.
///
/// Returns the number of glyphs saved.
///
/// # Errors
///
/// See [`extract_alphabet_glyphs`]; store failures are propagated.
pub fn save_alphabet<S: TemplateStore + ?Sized>(
    alphabet: &PixelGrid,
    labels: &[char],
    store: &mut S,
) -> RecogResult<usize> {
    let glyphs = extract_alphabet_glyphs(alphabet, labels)?;
    for (label, glyph) in &glyphs {
        store.save(*label, glyph)?;
    }
    debug!(saved = glyphs.len(), "saved alphabet templates");
    Ok(glyphs.len())
}
