//! Template image storage
//!
//! Templates are persisted as one image per label. The key for a label is
//! `char_<label>.png` for lowercase and non-alphabetic labels and
//! `char__<label>.png` for uppercase ones, so 'a' and 'A' never collide
//! on a case-insensitive filesystem.

use crate::error::{RecogError, RecogResult};
use glyphscan_core::PixelGrid;
use glyphscan_io::{ImageFormat, IoError, read_image, write_image_format};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Label-addressed storage of template glyph images
pub trait TemplateStore {
    /// Fetch the glyph stored for `label`.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::MissingTemplate`] when nothing is stored for
    /// `label`.
    fn load(&self, label: char) -> RecogResult<PixelGrid>;

    /// Store `glyph` under `label`, replacing any previous glyph.
    fn save(&mut self, label: char, glyph: &PixelGrid) -> RecogResult<()>;
}

/// File name a label is stored under.
///
/// # Examples
///
/// ```
/// use glyphscan_recog::template_file_name;
///
/// assert_eq!(template_file_name('a'), "char_a.png");
/// assert_eq!(template_file_name('A'), "char__A.png");
/// assert_eq!(template_file_name('.'), "char_..png");
/// ```
pub fn template_file_name(label: char) -> String {
    if label.is_alphabetic() && !label.is_lowercase() {
        format!("char__{label}.png")
    } else {
        format!("char_{label}.png")
    }
}

/// Templates as PNG files in one directory
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the file `label` is stored in.
    pub fn path_for(&self, label: char) -> PathBuf {
        self.root.join(template_file_name(label))
    }
}

impl TemplateStore for DirectoryStore {
    fn load(&self, label: char) -> RecogResult<PixelGrid> {
        let path = self.path_for(label);
        if !path.is_file() {
            return Err(RecogError::MissingTemplate(label));
        }
        trace!(path = %path.display(), "loading template");
        Ok(read_image(&path)?)
    }

    fn save(&mut self, label: char, glyph: &PixelGrid) -> RecogResult<()> {
        std::fs::create_dir_all(&self.root).map_err(IoError::from)?;
        let path = self.path_for(label);
        trace!(path = %path.display(), "saving template");
        write_image_format(glyph, &path, ImageFormat::Png)?;
        Ok(())
    }
}

/// Templates held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    glyphs: HashMap<char, PixelGrid>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl TemplateStore for MemoryStore {
    fn load(&self, label: char) -> RecogResult<PixelGrid> {
        self.glyphs
            .get(&label)
            .cloned()
            .ok_or(RecogError::MissingTemplate(label))
    }

    fn save(&mut self, label: char, glyph: &PixelGrid) -> RecogResult<()> {
        self.glyphs.insert(label, glyph.clone());
        Ok(())
    }
}
