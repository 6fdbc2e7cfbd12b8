//! glyphscan-recog - Heuristic text recognition
//!
//! This crate turns a page image into text without any trained model:
//!
//! - **Segmentation**: ink runs along rows (lines) and columns (glyphs)
//! - **Spaces**: word gaps inferred from the gap statistics of a line
//! - **Splitting**: glued glyph pairs separated at an uncrossed column
//! - **Features**: 5×5 density grid, or traced outlines with hole category
//! - **Matching**: nearest template in a [`TemplateLibrary`]
//!
//! # Quick Start
//!
//! ```no_run
//! use glyphscan_recog::{
//!     DEFAULT_ALPHABET, DirectoryStore, RecogMethod, RecogOptions, Recognizer,
//!     TemplateLibrary, save_alphabet,
//! };
//! use std::sync::Arc;
//!
//! // Cut the reference alphabet into templates once
//! let alphabet = glyphscan_io::read_image("alphabet.png").unwrap();
//! let mut store = DirectoryStore::new("templates");
//! save_alphabet(&alphabet, &DEFAULT_ALPHABET, &mut store).unwrap();
//!
//! // Load them for one method and recognize a page
//! let library = TemplateLibrary::load(&store, &DEFAULT_ALPHABET, RecogMethod::Squares).unwrap();
//! let recognizer = Recognizer::new(Arc::new(library), RecogOptions::default()).unwrap();
//! println!("{}", recognizer.recognize_path("page.png").unwrap());
//! ```
//!
//! # Modules
//!
//! - [`segment`]: line and character runs
//! - [`spaces`]: space inference
//! - [`split`]: glued glyph splitting
//! - [`strip`]: vertical trimming
//! - [`features`]: squares and outline features
//! - [`library`]: templates and their storage
//! - [`matcher`]: nearest-template search
//! - [`pipeline`]: end-to-end recognition

mod error;
pub mod features;
pub mod library;
pub mod matcher;
mod options;
pub mod pipeline;
pub mod segment;
pub mod spaces;
pub mod split;
pub mod strip;

pub use error::{RecogError, RecogResult};
pub use options::{DEFAULT_ALPHABET, DEFAULT_PLACEHOLDER, RecogMethod, RecogOptions};

// Re-export commonly used types
pub use features::{Features, OutlineFeatures, SquareFeatures, extract_features};
pub use library::{
    DirectoryStore, MemoryStore, TemplateEntry, TemplateLibrary, TemplateStore,
    extract_alphabet_glyphs, save_alphabet, template_file_name,
};
pub use matcher::{MatchResult, best_match};
pub use pipeline::{
    GlyphFailure, RecognitionReport, Recognizer, prepare_page, recognize, recognize_with,
};
pub use segment::{Axis, find_spans, merge_small_spans, split_chars, split_lines};
pub use spaces::add_spaces;
pub use split::split_double_chars;
pub use strip::strip;

// Re-export core for convenience
pub use glyphscan_core;
