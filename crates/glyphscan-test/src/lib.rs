//! glyphscan-test - Regression test framework for glyphscan
//!
//! This crate provides the harness the `tests/*_reg.rs` suites run on,
//! plus ASCII-art fixtures so no binary test images need to be checked in.
//!
//! Two modes are supported:
//!
//! - **Compare**: Compare computed values against expectations
//! - **Display**: Compare, and also dump intermediate grids as PNG
//!
//! # Usage
//!
//! ```ignore
//! use glyphscan_test::RegParams;
//!
//! let mut rp = RegParams::new("segment");
//! rp.compare_values(3.0, spans.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{compose_line, glyph_from_art, stack_lines};
pub use params::{RegParams, RegTestMode};

use std::fs;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // glyphscan-test is at crates/glyphscan-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Create (or empty) a per-test scratch directory under regout.
pub fn scratch_dir(name: &str) -> TestResult<String> {
    let dir = format!("{}/{}", regout_dir(), name);
    if fs::metadata(&dir).is_ok() {
        fs::remove_dir_all(&dir)?;
    }
    fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
