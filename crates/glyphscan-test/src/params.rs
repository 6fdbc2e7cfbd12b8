//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use glyphscan_core::PixelGrid;
use std::fs;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare computed values (default)
    #[default]
    Compare,
    /// Compare and also write intermediate grids as PNG for inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, the index of
/// the current check, the mode, and every recorded failure. Checks keep
/// running after a failure so one run reports all mismatches.
pub struct RegParams {
    /// Name of the test (e.g., "segment")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "segment")
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare two floating-point values
    ///
    /// # Returns
    ///
    /// `true` if values match within `delta`, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two strings for exact equality
    pub fn compare_strings(&mut self, expected: &str, actual: &str) -> bool {
        self.index += 1;
        if expected != actual {
            self.fail(format!(
                "string comparison for index {}\nexpected = {:?}\nactual   = {:?}",
                self.index, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two grids for exact equality
    ///
    /// Reports the first differing pixel on mismatch.
    pub fn compare_grids(&mut self, expected: &PixelGrid, actual: &PixelGrid) -> bool {
        self.index += 1;

        if expected.width() != actual.width() || expected.height() != actual.height() {
            self.fail(format!(
                "grid comparison for index {} - dimension mismatch: {}x{} vs {}x{}",
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            ));
            return false;
        }

        for y in 0..expected.height() {
            for x in 0..expected.width() {
                if expected.get_pixel(x, y) != actual.get_pixel(x, y) {
                    self.fail(format!(
                        "grid comparison for index {} - pixel mismatch at ({}, {})",
                        self.index, x, y
                    ));
                    return false;
                }
            }
        }

        true
    }

    /// In display mode, write `grid` to the regout directory as PNG.
    ///
    /// Does nothing in compare mode.
    pub fn write_grid(&mut self, grid: &PixelGrid) -> TestResult<()> {
        self.index += 1;
        if !self.display() {
            return Ok(());
        }

        let dir = regout_dir();
        fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
            path: dir.clone(),
            message: e.to_string(),
        })?;
        let path = format!("{}/{}.{:02}.png", dir, self.test_name, self.index);
        glyphscan_io::write_image(grid, &path).map_err(|e| TestError::ImageWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;
        eprintln!("  wrote {}", path);
        Ok(())
    }

    /// Finish the test and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed.
    pub fn cleanup(&self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg ({} checks)", self.test_name, self.index);
        } else {
            eprintln!(
                "FAILURE: {}_reg ({} of {} checks failed)",
                self.test_name,
                self.failures.len(),
                self.index
            );
        }
        self.success
    }

    /// Recorded failure messages
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    fn fail(&mut self, detail: String) {
        let msg = format!("Failure in {}_reg: {}", self.test_name, detail);
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphscan_core::Rgb;

    #[test]
    fn test_compare_values_records_failures() {
        let mut rp = RegParams::new("params_self");
        assert!(rp.compare_values(1.0, 1.05, 0.1));
        assert!(!rp.compare_values(1.0, 2.0, 0.1));
        assert_eq!(rp.index(), 2);
        assert_eq!(rp.failures().len(), 1);
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_grids() {
        let mut rp = RegParams::new("params_grids");
        let a = PixelGrid::new(2, 2, Rgb::WHITE).unwrap();
        let mut b = a.clone();
        assert!(rp.compare_grids(&a, &b));
        b.set_pixel(1, 1, Rgb::BLACK).unwrap();
        assert!(!rp.compare_grids(&a, &b));
        assert!(rp.failures()[0].contains("(1, 1)"));
    }
}
