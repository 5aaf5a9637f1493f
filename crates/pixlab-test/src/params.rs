//! Regression test parameters and operations

use pixlab_core::PixelBuffer;

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, a running
/// comparison index, and the failures recorded so far. All comparisons are
/// in-memory; there are no golden files.
pub struct RegParams {
    /// Name of the test (e.g., "convolve")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Compare two pixel buffers for exact equality
    ///
    /// # Returns
    ///
    /// `true` if the buffers are identical, `false` otherwise.
    pub fn compare_buffers(&mut self, buf1: &PixelBuffer, buf2: &PixelBuffer) -> bool {
        self.index += 1;

        if buf1.width() != buf2.width()
            || buf1.height() != buf2.height()
            || buf1.format() != buf2.format()
        {
            let msg = format!(
                "Failure in {}_reg: buffer comparison for index {} - dimension mismatch",
                self.test_name, self.index
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        for y in 0..buf1.height() {
            for x in 0..buf1.width() {
                if buf1.rgba(x, y) != buf2.rgba(x, y) {
                    let msg = format!(
                        "Failure in {}_reg: buffer comparison for index {} - pixel mismatch at ({}, {})",
                        self.test_name, self.index, x, y
                    );
                    eprintln!("{}", msg);
                    self.failures.push(msg);
                    self.success = false;
                    return false;
                }
            }
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
