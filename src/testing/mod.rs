//! # Test Results & Reporting
//!
//! Result records, pass/fail counters, line-per-test logging, and the
//! aggregate run report in text and serializable form.

use serde::Serialize;

use crate::history::RequestRecord;

/// Result of a single named test, immutable once recorded.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    pub name: String,
    pub success: bool,
    pub details: String,
}

/// Ordered result log plus the run counters.
///
/// Both counters move only inside `record`, so `tests_passed <= tests_run`
/// holds at all times.
#[derive(Debug, Default)]
pub struct TestLog {
    tests_run: usize,
    tests_passed: usize,
    results: Vec<TestResult>,
}

impl TestLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one outcome: bump the counters, append the result, print the
    /// line, and hand the flag back so callers can chain on it.
    pub fn record(&mut self, name: &str, success: bool, details: &str) -> bool {
        self.tests_run += 1;
        if success {
            self.tests_passed += 1;
        }

        let marker = if success { "PASS" } else { "FAIL" };
        if details.is_empty() {
            println!("{marker} - {name}");
        } else {
            println!("{marker} - {name} | {details}");
        }

        self.results.push(TestResult {
            name: name.to_string(),
            success,
            details: details.to_string(),
        });
        success
    }

    pub fn tests_run(&self) -> usize {
        self.tests_run
    }

    pub fn tests_passed(&self) -> usize {
        self.tests_passed
    }

    /// Results in execution order.
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn all_passed(&self) -> bool {
        self.tests_passed == self.tests_run
    }
}

/// Aggregate report for one full run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub results: Vec<TestResult>,
    pub requests: Vec<RequestRecord>,
}

impl RunReport {
    /// Human-readable summary block printed after a completed run.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&"=".repeat(60));
        out.push('\n');
        out.push_str(&format!("FINAL RESULTS: {}/{} tests passed\n", self.passed, self.total));

        if self.failed == 0 {
            out.push_str("All tests passed!\n");
        } else {
            out.push_str(&format!("{} tests failed\n", self.failed));
            out.push_str("\nFailed tests:\n");
            for result in self.results.iter().filter(|result| !result.success) {
                out.push_str(&format!("  - {}: {}\n", result.name, result.details));
            }
        }
        out
    }
}
