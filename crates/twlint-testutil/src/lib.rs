//! Test utilities for twlint.
//!
//! Parses and runs the lint fixture format used under `tests/lint/*.test`:
//! a source snippet per case and the diagnostics it must produce, one per
//! line, in source order. See [`cases`] for the format.

pub mod cases;

use std::fmt;

/// Outcome of one fixture case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    Fail { expected: String, actual: String },
    /// The case could not be run, e.g. a malformed `# option:` line.
    Error { message: String },
}

impl TestResult {
    pub fn is_pass(&self) -> bool {
        matches!(self, TestResult::Pass)
    }
}

/// A case that did not pass.
#[derive(Debug, Clone)]
pub struct TestFailure {
    pub name: String,
    pub line: usize,
    pub result: TestResult,
}

/// Tally of a fixture run.
#[derive(Debug, Default)]
pub struct TestSummary {
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub failures: Vec<TestFailure>,
}

impl TestSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: impl Into<String>, line: usize, result: TestResult) {
        match result {
            TestResult::Pass => {
                self.passed += 1;
                return;
            }
            TestResult::Fail { .. } => self.failed += 1,
            TestResult::Error { .. } => self.errors += 1,
        }
        self.failures.push(TestFailure {
            name: name.into(),
            line,
            result,
        });
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errors
    }

    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for TestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} cases: {} passed, {} failed, {} errors",
            self.total(),
            self.passed,
            self.failed,
            self.errors
        )?;
        for failure in &self.failures {
            writeln!(f, "\n--- {} (line {})", failure.name, failure.line)?;
            match &failure.result {
                TestResult::Fail { expected, actual } => {
                    writeln!(f, "expected:\n{expected}")?;
                    writeln!(f, "actual:\n{actual}")?;
                }
                TestResult::Error { message } => writeln!(f, "error: {message}")?,
                TestResult::Pass => {}
            }
        }
        Ok(())
    }
}
