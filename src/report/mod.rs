//! Result reporting.
//!
//! A [`Reporter`] consumes the results of a run, in discovery order, and
//! returns the [`Summary`] counts. Rendering is a side effect of the reporter
//! in use:
//!
//! - [`ConsoleReporter`]: one colored line per test plus its captured output,
//!   then a summary line such as `3 total, 2 passed, 0 failed, 1 skipped`.
//! - [`JsonReporter`]: a single JSON document with every result and the summary.

use std::fmt;

use serde::Serialize;

use crate::diagnostics::HarnessError;
use crate::outcome::{Outcome, TestResult};

mod console;
mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Renders a completed run.
pub trait Reporter {
    /// Emits every result and returns the aggregated counts.
    fn report(&mut self, results: &[TestResult]) -> Result<Summary, HarnessError>;
}

/// Aggregated counts for a run. `total == passed + failed + skipped` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn from_results(results: &[TestResult]) -> Self {
        results.iter().fold(Summary::default(), |mut summary, result| {
            summary.record(result.outcome);
            summary
        })
    }

    pub fn record(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed => self.failed += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// True when every non-skipped test passed.
    pub fn is_success(&self) -> bool {
        !self.has_failures()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} total, {} passed, {} failed, {} skipped",
            self.total, self.passed, self.failed, self.skipped
        )
    }
}
