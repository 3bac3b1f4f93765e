//! Per-test results.

use std::time::Duration;

use serde::Serialize;

use crate::diagnostics::{FailureKind, TestFailure};

/// Terminal classification of a test's execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
}

impl Outcome {
    /// Short tag used by the console reporter.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Passed => "PASS",
            Outcome::Failed => "FAIL",
            Outcome::Skipped => "SKIP",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Outcome::Passed => "passed",
            Outcome::Failed => "failed",
            Outcome::Skipped => "skipped",
        };
        f.write_str(text)
    }
}

/// The result of running (or skipping) one test case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    pub name: String,
    pub outcome: Outcome,
    /// Failure message for failed tests, skip reason for skipped ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
    /// Expected/actual pair from a comparison assertion, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<(String, String)>,
    pub duration: Duration,
}

impl TestResult {
    pub fn passed(name: impl Into<String>, output: String, duration: Duration) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::Passed,
            message: None,
            output,
            failure: None,
            comparison: None,
            duration,
        }
    }

    pub fn failed(
        name: impl Into<String>,
        failure: TestFailure,
        output: String,
        duration: Duration,
    ) -> Self {
        let kind = failure.kind();
        let (message, comparison) = match failure {
            TestFailure::Assertion {
                message,
                expected: Some(expected),
                actual: Some(actual),
            } => (message, Some((expected, actual))),
            TestFailure::Assertion { message, .. } | TestFailure::Fault { message } => {
                (message, None)
            }
        };
        Self {
            name: name.into(),
            outcome: Outcome::Failed,
            message: Some(message),
            output,
            failure: Some(kind),
            comparison,
            duration,
        }
    }

    pub fn skipped(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::Skipped,
            message: Some(reason.into()),
            output: String::new(),
            failure: None,
            comparison: None,
            duration: Duration::ZERO,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }

    pub fn is_failed(&self) -> bool {
        self.outcome == Outcome::Failed
    }

    pub fn is_skipped(&self) -> bool {
        self.outcome == Outcome::Skipped
    }
}
