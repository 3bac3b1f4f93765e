//! Error types for the harness.
//!
//! Two families live here:
//!
//! - [`TestFailure`]: why a single test body failed. These never escape the
//!   runner; they are folded into a failed [`TestResult`](crate::TestResult).
//! - [`HarnessError`]: problems with the harness itself (bad registration,
//!   an unwritable report stream). These surface at the binary boundary as a
//!   `miette` report.

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Type-safe classification of a failed test, mirroring [`TestFailure`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// An expected condition was false, or the body failed explicitly.
    Assertion,
    /// Any other abnormal termination of the body (a panic).
    Fault,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Assertion => "assertion",
            FailureKind::Fault => "fault",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The reason a test body did not complete successfully.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum TestFailure {
    #[error("{message}")]
    #[diagnostic(code(verity::assertion))]
    Assertion {
        message: String,
        expected: Option<String>,
        actual: Option<String>,
    },

    #[error("{message}")]
    #[diagnostic(
        code(verity::fault),
        help("the test body panicked instead of returning a failure")
    )]
    Fault { message: String },
}

impl TestFailure {
    /// A plain assertion failure carrying only a message.
    pub fn assertion(message: impl Into<String>) -> Self {
        TestFailure::Assertion {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// An assertion failure that records both sides of a comparison.
    pub fn mismatch(
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        TestFailure::Assertion {
            message: message.into(),
            expected: Some(expected.into()),
            actual: Some(actual.into()),
        }
    }

    pub fn fault(message: impl Into<String>) -> Self {
        TestFailure::Fault {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            TestFailure::Assertion { .. } => FailureKind::Assertion,
            TestFailure::Fault { .. } => FailureKind::Fault,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            TestFailure::Assertion { message, .. } | TestFailure::Fault { message } => message,
        }
    }
}

/// Errors raised by the harness rather than by a test body.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    #[error("test names must not be empty")]
    #[diagnostic(
        code(verity::registry::empty_name),
        help("give every registered test a unique, non-empty name")
    )]
    EmptyName,

    #[error("a test named `{name}` is already registered")]
    #[diagnostic(
        code(verity::registry::duplicate),
        help("test names identify results in the report and must be unique")
    )]
    DuplicateTest { name: String },

    #[error("failed to write the test report")]
    #[diagnostic(code(verity::report::io))]
    Io(#[from] std::io::Error),

    #[error("failed to serialize the test report")]
    #[diagnostic(code(verity::report::json))]
    Json(#[from] serde_json::Error),
}
