//! Test case definitions.

use std::fmt;

use serde::Serialize;

use crate::context::TestContext;
use crate::diagnostics::TestFailure;

/// A test body: runs against a fresh [`TestContext`] and either completes or
/// reports a [`TestFailure`].
pub type TestBody = Box<dyn Fn(&mut TestContext) -> Result<(), TestFailure>>;

/// Whether a registered test takes part in a run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Status {
    #[default]
    Enabled,
    Disabled { reason: Option<String> },
}

impl Status {
    pub fn disabled(reason: Option<&str>) -> Self {
        Status::Disabled {
            reason: reason.map(str::to_string),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Status::Enabled)
    }

    /// Text shown for a skipped test: the disable reason, or `"disabled"`.
    pub fn skip_reason(&self) -> Option<&str> {
        match self {
            Status::Enabled => None,
            Status::Disabled { reason } => Some(reason.as_deref().unwrap_or("disabled")),
        }
    }
}

/// A named, independently executable unit of verification.
///
/// Immutable once built; the registry hands out shared references only.
pub struct TestCase {
    name: String,
    status: Status,
    body: TestBody,
}

impl TestCase {
    pub fn new<F>(name: impl Into<String>, status: Status, body: F) -> Self
    where
        F: Fn(&mut TestContext) -> Result<(), TestFailure> + 'static,
    {
        Self {
            name: name.into(),
            status,
            body: Box::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_enabled(&self) -> bool {
        self.status.is_enabled()
    }

    /// Runs the body directly. No output capture, no fault isolation; that
    /// is the runner's job.
    pub fn call(&self, ctx: &mut TestContext) -> Result<(), TestFailure> {
        (self.body)(ctx)
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
