//! The test registry.
//!
//! Tests are registered explicitly, in the order they should run and be
//! reported. Discovery is just a view over that list: it never fails and never
//! reorders.
//!
//! ## Usage
//! ```rust
//! use verity::assertions::{assert_true, fail};
//! use verity::Registry;
//!
//! let mut registry = Registry::new();
//! registry.test("testSuccess", |_| assert_true(true)).unwrap();
//! registry
//!     .disabled("testFailure", None, |_| fail("Expected failure"))
//!     .unwrap();
//! let names: Vec<_> = registry.discover().iter().map(|c| c.name()).collect();
//! assert_eq!(names, ["testSuccess", "testFailure"]);
//! ```

use std::collections::HashSet;

use tracing::debug;

use crate::case::{Status, TestCase};
use crate::context::TestContext;
use crate::diagnostics::{HarnessError, TestFailure};

/// Ordered collection of registered test cases.
#[derive(Debug, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
    names: HashSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fully built case.
    ///
    /// Fails if the name is empty or already taken; the registry is left
    /// unchanged in that case.
    pub fn register(&mut self, case: TestCase) -> Result<&mut Self, HarnessError> {
        if case.name().is_empty() {
            return Err(HarnessError::EmptyName);
        }
        if !self.names.insert(case.name().to_string()) {
            return Err(HarnessError::DuplicateTest {
                name: case.name().to_string(),
            });
        }
        debug!(name = case.name(), enabled = case.is_enabled(), "registered test");
        self.cases.push(case);
        Ok(self)
    }

    /// Registers an enabled test.
    pub fn test<F>(&mut self, name: &str, body: F) -> Result<&mut Self, HarnessError>
    where
        F: Fn(&mut TestContext) -> Result<(), TestFailure> + 'static,
    {
        self.register(TestCase::new(name, Status::Enabled, body))
    }

    /// Registers a test whose body must never run.
    pub fn disabled<F>(
        &mut self,
        name: &str,
        reason: Option<&str>,
        body: F,
    ) -> Result<&mut Self, HarnessError>
    where
        F: Fn(&mut TestContext) -> Result<(), TestFailure> + 'static,
    {
        self.register(TestCase::new(name, Status::disabled(reason), body))
    }

    /// All registered cases, in registration order.
    pub fn discover(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn get(&self, name: &str) -> Option<&TestCase> {
        self.cases.iter().find(|case| case.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(TestCase::name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
