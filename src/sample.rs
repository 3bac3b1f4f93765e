//! The sample suite shipped with the `verity` binary.
//!
//! Three cases: one trivially passing, one that passes while producing
//! output, and one disabled case whose body would fail if it ever ran.

use crate::assertions::{assert_true, fail};
use crate::context::TestContext;
use crate::diagnostics::{HarnessError, TestFailure};
use crate::registry::Registry;

/// Builds the sample registry in its fixed discovery order.
pub fn registry() -> Result<Registry, HarnessError> {
    let mut registry = Registry::new();
    registry
        .test("testSuccess", test_success)?
        .test("testWithOutput", test_with_output)?
        .disabled("testFailure", None, test_failure)?;
    Ok(registry)
}

fn test_success(_: &mut TestContext) -> Result<(), TestFailure> {
    assert_true(true)
}

fn test_with_output(ctx: &mut TestContext) -> Result<(), TestFailure> {
    ctx.println("hello world!");
    let scratch: Vec<String> = Vec::new();
    assert_true(scratch.is_empty())
}

fn test_failure(_: &mut TestContext) -> Result<(), TestFailure> {
    fail("Expected failure")
}
