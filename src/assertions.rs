//! Assertion helpers for test bodies.
//!
//! Each helper returns `Err(TestFailure::Assertion)` instead of panicking, so
//! bodies chain them with `?`:
//!
//! ```rust
//! use verity::assertions::{assert_eq, assert_true};
//! use verity::{TestContext, TestFailure};
//!
//! fn body(_: &mut TestContext) -> Result<(), TestFailure> {
//!     assert_true(!"abc".is_empty())?;
//!     assert_eq(4, 2 + 2)
//! }
//! # assert!(body(&mut TestContext::new("doc")).is_ok());
//! ```

use std::fmt::Debug;

use crate::diagnostics::TestFailure;

pub type Check = Result<(), TestFailure>;

/// Fails unless `condition` is true.
pub fn assert_true(condition: bool) -> Check {
    if condition {
        Ok(())
    } else {
        Err(TestFailure::mismatch("expected condition to be true", "true", "false"))
    }
}

/// Fails unless `condition` is false.
pub fn assert_false(condition: bool) -> Check {
    if condition {
        Err(TestFailure::mismatch("expected condition to be false", "false", "true"))
    } else {
        Ok(())
    }
}

/// Fails unless `expected == actual`.
pub fn assert_eq<T: PartialEq + Debug>(expected: T, actual: T) -> Check {
    if expected == actual {
        return Ok(());
    }
    Err(TestFailure::mismatch(
        "values are not equal",
        format!("{:#?}", expected),
        format!("{:#?}", actual),
    ))
}

/// Fails when `unexpected == actual`.
pub fn assert_ne<T: PartialEq + Debug>(unexpected: T, actual: T) -> Check {
    if unexpected != actual {
        return Ok(());
    }
    Err(TestFailure::assertion(format!(
        "values are equal: {:?}",
        actual
    )))
}

/// Fails with `message` when `value` is `None`, otherwise yields the contents.
pub fn assert_some<T>(value: Option<T>, message: &str) -> Result<T, TestFailure> {
    value.ok_or_else(|| TestFailure::assertion(message))
}

/// Explicitly fails the test with `message`.
pub fn fail(message: impl Into<String>) -> Check {
    Err(TestFailure::assertion(message))
}
