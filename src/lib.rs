//! Verity: a small test-case execution and reporting core.
//!
//! A suite is built by explicit registration into a [`Registry`], executed one
//! case at a time by the [`Runner`], and rendered by a [`Reporter`].
//!
//! ```rust,no_run
//! use verity::assertions::{assert_true, fail};
//! use verity::Registry;
//!
//! let mut registry = Registry::new();
//! registry.test("adds", |_| assert_true(1 + 1 == 2))?;
//! registry.disabled("broken", None, |_| fail("not ready"))?;
//!
//! let _exit = verity::cli::run(&registry);
//! # Ok::<(), verity::HarnessError>(())
//! ```

pub use crate::case::{Status, TestBody, TestCase};
pub use crate::config::{ColorMode, HarnessConfig, OutputFormat};
pub use crate::context::{OutputBuffer, TestContext};
pub use crate::diagnostics::{FailureKind, HarnessError, TestFailure};
pub use crate::outcome::{Outcome, TestResult};
pub use crate::registry::Registry;
pub use crate::report::{ConsoleReporter, JsonReporter, Reporter, Summary};
pub use crate::runner::Runner;

pub mod assertions;
pub mod case;
pub mod cli;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod outcome;
pub mod registry;
pub mod report;
pub mod runner;
pub mod sample;
