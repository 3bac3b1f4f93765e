//! Sequential test execution.
//!
//! The runner turns every discovered [`TestCase`] into exactly one
//! [`TestResult`]:
//!
//! 1. **Skip check**: disabled cases, and cases excluded by the name filter,
//!    become `Skipped` without their body being called.
//! 2. **Execution**: the body runs against a fresh [`TestContext`] inside
//!    `catch_unwind`, so a panic ends only that test.
//! 3. **Classification**: `Ok` is `Passed`; a returned [`TestFailure`] is an
//!    assertion failure; a panic is a fault. Both are `Failed`.
//!
//! Captured output is kept in every case, including after a panic.

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::time::Instant;

use tracing::{debug, trace};

use crate::case::TestCase;
use crate::config::HarnessConfig;
use crate::context::TestContext;
use crate::diagnostics::TestFailure;
use crate::outcome::TestResult;
use crate::registry::Registry;

const FILTERED_OUT: &str = "filtered out";

/// Executes test cases one at a time.
#[derive(Debug, Default)]
pub struct Runner {
    config: HarnessConfig,
}

impl Runner {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Runs every registered case in discovery order.
    pub fn run_all(&self, registry: &Registry) -> Vec<TestResult> {
        registry.discover().iter().map(|case| self.run(case)).collect()
    }

    /// Runs a single case.
    pub fn run(&self, case: &TestCase) -> TestResult {
        if let Some(reason) = self.skip_reason(case) {
            debug!(name = case.name(), reason, "skipping test");
            return TestResult::skipped(case.name(), reason);
        }

        debug!(name = case.name(), "running test");
        let mut ctx = TestContext::new(case.name());
        let started = Instant::now();
        let result =
            with_quiet_panics(|| panic::catch_unwind(AssertUnwindSafe(|| case.call(&mut ctx))));
        let duration = started.elapsed();
        let output = ctx.into_output();

        let result = match result {
            Ok(Ok(())) => TestResult::passed(case.name(), output, duration),
            Ok(Err(failure)) => TestResult::failed(case.name(), failure, output, duration),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                trace!(name = case.name(), %message, "test body panicked");
                TestResult::failed(case.name(), TestFailure::fault(message), output, duration)
            }
        };
        debug!(
            name = case.name(),
            outcome = %result.outcome,
            elapsed_ms = duration.as_millis() as u64,
            "test finished"
        );
        result
    }

    fn skip_reason<'a>(&self, case: &'a TestCase) -> Option<&'a str> {
        if let Some(reason) = case.status().skip_reason() {
            return Some(reason);
        }
        if !self.config.matches(case.name()) {
            return Some(FILTERED_OUT);
        }
        None
    }
}

// ============================================================================
// PANIC HANDLING
// ============================================================================

thread_local! {
    static IN_TEST_BODY: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Installs, once per process, a hook that stays silent for panics raised
/// inside a test body and defers to the previously installed hook otherwise.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !IN_TEST_BODY.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// Runs `f` with panic messages silenced on the current thread only. The
/// panic payload is still recovered through `catch_unwind`; `f` itself must
/// not unwind.
fn with_quiet_panics<R>(f: impl FnOnce() -> R) -> R {
    install_quiet_hook();
    let was_inside = IN_TEST_BODY.with(|flag| flag.replace(true));
    let result = f();
    IN_TEST_BODY.with(|flag| flag.set(was_inside));
    result
}

/// Best-effort description of a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "test panicked with a non-string payload".to_string()
    }
}
