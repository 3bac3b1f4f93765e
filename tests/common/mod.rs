//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use termcolor::Buffer;
use verity::{ConsoleReporter, Registry, Reporter, Summary, TestContext, TestFailure, TestResult};

/// Counts how many times a test body was entered.
#[derive(Clone, Default)]
pub struct CallCounter(Rc<Cell<usize>>);

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }

    /// Wraps `body` so every call bumps the counter first.
    pub fn wrap<F>(&self, body: F) -> impl Fn(&mut TestContext) -> Result<(), TestFailure>
    where
        F: Fn(&mut TestContext) -> Result<(), TestFailure>,
    {
        let calls = self.0.clone();
        move |ctx| {
            calls.set(calls.get() + 1);
            body(ctx)
        }
    }
}

/// Registers the three sample-shaped cases, each wrapped in its own counter.
pub fn counted_sample() -> (Registry, [CallCounter; 3]) {
    let counters = [CallCounter::new(), CallCounter::new(), CallCounter::new()];
    let mut registry = Registry::new();
    registry
        .test(
            "testSuccess",
            counters[0].wrap(|_| verity::assertions::assert_true(true)),
        )
        .unwrap()
        .test(
            "testWithOutput",
            counters[1].wrap(|ctx| {
                ctx.println("hello world!");
                Ok(())
            }),
        )
        .unwrap()
        .disabled(
            "testFailure",
            None,
            counters[2].wrap(|_| verity::assertions::fail("Expected failure")),
        )
        .unwrap();
    (registry, counters)
}

/// Renders results through the console reporter without colors.
pub fn render_human(results: &[TestResult]) -> (String, Summary) {
    let mut reporter = ConsoleReporter::new(Buffer::no_color());
    let summary = reporter.report(results).expect("report to a buffer");
    let text = String::from_utf8(reporter.into_inner().into_inner()).expect("utf-8 report");
    (text, summary)
}
