//! Captured output for running tests.
//!
//! Test bodies never write to the process stdout directly. Everything they
//! want to show goes through the [`TestContext`] they are handed, which
//! collects it into an [`OutputBuffer`] owned by the runner. The reporter
//! decides later whether and where that text is shown.

use std::fmt;

// ============================================================================
// OUTPUT BUFFER
// ============================================================================

/// Collects output into a `String` for later reporting.
#[derive(Debug, Default, Clone)]
pub struct OutputBuffer {
    buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Appends `text` verbatim.
    pub fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl fmt::Write for OutputBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.emit(s);
        Ok(())
    }
}

// ============================================================================
// TEST CONTEXT
// ============================================================================

/// Per-test handle passed to every test body.
///
/// Implements [`fmt::Write`], so `write!`/`writeln!` work alongside
/// [`print`](Self::print) and [`println`](Self::println).
#[derive(Debug, Default)]
pub struct TestContext {
    name: String,
    output: OutputBuffer,
}

impl TestContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output: OutputBuffer::new(),
        }
    }

    /// Name of the test currently running.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn print(&mut self, text: impl AsRef<str>) {
        self.output.emit(text.as_ref());
    }

    pub fn println(&mut self, text: impl AsRef<str>) {
        self.output.emit(text.as_ref());
        self.output.emit("\n");
    }

    pub fn output(&self) -> &str {
        self.output.as_str()
    }

    pub fn into_output(self) -> String {
        self.output.into_string()
    }
}

impl fmt::Write for TestContext {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.output.write_str(s)
    }
}
