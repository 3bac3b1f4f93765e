//! Human-readable console reporting.

use difference::{Changeset, Difference};
use termcolor::{Color, ColorSpec, WriteColor};

use super::{Reporter, Summary};
use crate::diagnostics::HarnessError;
use crate::outcome::{Outcome, TestResult};

const OUTPUT_PREFIX: &str = "  | ";

/// Writes one line per test, its captured output, and a summary line.
pub struct ConsoleReporter<W> {
    out: W,
    show_output: bool,
}

impl<W: WriteColor> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_output: true,
        }
    }

    /// Whether captured output is echoed under each test line.
    pub fn show_output(mut self, show: bool) -> Self {
        self.show_output = show;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_result(&mut self, result: &TestResult) -> std::io::Result<()> {
        self.colored(result.outcome.label(), outcome_color(result.outcome), true)?;
        write!(self.out, ": {}", result.name)?;
        match (result.outcome, result.message.as_deref()) {
            (Outcome::Failed, Some(message)) => {
                write!(self.out, ": {}", first_line(message))?;
                if let Some(kind) = result.failure {
                    write!(self.out, " [{}]", kind)?;
                }
            }
            (Outcome::Skipped, Some(reason)) => write!(self.out, " ({})", reason)?,
            _ => {}
        }
        writeln!(self.out)?;

        if let Some((expected, actual)) = &result.comparison {
            self.print_diff(expected, actual)?;
        }
        if self.show_output {
            for line in result.output.lines() {
                writeln!(self.out, "{}{}", OUTPUT_PREFIX, line)?;
            }
        }
        Ok(())
    }

    /// Expected lines are marked `-` in red, actual lines `+` in green.
    fn print_diff(&mut self, expected: &str, actual: &str) -> std::io::Result<()> {
        let changeset = Changeset::new(expected, actual, "\n");
        for diff in &changeset.diffs {
            match diff {
                Difference::Same(text) => self.diff_lines(' ', text, None)?,
                Difference::Rem(text) => self.diff_lines('-', text, Some(Color::Red))?,
                Difference::Add(text) => self.diff_lines('+', text, Some(Color::Green))?,
            }
        }
        Ok(())
    }

    fn diff_lines(&mut self, marker: char, text: &str, color: Option<Color>) -> std::io::Result<()> {
        self.out.set_color(ColorSpec::new().set_fg(color))?;
        for line in text.lines() {
            writeln!(self.out, "    {}{}", marker, line)?;
        }
        self.out.reset()
    }

    fn print_summary(&mut self, summary: &Summary, results: &[TestResult]) -> std::io::Result<()> {
        writeln!(self.out)?;
        let color = if summary.has_failures() {
            Color::Red
        } else {
            Color::Green
        };
        self.colored(&summary.to_string(), color, true)?;
        writeln!(self.out)?;

        if summary.has_failures() {
            writeln!(self.out, "\nFailed tests:")?;
            for result in results.iter().filter(|r| r.is_failed()) {
                writeln!(self.out, "  - {}", result.name)?;
            }
        }
        Ok(())
    }

    fn colored(&mut self, text: &str, color: Color, bold: bool) -> std::io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold))?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }
}

impl<W: WriteColor> Reporter for ConsoleReporter<W> {
    fn report(&mut self, results: &[TestResult]) -> Result<Summary, HarnessError> {
        for result in results {
            self.print_result(result)?;
        }
        let summary = Summary::from_results(results);
        self.print_summary(&summary, results)?;
        self.out.flush()?;
        Ok(summary)
    }
}

fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Passed => Color::Green,
        Outcome::Failed => Color::Red,
        Outcome::Skipped => Color::Yellow,
    }
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or("")
}
