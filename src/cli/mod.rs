//! The Verity command-line interface.
//!
//! Any program can drive its own [`Registry`] through the same CLI by handing
//! it to [`run`]; the `verity` binary does exactly that with the sample suite.

use std::process::ExitCode;

use clap::Parser;
use miette::Report;
use serde::Serialize;
use termcolor::{StandardStream, WriteColor};
use tracing::info;

use crate::case::Status;
use crate::config::{HarnessConfig, OutputFormat};
use crate::diagnostics::HarnessError;
use crate::registry::Registry;
use crate::report::{ConsoleReporter, JsonReporter, Reporter, Summary};
use crate::runner::Runner;

pub mod args;

use args::VerityArgs;

/// Exit status when a non-skipped test failed.
const EXIT_FAILED: u8 = 1;
/// Exit status when the harness itself could not complete.
const EXIT_HARNESS_ERROR: u8 = 2;

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// Parses the process arguments, runs `registry`, and maps the outcome to an
/// exit status: 0 when every non-skipped test passed, 1 otherwise.
pub fn run(registry: &Registry) -> ExitCode {
    let config = VerityArgs::parse().into_config();
    let mut stdout = StandardStream::stdout(config.color_choice());
    match execute(registry, &config, &mut stdout) {
        Ok(summary) => exit_code(&summary),
        Err(e) => {
            report_error(e);
            ExitCode::from(EXIT_HARNESS_ERROR)
        }
    }
}

/// Runs (or lists) the registered tests and writes the report to `out`.
///
/// In list mode nothing executes and the returned summary counts every test
/// as skipped.
pub fn execute<W: WriteColor>(
    registry: &Registry,
    config: &HarnessConfig,
    out: &mut W,
) -> Result<Summary, HarnessError> {
    if config.list {
        return list_tests(registry, config.format, out);
    }

    info!(tests = registry.len(), "starting test run");
    let results = Runner::new(config.clone()).run_all(registry);
    let summary = match config.format {
        OutputFormat::Human => ConsoleReporter::new(out)
            .show_output(config.show_output)
            .report(&results)?,
        OutputFormat::Json => JsonReporter::new(out).report(&results)?,
    };
    info!(%summary, "test run complete");
    Ok(summary)
}

/// Maps a summary to the process exit status.
pub fn exit_code(summary: &Summary) -> ExitCode {
    if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_FAILED)
    }
}

/// Prints a harness error with full miette diagnostics.
pub fn report_error(error: HarnessError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}

// ============================================================================
// LISTING
// ============================================================================

#[derive(Serialize)]
struct ListedTest<'a> {
    name: &'a str,
    #[serde(flatten)]
    status: &'a Status,
}

fn list_tests<W: WriteColor>(
    registry: &Registry,
    format: OutputFormat,
    out: &mut W,
) -> Result<Summary, HarnessError> {
    let listed: Vec<_> = registry
        .discover()
        .iter()
        .map(|case| ListedTest {
            name: case.name(),
            status: case.status(),
        })
        .collect();

    match format {
        OutputFormat::Human => {
            for test in &listed {
                match test.status.skip_reason() {
                    Some(reason) => writeln!(out, "{}: test ({})", test.name, reason)?,
                    None => writeln!(out, "{}: test", test.name)?,
                }
            }
            writeln!(out, "\n{} tests", listed.len())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &listed)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(Summary {
        total: listed.len(),
        skipped: listed.len(),
        ..Summary::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    use crate::sample;

    fn human_config() -> HarnessConfig {
        HarnessConfig {
            use_colors: false,
            ..HarnessConfig::default()
        }
    }

    #[test]
    fn sample_suite_exits_successfully() {
        let registry = sample::registry().unwrap();
        let mut out = Buffer::no_color();
        let summary = execute(&registry, &human_config(), &mut out).unwrap();
        assert_eq!(summary.to_string(), "3 total, 2 passed, 0 failed, 1 skipped");
        assert!(summary.is_success());
    }

    #[test]
    fn list_mode_runs_nothing() {
        let registry = sample::registry().unwrap();
        let config = HarnessConfig {
            list: true,
            ..human_config()
        };
        let mut out = Buffer::no_color();
        execute(&registry, &config, &mut out).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("testSuccess: test\n"));
        assert!(text.contains("testFailure: test (disabled)"));
        assert!(text.contains("\n3 tests\n"));
        assert!(!text.contains("hello world!"));
    }

    #[test]
    fn json_listing_flattens_status() {
        let registry = sample::registry().unwrap();
        let config = HarnessConfig {
            list: true,
            format: OutputFormat::Json,
            ..human_config()
        };
        let mut out = Buffer::no_color();
        execute(&registry, &config, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out.into_inner()).unwrap();
        assert_eq!(value[0]["name"], "testSuccess");
        assert_eq!(value[0]["status"], "enabled");
        assert_eq!(value[2]["status"], "disabled");
    }

    #[test]
    fn any_failure_exits_with_status_one() {
        let summary = Summary {
            total: 1,
            failed: 1,
            ..Summary::default()
        };
        assert_eq!(exit_code(&summary), ExitCode::from(1));
    }

    #[test]
    fn passed_and_skipped_exit_successfully() {
        let summary = Summary {
            total: 2,
            passed: 1,
            skipped: 1,
            ..Summary::default()
        };
        assert_eq!(exit_code(&summary), ExitCode::SUCCESS);
    }

    #[test]
    fn failing_registry_maps_to_failed_status() {
        let mut registry = Registry::new();
        registry
            .test("breaks", |_| crate::assertions::fail("broken"))
            .unwrap()
            .disabled("off", None, |_| Ok(()))
            .unwrap();
        let mut out = Buffer::no_color();
        let summary = execute(&registry, &human_config(), &mut out).unwrap();
        assert_eq!(summary.failed, 1);
        assert_eq!(exit_code(&summary), ExitCode::from(1));
    }
}
