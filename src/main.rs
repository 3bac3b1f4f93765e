//! Verity CLI entry point: runs the sample suite.

use std::process::ExitCode;

use verity::{cli, sample};

fn main() -> ExitCode {
    // Logs go to stderr so the report on stdout stays machine-readable.
    // An embedding host may already have installed a subscriber.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init()
        .ok();

    match sample::registry() {
        Ok(registry) => cli::run(&registry),
        Err(e) => {
            cli::report_error(e);
            ExitCode::from(2)
        }
    }
}
