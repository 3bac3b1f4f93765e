//! Defines the command-line arguments for the Verity test runner.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;

use crate::config::{ColorMode, HarnessConfig, OutputFormat};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "verity",
    version,
    about = "Runs every registered test case and reports the results."
)]
pub struct VerityArgs {
    /// Only run tests whose names contain this string.
    pub filter: Option<String>,

    /// Require the filter to match the whole test name.
    #[arg(long, requires = "filter")]
    pub exact: bool,

    /// List the registered tests without running them.
    #[arg(long)]
    pub list: bool,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// When to use colors in human output.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Do not echo captured test output.
    #[arg(long)]
    pub hide_output: bool,
}

impl VerityArgs {
    pub fn into_config(self) -> HarnessConfig {
        HarnessConfig {
            filter: self.filter,
            exact: self.exact,
            format: self.format,
            use_colors: self.color.resolve(),
            show_output: !self.hide_output,
            list: self.list,
        }
    }
}
