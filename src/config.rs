//! Configuration for test execution and reporting.

use serde::Serialize;
use termcolor::ColorChoice;

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One colored line per test, then a summary line.
    #[default]
    Human,
    /// A single JSON document with every result and the summary.
    Json,
}

/// When to colorize human output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Settings shared by the runner and the reporters.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Only run enabled tests whose names match this filter.
    pub filter: Option<String>,
    /// Match the filter against the whole name instead of a substring.
    pub exact: bool,
    pub format: OutputFormat,
    pub use_colors: bool,
    /// Echo captured test output under each result line.
    pub show_output: bool,
    /// List tests instead of running them.
    pub list: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            filter: None,
            exact: false,
            format: OutputFormat::Human,
            use_colors: ColorMode::Auto.resolve(),
            show_output: true,
            list: false,
        }
    }
}

impl HarnessConfig {
    /// True when `name` is selected by the configured filter.
    pub fn matches(&self, name: &str) -> bool {
        match self.filter.as_deref() {
            None => true,
            Some(filter) if self.exact => name == filter,
            Some(filter) => name.contains(filter),
        }
    }

    pub fn color_choice(&self) -> ColorChoice {
        if self.use_colors {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        }
    }
}

impl ColorMode {
    /// Resolves `Auto` against whether stdout is a terminal.
    pub fn resolve(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => atty::is(atty::Stream::Stdout),
        }
    }
}
