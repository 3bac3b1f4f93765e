//! Machine-readable reporting.

use std::io::Write;

use serde::Serialize;

use super::{Reporter, Summary};
use crate::diagnostics::HarnessError;
use crate::outcome::TestResult;

#[derive(Serialize)]
struct JsonReport<'a> {
    results: &'a [TestResult],
    summary: Summary,
}

/// Writes a single pretty-printed JSON document: `{ "results": [...], "summary": {...} }`.
pub struct JsonReporter<W> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, results: &[TestResult]) -> Result<Summary, HarnessError> {
        let summary = Summary::from_results(results);
        serde_json::to_writer_pretty(&mut self.out, &JsonReport { results, summary })?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::diagnostics::TestFailure;

    #[test]
    fn document_has_results_and_summary() {
        let results = vec![
            TestResult::passed("a", "hi\n".to_string(), Duration::ZERO),
            TestResult::failed("b", TestFailure::fault("boom"), String::new(), Duration::ZERO),
        ];
        let mut reporter = JsonReporter::new(Vec::new());
        let summary = reporter.report(&results).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&reporter.into_inner()).unwrap();

        assert_eq!(summary.failed, 1);
        assert_eq!(value["summary"]["total"], 2);
        assert_eq!(value["results"][0]["outcome"], "passed");
        assert_eq!(value["results"][0]["output"], "hi\n");
        assert_eq!(value["results"][1]["failure"], "fault");
        assert_eq!(value["results"][1]["message"], "boom");
        assert!(value["results"][0].get("message").is_none());
    }
}
