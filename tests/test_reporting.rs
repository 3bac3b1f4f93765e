//! Console and JSON reporting of complete runs.

mod common;

use common::{counted_sample, render_human};
use verity::{JsonReporter, Registry, Reporter, Runner};

#[test]
fn console_report_for_the_sample_suite() {
    let (registry, _) = counted_sample();
    let results = Runner::default().run_all(&registry);
    let (text, summary) = render_human(&results);

    let expected = "\
PASS: testSuccess
PASS: testWithOutput
  | hello world!
SKIP: testFailure (disabled)

3 total, 2 passed, 0 failed, 1 skipped
";
    assert_eq!(text, expected);
    assert!(summary.is_success());
}

#[test]
fn console_report_lists_failures_last() {
    let mut registry = Registry::new();
    registry
        .test("first", |_| verity::assertions::fail("first broke"))
        .unwrap()
        .test("second", |_| Ok(()))
        .unwrap();
    let results = Runner::default().run_all(&registry);
    let (text, summary) = render_human(&results);

    assert!(text.starts_with("FAIL: first: first broke [assertion]\nPASS: second\n"));
    assert!(text.contains("2 total, 1 passed, 1 failed, 0 skipped"));
    assert!(text.ends_with("Failed tests:\n  - first\n"));
    assert_eq!(summary.failed, 1);
}

#[test]
fn json_report_round_trips_through_serde_json() {
    let (registry, _) = counted_sample();
    let results = Runner::default().run_all(&registry);
    let mut reporter = JsonReporter::new(Vec::new());
    let summary = reporter.report(&results).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&reporter.into_inner()).unwrap();
    assert_eq!(value["summary"]["total"], summary.total);
    assert_eq!(value["summary"]["skipped"], 1);
    let outcomes: Vec<_> = value["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["outcome"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(outcomes, ["passed", "passed", "skipped"]);
    assert_eq!(value["results"][1]["output"], "hello world!\n");
    assert_eq!(value["results"][2]["message"], "disabled");
}
