use super::*;
use crate::model::{SuiteData, TestData, TestStatus};

fn test(name: &str, status: TestStatus) -> TestData {
    TestData { name: name.to_owned(), status: Some(status), ..TestData::default() }
}

#[test]
fn info_rows_keep_producer_order_then_timing() {
    let report = ReportData {
        info: vec![("Command line".to_owned(), "lcc run".to_owned())],
        start_time: Some(0.0),
        end_time: Some(90.0),
        ..ReportData::default()
    };
    let rows = info_rows(&report);
    let keys: Vec<&str> = rows.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["Command line", "Start time", "End time", "Generation time", "Duration"]);
    assert_eq!(rows[1].1, "1970-01-01 00:00:00.000");
    assert_eq!(rows[3].1, "-");
    assert_eq!(rows[4].1, "1m 30s");
}

#[test]
fn stats_rows_round_percentage() {
    let report = ReportData {
        suites: vec![SuiteData {
            name: "s".to_owned(),
            tests: vec![
                test("a", TestStatus::Passed),
                test("b", TestStatus::Passed),
                test("c", TestStatus::Failed),
            ],
            ..SuiteData::default()
        }],
        ..ReportData::default()
    };
    let rows = stats_rows(&report.stats());
    assert_eq!(rows[0], ("Tests", "3".to_owned()));
    assert_eq!(rows[1], ("Successful tests", "2 (67%)".to_owned()));
    assert_eq!(rows[2], ("Failed tests", "1".to_owned()));
}

#[test]
fn stats_table_renders_every_row() {
    let stats = ReportStats { tests: 2, passed: 2, successful_percentage: 100.0, ..ReportStats::default() };
    let html = view! { <ReportStatsTable stats=stats/> }.to_html();
    assert!(html.contains("Successful tests"));
    assert!(html.contains("2 (100%)"));
    assert!(html.contains("Disabled tests"));
}
