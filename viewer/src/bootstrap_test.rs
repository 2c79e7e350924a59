use super::*;

// =============================================================
// parse_injected_report
// =============================================================

#[test]
fn missing_payload_is_no_report() {
    assert!(parse_injected_report(None).unwrap().is_none());
}

#[test]
fn blank_payload_is_no_report() {
    assert!(parse_injected_report(Some("")).unwrap().is_none());
    assert!(parse_injected_report(Some("  \n\t ")).unwrap().is_none());
}

#[test]
fn valid_payload_parses_report() {
    let raw = r#"{"title": "Nightly", "suites": [{"name": "api", "tests": [{"name": "login", "status": "passed"}]}]}"#;
    let report = parse_injected_report(Some(raw)).unwrap().unwrap();
    assert_eq!(report.title, "Nightly");
    assert_eq!(report.all_tests().len(), 1);
}

#[test]
fn malformed_payload_is_an_error() {
    let err = parse_injected_report(Some("{not json")).unwrap_err();
    assert!(matches!(err, ReportDataError::Malformed(_)));
    assert!(err.to_string().starts_with("malformed report data"));
}

#[test]
fn wrongly_shaped_payload_is_an_error() {
    let err = parse_injected_report(Some(r#"{"suites": "nope"}"#));
    assert!(err.is_err());
}

// =============================================================
// resolve_report
// =============================================================

#[test]
fn resolve_falls_back_to_none_on_malformed_payload() {
    assert!(resolve_report(Some("[1, 2")).is_none());
}

#[test]
fn resolve_passes_valid_report_through() {
    let report = resolve_report(Some(r#"{"title": "Smoke"}"#)).unwrap();
    assert_eq!(report.title, "Smoke");
}

#[test]
fn bootstrap_errors_describe_the_missing_piece() {
    assert_eq!(BootstrapError::MissingMountPoint.to_string(), "mount point #root not found in page");
    assert!(BootstrapError::MissingWindow.to_string().contains("window"));
}
