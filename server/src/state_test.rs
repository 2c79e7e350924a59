use super::*;

#[test]
fn state_without_report_renders_placeholder_page() {
    let state = AppState::new(None).unwrap();
    assert!(state.report.is_none());
    assert!(state.page.contains(r#"<div id="root"></div>"#));
    assert!(!state.page.contains("reporting-data"));
}

#[test]
fn state_with_report_injects_it_once() {
    let report = ReportData { title: "Smoke".to_owned(), ..ReportData::default() };
    let state = AppState::new(Some(report)).unwrap();
    assert_eq!(state.report.as_deref().map(|r| r.title.as_str()), Some("Smoke"));
    assert_eq!(state.page.matches("reporting-data").count(), 1);
}
