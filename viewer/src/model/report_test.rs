use super::*;

const SAMPLE: &str = r#"{
    "title": "Nightly run",
    "info": [["Command line", "lcc run"], ["Host", "ci-1"]],
    "start_time": 1000.0,
    "end_time": 1012.5,
    "suites": [
        {
            "name": "api",
            "description": "API suite",
            "tests": [
                {
                    "name": "login",
                    "description": "Login works",
                    "status": "passed",
                    "start_time": 1000.0,
                    "end_time": 1001.25,
                    "steps": [
                        {
                            "description": "Call endpoint",
                            "entries": [
                                {"type": "log", "level": "info", "message": "calling"},
                                {"type": "check", "description": "status is 200", "outcome": true},
                                {"type": "attachment", "description": "Console log", "filename": "log.txt"},
                                {"type": "url", "description": "Docs", "url": "https://example.test"}
                            ]
                        }
                    ]
                },
                {"name": "logout", "description": "Logout works", "status": "failed"}
            ],
            "suites": [
                {
                    "name": "admin",
                    "tests": [
                        {"name": "ban", "status": "skipped", "status_details": "not ready"},
                        {"name": "purge", "status": "disabled"}
                    ]
                }
            ]
        }
    ]
}"#;

fn sample() -> ReportData {
    serde_json::from_str(SAMPLE).unwrap()
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn deserializes_info_pairs_in_order() {
    let report = sample();
    assert_eq!(report.title, "Nightly run");
    assert_eq!(
        report.info,
        vec![
            ("Command line".to_owned(), "lcc run".to_owned()),
            ("Host".to_owned(), "ci-1".to_owned()),
        ]
    );
}

#[test]
fn deserializes_tagged_step_entries() {
    let report = sample();
    let entries = &report.suites[0].tests[0].steps[0].entries;
    assert_eq!(entries.len(), 4);
    assert!(matches!(&entries[0], StepEntry::Log(log) if log.level == LogLevel::Info));
    assert!(matches!(&entries[1], StepEntry::Check(check) if check.outcome));
    assert_eq!(
        entries[2],
        StepEntry::Attachment(AttachmentData {
            filename: "log.txt".to_owned(),
            description: "Console log".to_owned(),
            as_image: false,
        })
    );
    assert!(matches!(&entries[3], StepEntry::Url(url) if url.url == "https://example.test"));
}

#[test]
fn missing_optional_sections_default() {
    let report: ReportData = serde_json::from_str("{}").unwrap();
    assert!(report.title.is_empty());
    assert!(report.suites.is_empty());
    assert!(report.test_session_setup.is_none());
    assert!(report.duration().is_none());
}

#[test]
fn unknown_entry_type_is_rejected() {
    let raw = r#"{"description": "s", "entries": [{"type": "video", "url": "x"}]}"#;
    assert!(serde_json::from_str::<StepData>(raw).is_err());
}

// =============================================================
// Derived data
// =============================================================

#[test]
fn all_tests_walks_nested_suites_depth_first() {
    let report = sample();
    let names: Vec<&str> = report.all_tests().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["login", "logout", "ban", "purge"]);
}

#[test]
fn stats_count_each_status() {
    let stats = sample().stats();
    assert_eq!(stats.tests, 4);
    assert_eq!(stats.passed, 1);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.disabled, 1);
}

#[test]
fn stats_percentage_excludes_disabled_tests() {
    let stats = sample().stats();
    // 1 passed out of 3 enabled tests.
    assert!((stats.successful_percentage - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn stats_percentage_is_zero_without_enabled_tests() {
    let test = TestData { name: "t".to_owned(), status: Some(TestStatus::Disabled), ..TestData::default() };
    let stats = ReportStats::from_tests([&test]);
    assert_eq!(stats.tests, 1);
    assert!(stats.successful_percentage.abs() < f64::EPSILON);
}

#[test]
fn durations_need_both_ends() {
    let report = sample();
    assert_eq!(report.duration(), Some(12.5));
    assert_eq!(report.suites[0].tests[0].duration(), Some(1.25));
    assert_eq!(report.suites[0].tests[1].duration(), None);
}

#[test]
fn step_failure_from_failed_check_or_error_log() {
    let mut step = StepData { description: "s".to_owned(), ..StepData::default() };
    assert!(!step.has_failure());

    step.entries.push(StepEntry::Log(LogData { level: LogLevel::Warn, message: "w".to_owned(), time: None }));
    assert!(!step.has_failure());

    step.entries.push(StepEntry::Check(CheckData {
        description: "c".to_owned(),
        outcome: false,
        details: None,
    }));
    assert!(step.has_failure());

    let errored = StepData {
        description: "e".to_owned(),
        entries: vec![StepEntry::Log(LogData { level: LogLevel::Error, message: "boom".to_owned(), time: None })],
        ..StepData::default()
    };
    assert!(errored.has_failure());
}

#[test]
fn hook_status_follows_outcome() {
    let mut hook = HookData::default();
    assert_eq!(hook.status(), None);
    hook.outcome = Some(true);
    assert_eq!(hook.status(), Some(TestStatus::Passed));
    hook.outcome = Some(false);
    assert_eq!(hook.status(), Some(TestStatus::Failed));
}

#[test]
fn suite_path_joins_parent_with_dot() {
    let suite = SuiteData { name: "admin".to_owned(), ..SuiteData::default() };
    assert_eq!(suite.path_of(None), "admin");
    assert_eq!(suite.path_of(Some("")), "admin");
    assert_eq!(suite.path_of(Some("api")), "api.admin");
}

#[test]
fn link_label_falls_back_to_url() {
    let bare = Link { url: "https://a.test".to_owned(), name: None };
    let named = Link { url: "https://a.test".to_owned(), name: Some("Ticket".to_owned()) };
    assert_eq!(bare.label(), "https://a.test");
    assert_eq!(named.label(), "Ticket");
}
