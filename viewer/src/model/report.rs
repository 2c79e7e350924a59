//! Serde types for a serialized test-run report.
//!
//! Timestamps are UNIX epoch seconds as floats. Optional sections are absent
//! from the JSON rather than `null` in most producers, so nearly every field
//! carries `#[serde(default)]`.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// REPORT
// =============================================================================

/// Top-level report payload consumed by the `Report` view.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    #[serde(default)]
    pub title: String,
    /// Ordered key/value pairs shown in the report info table.
    #[serde(default)]
    pub info: Vec<(String, String)>,
    #[serde(default)]
    pub start_time: Option<f64>,
    #[serde(default)]
    pub end_time: Option<f64>,
    #[serde(default)]
    pub report_generation_time: Option<f64>,
    #[serde(default)]
    pub test_session_setup: Option<HookData>,
    #[serde(default)]
    pub test_session_teardown: Option<HookData>,
    #[serde(default)]
    pub suites: Vec<SuiteData>,
}

impl ReportData {
    /// Every test of every suite, depth-first in declaration order.
    pub fn all_tests(&self) -> Vec<&TestData> {
        let mut out = Vec::new();
        collect_tests(&self.suites, &mut out);
        out
    }

    /// Aggregate test counts by status.
    pub fn stats(&self) -> ReportStats {
        ReportStats::from_tests(self.all_tests())
    }

    pub fn duration(&self) -> Option<f64> {
        elapsed(self.start_time, self.end_time)
    }
}

fn collect_tests<'a>(suites: &'a [SuiteData], out: &mut Vec<&'a TestData>) {
    for suite in suites {
        out.extend(suite.tests.iter());
        collect_tests(&suite.suites, out);
    }
}

fn elapsed(start: Option<f64>, end: Option<f64>) -> Option<f64> {
    match (start, end) {
        (Some(start), Some(end)) => Some((end - start).max(0.0)),
        _ => None,
    }
}

// =============================================================================
// STATS
// =============================================================================

/// Per-status test counts shown in the report header.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReportStats {
    pub tests: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub disabled: usize,
    /// `passed / (tests - disabled) * 100`, or `0.0` when no test is enabled.
    pub successful_percentage: f64,
}

impl ReportStats {
    pub fn from_tests<'a>(tests: impl IntoIterator<Item = &'a TestData>) -> Self {
        let mut stats = Self::default();
        for test in tests {
            stats.tests += 1;
            match test.status {
                Some(TestStatus::Passed) => stats.passed += 1,
                Some(TestStatus::Failed) => stats.failed += 1,
                Some(TestStatus::Skipped) => stats.skipped += 1,
                Some(TestStatus::Disabled) => stats.disabled += 1,
                None => {}
            }
        }

        let enabled = stats.tests - stats.disabled;
        if enabled > 0 {
            #[allow(clippy::cast_precision_loss)]
            let pct = stats.passed as f64 / enabled as f64 * 100.0;
            stats.successful_percentage = pct;
        }
        stats
    }
}

// =============================================================================
// SUITE / TEST / HOOK
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Link {
    /// Link label, falling back to the URL itself.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.url)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SuiteData {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub suite_setup: Option<HookData>,
    #[serde(default)]
    pub suite_teardown: Option<HookData>,
    #[serde(default)]
    pub tests: Vec<TestData>,
    #[serde(default)]
    pub suites: Vec<SuiteData>,
}

impl SuiteData {
    /// Dotted path of this suite below `parent` (the parent's own path).
    pub fn path_of(&self, parent: Option<&str>) -> String {
        match parent {
            Some(parent) if !parent.is_empty() => format!("{parent}.{}", self.name),
            _ => self.name.clone(),
        }
    }

    /// Whether the suite renders anything: tests, hooks, or nested suites.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty() && self.suite_setup.is_none() && self.suite_teardown.is_none() && self.suites.is_empty()
    }
}

/// Final status of a test. A test without a status is still running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
    Disabled,
}

impl TestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
            Self::Disabled => "disabled",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TestData {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub status: Option<TestStatus>,
    #[serde(default)]
    pub status_details: Option<String>,
    #[serde(default)]
    pub start_time: Option<f64>,
    #[serde(default)]
    pub end_time: Option<f64>,
    #[serde(default)]
    pub steps: Vec<StepData>,
}

impl TestData {
    pub fn duration(&self) -> Option<f64> {
        elapsed(self.start_time, self.end_time)
    }
}

/// Setup or teardown phase, at session or suite level.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HookData {
    #[serde(default)]
    pub start_time: Option<f64>,
    #[serde(default)]
    pub end_time: Option<f64>,
    /// `None` while the hook is still running.
    #[serde(default)]
    pub outcome: Option<bool>,
    #[serde(default)]
    pub steps: Vec<StepData>,
}

impl HookData {
    pub fn status(&self) -> Option<TestStatus> {
        self.outcome
            .map(|ok| if ok { TestStatus::Passed } else { TestStatus::Failed })
    }

    pub fn duration(&self) -> Option<f64> {
        elapsed(self.start_time, self.end_time)
    }
}

// =============================================================================
// STEPS AND ENTRIES
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StepData {
    pub description: String,
    #[serde(default)]
    pub start_time: Option<f64>,
    #[serde(default)]
    pub end_time: Option<f64>,
    #[serde(default)]
    pub entries: Vec<StepEntry>,
}

impl StepData {
    pub fn duration(&self) -> Option<f64> {
        elapsed(self.start_time, self.end_time)
    }

    /// A step fails on any failed check or any error-level log.
    pub fn has_failure(&self) -> bool {
        self.entries.iter().any(|entry| match entry {
            StepEntry::Check(check) => !check.outcome,
            StepEntry::Log(log) => log.level == LogLevel::Error,
            StepEntry::Attachment(_) | StepEntry::Url(_) => false,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StepEntry {
    Log(LogData),
    Check(CheckData),
    Attachment(AttachmentData),
    Url(UrlData),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogData {
    pub level: LogLevel,
    pub message: String,
    #[serde(default)]
    pub time: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckData {
    pub description: String,
    pub outcome: bool,
    #[serde(default)]
    pub details: Option<String>,
}

/// A file attached to a step: `filename` is the path or URL, `description`
/// the display label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentData {
    pub filename: String,
    pub description: String,
    #[serde(default)]
    pub as_image: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlData {
    pub description: String,
    pub url: String,
}
