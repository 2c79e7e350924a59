//! Report data model.
//!
//! SYSTEM CONTEXT
//! ==============
//! The viewer never builds reports itself. A test run serializes its report as
//! JSON, the host page injects that JSON, and the types here give the view
//! layer a typed tree to render: report → suites → tests/hooks → steps →
//! entries.

pub mod report;

pub use report::{
    AttachmentData, CheckData, HookData, Link, LogData, LogLevel, ReportData, ReportStats, StepData, StepEntry,
    SuiteData, TestData, TestStatus, UrlData,
};
