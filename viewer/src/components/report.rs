//! Full report view.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::result::HookResult;
use crate::components::suite::SuiteResult;
use crate::components::summary::{ReportInfo, ReportStatsTable, info_rows};
use crate::model::{HookData, ReportData};

pub const SESSION_SETUP_TITLE: &str = "- TEST SESSION SETUP -";
pub const SESSION_TEARDOWN_TITLE: &str = "- TEST SESSION TEARDOWN -";
const DEFAULT_TITLE: &str = "Test Report";

/// Page title: the report's own title, or a generic one.
pub fn report_title(report: &ReportData) -> String {
    let title = report.title.trim();
    if title.is_empty() { DEFAULT_TITLE.to_owned() } else { title.to_owned() }
}

/// Report header, session hooks, and every suite.
#[component]
pub fn Report(report: ReportData) -> impl IntoView {
    let title = report_title(&report);
    let info = info_rows(&report);
    let stats = report.stats();
    let ReportData { test_session_setup, test_session_teardown, suites, .. } = report;

    let session_hook = |title: &'static str, hook: HookData| {
        view! {
            <table class="table table-sm session-hook">
                <HookResult title=title hook=hook/>
            </table>
        }
    };
    let setup = test_session_setup.map(|hook| session_hook(SESSION_SETUP_TITLE, hook));
    let teardown = test_session_teardown.map(|hook| session_hook(SESSION_TEARDOWN_TITLE, hook));
    let suites = suites
        .into_iter()
        .map(|suite| view! { <SuiteResult suite=suite/> })
        .collect_view();

    view! {
        <Title text=title.clone()/>
        <div class="container report">
            <h1 class="report__title">{title}</h1>
            <div class="row">
                <div class="col-md-8">
                    <ReportInfo rows=info/>
                </div>
                <div class="col-md-4">
                    <ReportStatsTable stats=stats/>
                </div>
            </div>
            {setup}
            {suites}
            {teardown}
        </div>
    }
}
