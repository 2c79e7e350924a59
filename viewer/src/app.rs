//! Root application component.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;

use crate::components::placeholder::NoReportData;
use crate::components::report::Report;
use crate::model::ReportData;

/// Choose the root view from the report supplied at startup.
///
/// `report_view` runs exactly once when a report is present and never
/// otherwise; `placeholder` runs exactly once when it is absent.
pub fn select_root<V>(
    report: Option<ReportData>,
    report_view: impl FnOnce(ReportData) -> V,
    placeholder: impl FnOnce() -> V,
) -> V {
    match report {
        Some(report) => report_view(report),
        None => placeholder(),
    }
}

/// Root application component.
///
/// The report is decided once by the caller; the view does not re-check for
/// data that appears later.
#[component]
pub fn App(report: Option<ReportData>) -> impl IntoView {
    provide_meta_context();

    select_root(
        report,
        |report| view! { <Report report=report/> }.into_any(),
        || view! { <NoReportData/> }.into_any(),
    )
}
