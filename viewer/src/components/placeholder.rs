//! Placeholder shown when the page carries no report data.

#[cfg(test)]
#[path = "placeholder_test.rs"]
mod placeholder_test;

use leptos::prelude::*;

pub const NO_REPORT_MESSAGE: &str = "No report data is yet available.";

#[component]
pub fn NoReportData() -> impl IntoView {
    view! { <h1 class="no-report">{NO_REPORT_MESSAGE}</h1> }
}
