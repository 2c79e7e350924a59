//! Report header tables: run information and test statistics.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use leptos::prelude::*;

use crate::model::{ReportData, ReportStats};
use crate::util::format::{format_optional_duration, format_optional_time};

/// Key/value rows of the info table: producer-supplied info first, then timing.
pub fn info_rows(report: &ReportData) -> Vec<(String, String)> {
    let mut rows = report.info.clone();
    rows.push(("Start time".to_owned(), format_optional_time(report.start_time)));
    rows.push(("End time".to_owned(), format_optional_time(report.end_time)));
    rows.push(("Generation time".to_owned(), format_optional_time(report.report_generation_time)));
    rows.push(("Duration".to_owned(), format_optional_duration(report.duration())));
    rows
}

/// Label/value rows of the statistics table.
pub fn stats_rows(stats: &ReportStats) -> Vec<(&'static str, String)> {
    vec![
        ("Tests", stats.tests.to_string()),
        ("Successful tests", format!("{} ({:.0}%)", stats.passed, stats.successful_percentage)),
        ("Failed tests", stats.failed.to_string()),
        ("Skipped tests", stats.skipped.to_string()),
        ("Disabled tests", stats.disabled.to_string()),
    ]
}

#[component]
pub fn ReportInfo(rows: Vec<(String, String)>) -> impl IntoView {
    let rows = rows
        .into_iter()
        .map(|(key, value)| {
            view! {
                <tr>
                    <th scope="row">{key}</th>
                    <td>{value}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="table table-sm report-info">
            <tbody>{rows}</tbody>
        </table>
    }
}

#[component]
pub fn ReportStatsTable(stats: ReportStats) -> impl IntoView {
    let rows = stats_rows(&stats)
        .into_iter()
        .map(|(label, value)| {
            view! {
                <tr>
                    <th scope="row">{label}</th>
                    <td>{value}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="table table-sm report-stats">
            <tbody>{rows}</tbody>
        </table>
    }
}
