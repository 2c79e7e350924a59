//! Step entry rows for logs, checks, and URLs.
//!
//! Every row spans the report's four table columns and follows its step's
//! `expanded` signal the same way [`super::attachment::AttachmentRow`] does.

#[cfg(test)]
#[path = "entries_test.rs"]
mod entries_test;

use leptos::prelude::*;

use crate::model::{CheckData, LogData, UrlData};
use crate::util::format::{log_level_class, outcome_label, row_display};

/// Log message row. The level label takes its color from the level.
#[component]
pub fn LogRow(log: LogData, #[prop(into)] expanded: Signal<bool>) -> impl IntoView {
    let label_class = format!("text-uppercase {}", log_level_class(log.level));

    view! {
        <tr class="step_entry log" style:display=move || row_display(expanded.get())>
            <td class=label_class>{log.level.as_str()}</td>
            <td colspan="3" style="white-space: pre-wrap">{log.message}</td>
        </tr>
    }
}

/// Check row: description, outcome, and optional details.
#[component]
pub fn CheckRow(check: CheckData, #[prop(into)] expanded: Signal<bool>) -> impl IntoView {
    let (outcome_text, outcome_class) = outcome_label(check.outcome);
    let outcome_class = format!("text-uppercase {outcome_class}");

    view! {
        <tr class="step_entry check" style:display=move || row_display(expanded.get())>
            <td class="text-uppercase text-info">"CHECK"</td>
            <td style="white-space: pre-wrap">{check.description}</td>
            <td class=outcome_class>{outcome_text}</td>
            <td style="white-space: pre-wrap">{check.details.unwrap_or_default()}</td>
        </tr>
    }
}

/// External link row, opened in a new tab.
#[component]
pub fn UrlRow(url: UrlData, #[prop(into)] expanded: Signal<bool>) -> impl IntoView {
    view! {
        <tr class="step_entry url" style:display=move || row_display(expanded.get())>
            <td class="text-uppercase text-info">"URL"</td>
            <td colspan="3">
                <a href=url.url target="_blank">
                    {url.description}
                </a>
            </td>
        </tr>
    }
}
