//! Rows for one step: a heading row plus one row per entry.

#[cfg(test)]
#[path = "step_test.rs"]
mod step_test;

use leptos::prelude::*;

use crate::components::attachment::AttachmentRow;
use crate::components::entries::{CheckRow, LogRow, UrlRow};
use crate::model::{StepData, StepEntry};
use crate::util::format::{format_optional_duration, row_display};

/// Step heading and its entries. Everything follows the owning test's
/// `expanded` signal; failed steps get a danger-colored heading.
#[component]
pub fn StepRows(step: StepData, #[prop(into)] expanded: Signal<bool>) -> impl IntoView {
    let duration = format_optional_duration(step.duration());
    let heading_class = if step.has_failure() { "step text-danger" } else { "step" };

    let entries = step
        .entries
        .into_iter()
        .map(|entry| entry_row(entry, expanded))
        .collect_view();

    view! {
        <tr class=heading_class style:display=move || row_display(expanded.get())>
            <td colspan="3">
                <h6 class="step__description">{step.description}</h6>
            </td>
            <td class="text-right text-muted">{duration}</td>
        </tr>
        {entries}
    }
}

fn entry_row(entry: StepEntry, expanded: Signal<bool>) -> AnyView {
    match entry {
        StepEntry::Log(log) => view! { <LogRow log=log expanded=expanded/> }.into_any(),
        StepEntry::Check(check) => view! { <CheckRow check=check expanded=expanded/> }.into_any(),
        StepEntry::Attachment(attachment) => {
            view! { <AttachmentRow attachment=attachment expanded=expanded/> }.into_any()
        }
        StepEntry::Url(url) => view! { <UrlRow url=url expanded=expanded/> }.into_any(),
    }
}
