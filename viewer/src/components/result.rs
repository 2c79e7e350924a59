//! Result blocks for tests and setup/teardown hooks.
//!
//! DESIGN
//! ======
//! Each block is one `<tbody>`: a clickable heading row followed by the step
//! rows. The block owns a local `expanded` signal; the heading row toggles it
//! and every step row only hides, so expansion never rebuilds step content.

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::components::step::StepRows;
use crate::model::{HookData, Link, StepData, TestData, TestStatus};
use crate::util::format::{format_optional_duration, status_class, status_label};

/// Failed results open expanded so failures are visible without a click.
pub fn initially_expanded(status: Option<TestStatus>) -> bool {
    status == Some(TestStatus::Failed)
}

/// Heading text of a test: its description, or its name when undescribed.
pub fn test_heading(test: &TestData) -> String {
    if test.description.trim().is_empty() { test.name.clone() } else { test.description.clone() }
}

/// Dotted id of a test below its suite path.
pub fn test_path(suite_path: &str, test_name: &str) -> String {
    if suite_path.is_empty() { test_name.to_owned() } else { format!("{suite_path}.{test_name}") }
}

/// Result block for one test.
#[component]
pub fn TestResult(test: TestData, #[prop(into)] suite_path: String) -> impl IntoView {
    let heading = test_heading(&test);
    let path = test_path(&suite_path, &test.name);
    let duration = test.duration();
    let TestData { tags, properties, links, status, status_details, steps, .. } = test;

    view! {
        <ResultBlock
            heading=heading
            subtitle=Some(path)
            status=status
            status_details=status_details
            duration=duration
            steps=steps
        >
            <Metadata tags=tags properties=properties links=links/>
        </ResultBlock>
    }
}

/// Result block for a setup or teardown hook.
#[component]
pub fn HookResult(#[prop(into)] title: String, hook: HookData) -> impl IntoView {
    let status = hook.status();
    let duration = hook.duration();

    view! {
        <ResultBlock
            heading=title
            subtitle=None
            status=status
            status_details=None
            duration=duration
            steps=hook.steps
        />
    }
}

#[component]
fn ResultBlock(
    heading: String,
    subtitle: Option<String>,
    status: Option<TestStatus>,
    status_details: Option<String>,
    duration: Option<f64>,
    steps: Vec<StepData>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let expanded = RwSignal::new(initially_expanded(status));
    let toggle = move |_| expanded.update(|open| *open = !*open);
    let status_cell_class = format!("text-uppercase {}", status_class(status));

    let steps = steps
        .into_iter()
        .map(|step| view! { <StepRows step=step expanded=expanded/> })
        .collect_view();

    view! {
        <tbody class="result">
            <tr class="result__heading" style="cursor: pointer" on:click=toggle>
                <td class=status_cell_class>{status_label(status)}</td>
                <td colspan="2">
                    <h5 class="result__title">{heading}</h5>
                    {subtitle.map(|path| view! { <small class="text-muted">{path}</small> })}
                    {children.map(|children| children())}
                    {status_details.map(|details| view! { <p class="result__details">{details}</p> })}
                </td>
                <td class="text-right text-muted">{format_optional_duration(duration)}</td>
            </tr>
            {steps}
        </tbody>
    }
}

/// Tags, properties, and links shared by suites and tests.
#[component]
pub fn Metadata(tags: Vec<String>, properties: BTreeMap<String, String>, links: Vec<Link>) -> impl IntoView {
    if tags.is_empty() && properties.is_empty() && links.is_empty() {
        return None;
    }

    let tags = tags
        .into_iter()
        .map(|tag| view! { <span class="badge badge-secondary">{tag}</span> })
        .collect_view();
    let properties = properties
        .into_iter()
        .map(|(key, value)| view! { <span class="badge badge-info">{format!("{key}: {value}")}</span> })
        .collect_view();
    let links = links
        .into_iter()
        .map(|link| {
            let label = link.label().to_owned();
            view! {
                <a class="metadata__link" href=link.url target="_blank">
                    {label}
                </a>
            }
        })
        .collect_view();

    Some(view! {
        <div class="metadata">
            {tags}
            {properties}
            {links}
        </div>
    })
}
