//! Suite panel: setup hook, tests, teardown hook, then nested suites.

#[cfg(test)]
#[path = "suite_test.rs"]
mod suite_test;

use leptos::prelude::*;

use crate::components::result::{HookResult, Metadata, TestResult};
use crate::model::SuiteData;

pub const SUITE_SETUP_TITLE: &str = "- SUITE SETUP -";
pub const SUITE_TEARDOWN_TITLE: &str = "- SUITE TEARDOWN -";

/// One suite and, recursively, its sub-suites. Empty suites render nothing.
#[component]
pub fn SuiteResult(suite: SuiteData, #[prop(optional, into)] parent_path: Option<String>) -> impl IntoView {
    if suite.is_empty() {
        return None;
    }

    let path = suite.path_of(parent_path.as_deref());
    let SuiteData { name, description, tags, properties, links, suite_setup, suite_teardown, tests, suites } = suite;
    let heading = if description.trim().is_empty() { name } else { description };

    let setup = suite_setup.map(|hook| view! { <HookResult title=SUITE_SETUP_TITLE hook=hook/> });
    let teardown = suite_teardown.map(|hook| view! { <HookResult title=SUITE_TEARDOWN_TITLE hook=hook/> });
    let has_results = setup.is_some() || teardown.is_some() || !tests.is_empty();
    let tests = tests
        .into_iter()
        .map(|test| view! { <TestResult test=test suite_path=path.clone()/> })
        .collect_view();

    // Sub-suites are type-erased to break the recursive view type.
    let children = suites
        .into_iter()
        .map(|child| view! { <SuiteResult suite=child parent_path=path.clone()/> }.into_any())
        .collect_view();

    Some(view! {
        <section class="suite card mb-4">
            <div class="card-header">
                <h4 class="suite__title">{heading}</h4>
                <small class="text-muted">{path.clone()}</small>
                <Metadata tags=tags properties=properties links=links/>
            </div>
            {has_results
                .then(|| {
                    view! {
                        <table class="table table-sm suite__results">
                            {setup}
                            {tests}
                            {teardown}
                        </table>
                    }
                })}
        </section>
        {children}
    })
}
