//! Host page markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The viewer is a client-rendered WASM app. This page gives it what it
//! expects: an empty `#root` mount point, the report serialized into a
//! `<script id="reporting-data" type="application/json">` element (only when a
//! report exists), and the bundle emitted by the viewer build under `/pkg`.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use report_viewer::bootstrap::{MOUNT_POINT_ID, REPORT_DATA_ELEMENT_ID};
use report_viewer::components::report::report_title;
use report_viewer::model::ReportData;

/// Base name of the viewer bundle files under `/pkg`.
pub const BUNDLE_NAME: &str = "report-viewer";

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Render the full host page for an optional report.
///
/// # Errors
///
/// Returns [`PageError::Serialize`] when the report cannot be serialized.
pub fn render_host_page(report: Option<&ReportData>) -> Result<String, PageError> {
    let title = report.map_or_else(|| "Test Report".to_owned(), report_title);
    let payload = match report {
        Some(report) => format!(
            r#"<script id="{REPORT_DATA_ELEMENT_ID}" type="application/json">{}</script>"#,
            script_safe_json(&serde_json::to_string(report)?)
        ),
        None => String::new(),
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta charset="utf-8"/>
        <meta name="viewport" content="width=device-width, initial-scale=1"/>
        <title>{title}</title>
        <link rel="stylesheet" href="/pkg/{BUNDLE_NAME}.css"/>
    </head>
    <body>
        <div id="{MOUNT_POINT_ID}"></div>
        {payload}
        <script type="module">import init from "/pkg/{BUNDLE_NAME}.js"; init("/pkg/{BUNDLE_NAME}_bg.wasm");</script>
    </body>
</html>
"#,
        title = escape_html(&title),
    ))
}

/// Make serialized JSON safe to embed in a `<script>` element. `<` only occurs
/// inside JSON strings, where the `\u003c` escape decodes back to `<`.
pub fn script_safe_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
