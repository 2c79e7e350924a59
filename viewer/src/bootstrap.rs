//! Page startup: read the injected report, mount the app, register offline
//! caching.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page embeds the report as JSON inside
//! `<script id="reporting-data" type="application/json">` and provides an empty
//! `<div id="root">`. Once the page `load` event fires, the payload is parsed
//! into `Option<ReportData>` and the decision between the report view and the
//! placeholder is made exactly once.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::model::ReportData;

/// Id of the element the app mounts into.
pub const MOUNT_POINT_ID: &str = "root";

/// Id of the `<script type="application/json">` element carrying the report.
pub const REPORT_DATA_ELEMENT_ID: &str = "reporting-data";

#[derive(Debug, thiserror::Error)]
pub enum ReportDataError {
    #[error("malformed report data: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error("no browser window or document available")]
    MissingWindow,
    #[error("mount point #root not found in page")]
    MissingMountPoint,
}

/// Parse the injected payload. A missing or blank payload means the page was
/// served without a report.
///
/// # Errors
///
/// Returns [`ReportDataError::Malformed`] when the payload is present but is
/// not a valid report.
pub fn parse_injected_report(raw: Option<&str>) -> Result<Option<ReportData>, ReportDataError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => Ok(Some(serde_json::from_str(text)?)),
    }
}

/// Resolve the injected payload to the report to show. A malformed payload is
/// logged and treated as absent, so the page falls back to the placeholder.
pub fn resolve_report(raw: Option<&str>) -> Option<ReportData> {
    match parse_injected_report(raw) {
        Ok(report) => report,
        Err(e) => {
            leptos::logging::error!("{e}");
            None
        }
    }
}

/// Read the report the host page injected, if any.
#[cfg(feature = "csr")]
pub fn read_injected_report() -> Option<ReportData> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(REPORT_DATA_ELEMENT_ID))
        .and_then(|el| el.text_content());
    resolve_report(raw.as_deref())
}

/// Mount the app into `#root` for the given report, then register the
/// offline caching worker.
///
/// # Errors
///
/// Returns [`BootstrapError`] when there is no document or no mount point;
/// nothing is mounted in that case.
#[cfg(feature = "csr")]
pub fn bootstrap(report: Option<ReportData>) -> Result<(), BootstrapError> {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::App;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(BootstrapError::MissingWindow)?;
    let root = document
        .get_element_by_id(MOUNT_POINT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or(BootstrapError::MissingMountPoint)?;

    let has_report = report.is_some();
    leptos::mount::mount_to(root, move || view! { <App report=report.clone()/> }).forget();
    log::info!("report viewer mounted (report present: {has_report})");

    crate::util::service_worker::register_service_worker();
    Ok(())
}

/// Run `f` once the page has finished loading. Runs immediately when the
/// `load` event already fired.
#[cfg(feature = "csr")]
pub fn on_page_load(f: impl FnOnce() + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let loaded = window
        .document()
        .is_some_and(|doc| doc.ready_state() == "complete");
    if loaded {
        f();
        return;
    }

    let listener = Closure::once(f);
    if let Err(e) = window.add_event_listener_with_callback("load", listener.as_ref().unchecked_ref()) {
        log::error!("failed to listen for page load: {e:?}");
        return;
    }
    listener.forget();
}
