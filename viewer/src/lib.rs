//! # report-viewer
//!
//! Leptos + WASM viewer for test-run reports.
//!
//! The host page injects a serialized report and provides a `#root` mount
//! point. On page load the viewer renders the full report, or a placeholder
//! when no report was injected, then registers the offline caching worker.
//! Build for the browser with the `csr` feature.

// Recursive suite views nest deeply once rendered to HTML.
#![recursion_limit = "256"]

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod model;
pub mod util;

/// WASM entry point: wait for page load, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    bootstrap::on_page_load(|| {
        let report = bootstrap::read_injected_report();
        if let Err(e) = bootstrap::bootstrap(report) {
            log::error!("report viewer failed to start: {e}");
        }
    });
}
