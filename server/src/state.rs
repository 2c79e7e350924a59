//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! report is loaded once at startup and the host page rendered once from it;
//! both are shared read-only, so handlers never lock.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use report_viewer::model::ReportData;

use crate::page::{PageError, render_host_page};

#[derive(Clone)]
pub struct AppState {
    /// The report found at startup, if any.
    pub report: Option<Arc<ReportData>>,
    /// Pre-rendered host page with the report injected.
    pub page: Arc<str>,
}

impl AppState {
    /// Build state for the report found at startup.
    ///
    /// # Errors
    ///
    /// Returns [`PageError`] when the host page cannot be rendered.
    pub fn new(report: Option<ReportData>) -> Result<Self, PageError> {
        let page = render_host_page(report.as_ref())?;
        Ok(Self { report: report.map(Arc::new), page: Arc::from(page) })
    }
}
