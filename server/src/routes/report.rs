//! Report page routes.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Json};

use crate::state::AppState;

const SERVICE_WORKER_JS: &str = include_str!("../../assets/service-worker.js");

/// `GET /`: host page with the report injected when one was loaded.
pub async fn host_page(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

/// `GET /api/report`: the loaded report as JSON.
pub async fn report_json(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let report = state.report.as_deref().ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(report.clone()))
}

/// `GET /service-worker.js`: offline cache worker registered by the viewer.
pub async fn service_worker() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript"), (header::CACHE_CONTROL, "no-cache")],
        SERVICE_WORKER_JS,
    )
}
