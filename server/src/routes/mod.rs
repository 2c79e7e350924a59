//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves everything the viewer needs: the host page at `/`,
//! the viewer bundle under `/pkg`, the service worker script, a JSON copy of
//! the report, and every other path straight from the report directory so
//! relative attachment links resolve.

pub mod report;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::AppState;

pub fn app(state: AppState, config: &Config) -> Router {
    let bundle = ServeDir::new(config.site_root.join("pkg"));
    let report_files = ServeDir::new(&config.report_dir);

    Router::new()
        .route("/", get(report::host_page))
        .route("/index.html", get(report::host_page))
        .route("/api/report", get(report::report_json))
        .route("/service-worker.js", get(report::service_worker))
        .route("/healthz", get(healthz))
        .nest_service("/pkg", bundle)
        .fallback_service(report_files)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
