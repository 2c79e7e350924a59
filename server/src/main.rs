mod config;
mod page;
mod report;
mod routes;
mod state;

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Load(#[from] report::LoadError),
    #[error(transparent)]
    Page(#[from] page::PageError),
    #[error("server i/o: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // A missing `.env` is fine; the environment alone is enough.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "report server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = config::Config::from_env()?;

    let report = report::load_report(&config.report_dir)?;
    match &report {
        Some(report) => {
            tracing::info!(title = %report.title, tests = report.all_tests().len(), "report loaded");
        }
        None => {
            tracing::warn!(dir = %config.report_dir.display(), "no report.json found, serving placeholder page");
        }
    }

    let state = state::AppState::new(report)?;
    let app = routes::app(state, &config);

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], config.port))).await?;
    tracing::info!(port = config.port, report_dir = %config.report_dir.display(), "report server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
