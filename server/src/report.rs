//! Report loading from the report directory.
//!
//! The report is read once at startup. A directory without `report.json` is
//! not an error: the page is served with no injected data and the viewer
//! shows its placeholder.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use report_viewer::model::ReportData;

pub const REPORT_FILE_NAME: &str = "report.json";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to parse {}: {source}", path.display())]
    Parse { path: PathBuf, source: serde_json::Error },
}

/// Load `<dir>/report.json`, or `None` when the file does not exist.
///
/// # Errors
///
/// Returns [`LoadError`] when the file exists but cannot be read or is not a
/// valid report.
pub fn load_report(dir: &Path) -> Result<Option<ReportData>, LoadError> {
    let path = dir.join(REPORT_FILE_NAME);
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(LoadError::Read { path, source }),
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| LoadError::Parse { path, source })
}
