//! Display formatting for timestamps, durations, and status styling.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::model::{LogLevel, TestStatus};

/// Formats an epoch-seconds timestamp as UTC `YYYY-MM-DD HH:MM:SS.mmm`.
pub fn format_time(epoch_secs: f64) -> String {
    if !epoch_secs.is_finite() || epoch_secs < 0.0 {
        return "----/--/-- --:--:--.---".to_owned();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_ms = (epoch_secs * 1000.0).round() as u64;
    let millis = total_ms % 1000;
    let total_secs = total_ms / 1000;
    let secs = total_secs % 60;
    let mins = (total_secs / 60) % 60;
    let hours = (total_secs / 3600) % 24;
    let (year, month, day) = civil_from_days(total_secs / 86_400);
    format!("{year:04}-{month:02}-{day:02} {hours:02}:{mins:02}:{secs:02}.{millis:03}")
}

/// Days since 1970-01-01 to a (year, month, day) civil date.
fn civil_from_days(days: u64) -> (u64, u64, u64) {
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);
    (year, month, day)
}

/// Formats an elapsed time: `0.250s`, `2m 05s`, `1h 02m 03s`.
pub fn format_duration(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "-".to_owned();
    }
    if secs < 60.0 {
        return format!("{secs:.3}s");
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = secs.round() as u64;
    let hours = whole / 3600;
    let mins = (whole / 60) % 60;
    let rem = whole % 60;
    if hours > 0 {
        format!("{hours}h {mins:02}m {rem:02}s")
    } else {
        format!("{mins}m {rem:02}s")
    }
}

pub fn format_optional_duration(secs: Option<f64>) -> String {
    secs.map_or_else(|| "-".to_owned(), format_duration)
}

pub fn format_optional_time(epoch_secs: Option<f64>) -> String {
    epoch_secs.map_or_else(|| "-".to_owned(), format_time)
}

/// Bootstrap text class for a test status. In-progress tests are muted.
pub fn status_class(status: Option<TestStatus>) -> &'static str {
    match status {
        Some(TestStatus::Passed) => "text-success",
        Some(TestStatus::Failed) => "text-danger",
        Some(TestStatus::Skipped) => "text-warning",
        Some(TestStatus::Disabled) => "text-muted",
        None => "text-secondary",
    }
}

pub fn status_label(status: Option<TestStatus>) -> &'static str {
    status.map_or("in progress", TestStatus::as_str)
}

pub fn log_level_class(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Debug | LogLevel::Info => "text-info",
        LogLevel::Warn => "text-warning",
        LogLevel::Error => "text-danger",
    }
}

/// Label and class for a check outcome cell.
pub fn outcome_label(outcome: bool) -> (&'static str, &'static str) {
    if outcome { ("success", "text-success") } else { ("failure", "text-danger") }
}

/// CSS `display` value for a row that follows its step's expansion. Collapsed
/// rows stay mounted and are only hidden.
pub fn row_display(expanded: bool) -> &'static str {
    if expanded { "" } else { "none" }
}
