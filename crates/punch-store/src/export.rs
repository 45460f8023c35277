//! Downloadable CSV exports of the log and of aggregated totals.

use std::io;

use punch_core::{LogEntry, Totals, format_time};

use crate::codec::encode_rows;
use crate::log::LOG_HEADER;

/// Column names of a totals export, in order.
pub const TOTALS_HEADER: [&str; 3] = ["Activity", "Seconds", "Time"];

/// Suggested file name for a full log export.
pub const LIFETIME_EXPORT_NAME: &str = "lifetime_time_data.csv";

/// Suggested file name for a daily totals export.
pub const DAILY_EXPORT_NAME: &str = "daily_time_data.csv";

/// Suggested file name for a weekly totals export.
pub const WEEKLY_EXPORT_NAME: &str = "weekly_time_data.csv";

/// Renders log entries in the same format as the log file itself.
pub fn export_log(entries: &[LogEntry]) -> io::Result<Vec<u8>> {
    let header = LOG_HEADER.map(String::from);
    let rows = entries.iter().map(|entry| {
        [
            entry.timestamp.clone(),
            entry.subject.to_string(),
            entry.event.to_string(),
            entry.elapsed_display().to_string(),
        ]
    });
    encode_rows(std::iter::once(header).chain(rows))
}

/// Renders one row per activity with raw seconds and a formatted duration.
pub fn export_totals(totals: &Totals) -> io::Result<Vec<u8>> {
    let header = TOTALS_HEADER.map(String::from);
    let rows = totals.iter().map(|entry| {
        [
            entry.activity.to_string(),
            entry.seconds.to_string(),
            format_time(entry.seconds),
        ]
    });
    encode_rows(std::iter::once(header).chain(rows))
}
