//! Human-readable duration formatting.

/// Formats a number of seconds as `"Xh Ym Zs"`.
///
/// Leading zero units are omitted, but once a unit is shown every smaller
/// unit is shown as well: `0s`, `1m 5s`, `1h 0m 0s`.
pub fn format_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
