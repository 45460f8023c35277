//! Event log entries and the event names written to the log.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::format::format_time;
use crate::types::{ALL_ACTIVITIES, Activity};

/// Display format for log timestamps, e.g. `05 Mar 2025, 02:07 PM`.
pub const TIMESTAMP_FORMAT: &str = "%d %b %Y, %I:%M %p";

/// Placeholder written when an entry carries no elapsed time.
pub const NO_ELAPSED: &str = "N/A";

/// Canonical event names for the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Start,
    Stop,
    ResetDay,
    ResetWeek,
    EraseLog,
}

impl EventKind {
    /// The name stored in the log's `Event` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Stop => "Stop",
            Self::ResetDay => "Reset Day",
            Self::ResetWeek => "Reset Week",
            Self::EraseLog => "Erase Log",
        }
    }

    /// Whether the event applies to every activity rather than one.
    #[must_use]
    pub const fn is_administrative(&self) -> bool {
        matches!(self, Self::ResetDay | Self::ResetWeek | Self::EraseLog)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Start" => Ok(Self::Start),
            "Stop" => Ok(Self::Stop),
            "Reset Day" => Ok(Self::ResetDay),
            "Reset Week" => Ok(Self::ResetWeek),
            "Erase Log" | "Erase CSV" => Ok(Self::EraseLog),
            _ => Err(UnknownEventKind(s.to_string())),
        }
    }
}

impl Serialize for EventKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown event names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEventKind(String);

impl fmt::Display for UnknownEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event: {}", self.0)
    }
}

impl std::error::Error for UnknownEventKind {}

/// What a log entry is about: one activity, or all of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subject {
    Activity(Activity),
    AllActivities,
}

impl Subject {
    /// The name stored in the log's `Activity` column.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Activity(activity) => activity.as_str(),
            Self::AllActivities => ALL_ACTIVITIES,
        }
    }
}

impl From<Activity> for Subject {
    fn from(activity: Activity) -> Self {
        Self::Activity(activity)
    }
}

impl FromStr for Subject {
    type Err = crate::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_ACTIVITIES {
            Ok(Self::AllActivities)
        } else {
            Activity::new(s).map(Self::Activity)
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the event log.
///
/// Timestamps and elapsed times are stored as display strings, the way they
/// appear in the log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub subject: Subject,
    pub event: EventKind,
    /// Formatted elapsed time, `None` when the log shows [`NO_ELAPSED`].
    pub elapsed: Option<String>,
}

impl LogEntry {
    /// Builds an entry stamped with `at`, formatting `elapsed_secs` if given.
    pub fn new(
        subject: impl Into<Subject>,
        event: EventKind,
        elapsed_secs: Option<u64>,
        at: DateTime<Local>,
    ) -> Self {
        Self {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            subject: subject.into(),
            event,
            elapsed: elapsed_secs.map(format_time),
        }
    }

    /// Builds an administrative entry for [`Subject::AllActivities`].
    pub fn administrative(event: EventKind, at: DateTime<Local>) -> Self {
        Self::new(Subject::AllActivities, event, None, at)
    }

    /// The elapsed column as written to the log.
    pub fn elapsed_display(&self) -> &str {
        self.elapsed.as_deref().unwrap_or(NO_ELAPSED)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 5, hour, minute, 0).unwrap()
    }

    #[test]
    fn roundtrip_all_variants() {
        let variants = [
            EventKind::Start,
            EventKind::Stop,
            EventKind::ResetDay,
            EventKind::ResetWeek,
            EventKind::EraseLog,
        ];

        for variant in &variants {
            let parsed: EventKind = variant.to_string().parse().expect("should parse");
            assert_eq!(parsed, *variant, "roundtrip failed for {variant:?}");
        }
    }

    #[test]
    fn legacy_erase_name_parses() {
        let parsed: EventKind = "Erase CSV".parse().expect("should parse");
        assert_eq!(parsed, EventKind::EraseLog);
    }

    #[test]
    fn unknown_event_errors() {
        let err = "Pause".parse::<EventKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown event: Pause");
    }

    #[test]
    fn entry_formats_twelve_hour_timestamp() {
        let activity = Activity::new("Coding").unwrap();
        let entry = LogEntry::new(activity, EventKind::Start, None, at(14, 7));
        assert_eq!(entry.timestamp, "05 Mar 2025, 02:07 PM");
        assert_eq!(entry.elapsed_display(), "N/A");
        assert_eq!(entry.subject.as_str(), "Coding");
    }

    #[test]
    fn entry_formats_elapsed_including_zero() {
        let activity = Activity::new("Comms").unwrap();
        let entry = LogEntry::new(activity.clone(), EventKind::Stop, Some(65), at(9, 30));
        assert_eq!(entry.elapsed_display(), "1m 5s");

        let entry = LogEntry::new(activity, EventKind::Stop, Some(0), at(9, 30));
        assert_eq!(entry.elapsed_display(), "0s");
    }

    #[test]
    fn administrative_entry_uses_sentinel() {
        let entry = LogEntry::administrative(EventKind::ResetDay, at(0, 5));
        assert_eq!(entry.subject, Subject::AllActivities);
        assert_eq!(entry.subject.to_string(), "All Activities");
        assert!(entry.event.is_administrative());
        assert_eq!(entry.timestamp, "05 Mar 2025, 12:05 AM");
    }

    #[test]
    fn subject_parses_sentinel_and_activities() {
        assert_eq!(
            "All Activities".parse::<Subject>().unwrap(),
            Subject::AllActivities
        );
        assert_eq!(
            "Writing".parse::<Subject>().unwrap(),
            Subject::Activity(Activity::new("Writing").unwrap())
        );
        assert!("".parse::<Subject>().is_err());
    }
}
