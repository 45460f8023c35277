//! CSV-backed persistent timer state.
//!
//! The file has the header `start_time,active_timer` and a single row.
//! Empty fields mean no timer is running.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone};
use punch_core::{Activity, PersistentState, StoreError, TimerState};

use crate::codec::{check_header, csv_error, encode_rows};
use crate::fsutil::{read_optional, write_atomic};

/// Column names of the state file, in order.
pub const STATE_HEADER: [&str; 2] = ["start_time", "active_timer"];

/// Timer state stored as a one-row CSV file.
#[derive(Debug, Clone)]
pub struct CsvStateStore {
    path: PathBuf,
}

impl CsvStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses a start time, accepting RFC 3339 or a naive local timestamp.
    fn parse_start_time(&self, value: &str) -> Result<DateTime<Local>, StoreError> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
            return Ok(parsed.with_timezone(&Local));
        }
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .and_then(|naive| Local.from_local_datetime(&naive).earliest())
            .ok_or_else(|| {
                StoreError::malformed(&self.path, 1, format!("invalid start_time: {value}"))
            })
    }
}

impl PersistentState for CsvStateStore {
    fn load(&self) -> Result<TimerState, StoreError> {
        let Some(content) = read_optional(&self.path)? else {
            return Ok(TimerState::Idle);
        };
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(TimerState::Idle);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(content.as_slice());
        let headers = reader
            .headers()
            .map_err(|e| csv_error(&self.path, e))?
            .clone();
        if headers.is_empty() {
            return Ok(TimerState::Idle);
        }
        check_header(&self.path, &headers, &STATE_HEADER)?;

        let mut record = csv::StringRecord::new();
        if !reader
            .read_record(&mut record)
            .map_err(|e| csv_error(&self.path, e))?
        {
            return Ok(TimerState::Idle);
        }

        let start_time = record.get(0).map_or("", str::trim);
        let active_timer = record.get(1).map_or("", str::trim);

        match (start_time.is_empty(), active_timer.is_empty()) {
            (true, true) => Ok(TimerState::Idle),
            (false, false) => {
                let started_at = self.parse_start_time(start_time)?;
                let activity = Activity::new(active_timer)
                    .map_err(|e| StoreError::malformed(&self.path, 1, e.to_string()))?;
                Ok(TimerState::Running {
                    activity,
                    started_at,
                })
            }
            _ => {
                tracing::warn!(
                    path = %self.path.display(),
                    start_time,
                    active_timer,
                    "inconsistent timer state; resetting to idle"
                );
                Ok(TimerState::Idle)
            }
        }
    }

    fn save(&mut self, state: &TimerState) -> Result<(), StoreError> {
        let row = match state {
            TimerState::Idle => [String::new(), String::new()],
            TimerState::Running {
                activity,
                started_at,
            } => [
                started_at.to_rfc3339_opts(SecondsFormat::AutoSi, false),
                activity.to_string(),
            ],
        };
        let bytes = encode_rows([STATE_HEADER.map(String::from), row])
            .map_err(|e| StoreError::io(&self.path, e))?;
        write_atomic(&self.path, &bytes)?;
        tracing::debug!(running = state.is_running(), "saved timer state");
        Ok(())
    }
}
