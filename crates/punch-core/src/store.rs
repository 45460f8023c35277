//! Storage seams used by the timer controller.
//!
//! The controller only talks to these traits; `punch-store` provides the
//! CSV-file implementations.

use chrono::{DateTime, Local};

use crate::error::StoreError;
use crate::event::{EventKind, LogEntry};
use crate::state::TimerState;

/// Durable, append-only record of timer events.
pub trait EventLog {
    /// Ensures the log exists with its header. Safe to call repeatedly.
    fn initialize(&mut self) -> Result<(), StoreError>;

    /// Appends one entry. Either the entry is durably present afterwards or
    /// the log is unchanged.
    fn append(&mut self, entry: &LogEntry) -> Result<(), StoreError>;

    /// Returns every entry in insertion order.
    fn read_all(&self) -> Result<Vec<LogEntry>, StoreError>;

    /// Drops the most recent entry and returns it. `None` on an empty log.
    fn remove_last(&mut self) -> Result<Option<LogEntry>, StoreError>;

    /// Deletes every entry, leaving an empty log with its header.
    fn clear(&mut self) -> Result<(), StoreError>;

    /// Clears the log, then records the erase itself.
    fn erase(&mut self, at: DateTime<Local>) -> Result<(), StoreError> {
        self.clear()?;
        self.append(&LogEntry::administrative(EventKind::EraseLog, at))
    }
}

/// Durable record of the running timer, surviving process restarts.
pub trait PersistentState {
    /// Loads the saved state, or [`TimerState::Idle`] if nothing was saved.
    fn load(&self) -> Result<TimerState, StoreError>;

    fn save(&mut self, state: &TimerState) -> Result<(), StoreError>;
}
