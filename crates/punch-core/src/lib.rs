//! Core domain logic for the punch activity timer.
//!
//! This crate contains:
//! - The timer state machine ([`TimerController`]) and its day-rollover rules
//! - Log entries and persisted timer state
//! - The storage traits implemented by `punch-store`
//! - Duration formatting for display and the event log

mod clock;
mod controller;
mod error;
pub mod event;
mod format;
mod state;
mod store;
mod totals;
mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{LiveTimer, StoppedTimer, TimerController};
pub use error::{StoreError, TimerError};
pub use event::{EventKind, LogEntry, Subject, UnknownEventKind};
pub use format::format_time;
pub use state::TimerState;
pub use store::{EventLog, PersistentState};
pub use totals::{SessionSnapshot, TotalEntry, Totals};
pub use types::{
    ALL_ACTIVITIES, Activity, DEFAULT_ACTIVITIES, ValidationError, default_activities,
    parse_activities,
};
