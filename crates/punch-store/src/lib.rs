//! File storage for the punch activity timer.
//!
//! All state lives in one data directory:
//!
//! | File                   | Contents                                   |
//! |------------------------|--------------------------------------------|
//! | `time_tracker_log.csv` | append-only event log ([`CsvEventLog`])    |
//! | `state_tracker.csv`    | the running timer ([`CsvStateStore`])      |
//! | `session.json`         | totals and last active date ([`SessionFile`]) |
//!
//! # Concurrency
//!
//! The stores assume a single interactive process. Mutations of the log take
//! an exclusive advisory lock on a sibling `.lock` file, and every whole-file
//! rewrite goes through a temporary file and an atomic rename, so a crash
//! never leaves a half-written file behind.

mod codec;
pub mod export;
mod fsutil;
mod log;
mod session;
mod state;

use std::path::{Path, PathBuf};

pub use export::{export_log, export_totals};
pub use log::{CsvEventLog, LOG_HEADER};
pub use session::SessionFile;
pub use state::{CsvStateStore, STATE_HEADER};

/// File name of the event log inside the data directory.
pub const LOG_FILE_NAME: &str = "time_tracker_log.csv";

/// File name of the timer state inside the data directory.
pub const STATE_FILE_NAME: &str = "state_tracker.csv";

/// File name of the session snapshot inside the data directory.
pub const SESSION_FILE_NAME: &str = "session.json";

/// The directory holding every punch file.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn event_log(&self) -> CsvEventLog {
        CsvEventLog::new(self.root.join(LOG_FILE_NAME))
    }

    pub fn state_store(&self) -> CsvStateStore {
        CsvStateStore::new(self.root.join(STATE_FILE_NAME))
    }

    pub fn session_file(&self) -> SessionFile {
        SessionFile::new(self.root.join(SESSION_FILE_NAME))
    }
}
