//! Error types shared by the controller and storage backends.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::Activity;

/// Failures reading or writing durable storage.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The backing file exists but its contents cannot be trusted.
    #[error("malformed {} at record {record}: {message}", path.display())]
    Malformed {
        path: PathBuf,
        record: u64,
        message: String,
    },
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, record: u64, message: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            record,
            message: message.into(),
        }
    }
}

/// Failures of timer controller operations.
#[derive(Debug, Error)]
pub enum TimerError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The requested activity is not part of the configured set.
    #[error("unknown activity: {0}")]
    UnknownActivity(String),

    /// A timer is already running; it must be stopped first.
    #[error("cannot start {requested}: {active} is already running")]
    AlreadyRunning {
        active: Activity,
        requested: Activity,
    },
}
