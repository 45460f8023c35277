//! CSV-backed event log.
//!
//! The file keeps the header `Timestamp,Activity,Event,Elapsed Time` and one
//! row per event. Appends go to the end of the file in a single write; only
//! removing the last row and clearing rewrite the file, and both do so by
//! atomic replacement.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use punch_core::{EventKind, EventLog, LogEntry, StoreError, Subject};

use crate::codec::{check_header, csv_error, encode_rows};
use crate::fsutil::{FileLock, ensure_parent, read_optional, write_atomic};

/// Column names of the event log, in order.
pub const LOG_HEADER: [&str; 4] = ["Timestamp", "Activity", "Event", "Elapsed Time"];

/// Event log stored as a CSV file.
#[derive(Debug, Clone)]
pub struct CsvEventLog {
    path: PathBuf,
}

/// A parsed row and the byte offset where it starts.
struct ScannedEntry {
    offset: u64,
    entry: LogEntry,
}

impl CsvEventLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn header_bytes(&self) -> Result<Vec<u8>, StoreError> {
        encode_rows([LOG_HEADER]).map_err(|e| StoreError::io(&self.path, e))
    }

    fn entry_bytes(&self, entry: &LogEntry) -> Result<Vec<u8>, StoreError> {
        encode_rows([[
            entry.timestamp.as_str(),
            entry.subject.as_str(),
            entry.event.as_str(),
            entry.elapsed_display(),
        ]])
        .map_err(|e| StoreError::io(&self.path, e))
    }

    /// Parses every row, remembering where each one starts.
    fn scan(&self, content: &[u8]) -> Result<Vec<ScannedEntry>, StoreError> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(content);

        let headers = reader
            .headers()
            .map_err(|e| csv_error(&self.path, e))?
            .clone();
        if headers.is_empty() {
            return Ok(Vec::new());
        }
        check_header(&self.path, &headers, &LOG_HEADER)?;

        let mut scanned = Vec::new();
        let mut record = csv::StringRecord::new();
        loop {
            let offset = reader.position().byte();
            if !reader
                .read_record(&mut record)
                .map_err(|e| csv_error(&self.path, e))?
            {
                break;
            }
            let number = reader.position().record().saturating_sub(1);
            let entry = parse_entry(&self.path, number, &record)?;
            scanned.push(ScannedEntry { offset, entry });
        }
        Ok(scanned)
    }
}

/// Whether the last byte of a non-empty file is a line terminator.
fn ends_with_newline(file: &mut File, len: u64) -> io::Result<bool> {
    let mut last = [0_u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    Ok(matches!(last[0], b'\n' | b'\r'))
}

/// Converts one CSV record into a [`LogEntry`].
fn parse_entry(path: &Path, number: u64, record: &csv::StringRecord) -> Result<LogEntry, StoreError> {
    let field = |index: usize, name: &str| {
        record
            .get(index)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| StoreError::malformed(path, number, format!("missing {name}")))
    };

    let timestamp = field(0, "timestamp")?.to_string();
    let subject = Subject::from_str(field(1, "activity")?)
        .map_err(|e| StoreError::malformed(path, number, e.to_string()))?;
    let event = EventKind::from_str(field(2, "event")?)
        .map_err(|e| StoreError::malformed(path, number, e.to_string()))?;
    let elapsed = match field(3, "elapsed time")? {
        punch_core::event::NO_ELAPSED => None,
        value => Some(value.to_string()),
    };

    Ok(LogEntry {
        timestamp,
        subject,
        event,
        elapsed,
    })
}

impl EventLog for CsvEventLog {
    fn initialize(&mut self) -> Result<(), StoreError> {
        let _lock = FileLock::acquire(&self.path)?;
        match std::fs::metadata(&self.path) {
            Ok(meta) if meta.len() > 0 => return Ok(()),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(StoreError::io(&self.path, e)),
        }
        write_atomic(&self.path, &self.header_bytes()?)?;
        tracing::info!(path = %self.path.display(), "initialized event log");
        Ok(())
    }

    fn append(&mut self, entry: &LogEntry) -> Result<(), StoreError> {
        let row = self.entry_bytes(entry)?;
        ensure_parent(&self.path)?;
        let _lock = FileLock::acquire(&self.path)?;

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))?;
        let previous_len = file
            .metadata()
            .map_err(|e| StoreError::io(&self.path, e))?
            .len();

        let mut bytes = if previous_len == 0 {
            self.header_bytes()?
        } else if ends_with_newline(&mut file, previous_len)
            .map_err(|e| StoreError::io(&self.path, e))?
        {
            Vec::new()
        } else {
            // Terminate a last row written without a trailing newline.
            b"\n".to_vec()
        };
        bytes.extend_from_slice(&row);

        if let Err(e) = file.write_all(&bytes).and_then(|()| file.sync_data()) {
            // Drop any partially written row.
            if let Err(truncate_err) = file.set_len(previous_len) {
                tracing::warn!(error = %truncate_err, "failed to roll back partial append");
            }
            return Err(StoreError::io(&self.path, e));
        }

        tracing::debug!(event = %entry.event, subject = %entry.subject, "appended log entry");
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<LogEntry>, StoreError> {
        let Some(content) = read_optional(&self.path)? else {
            return Ok(Vec::new());
        };
        Ok(self
            .scan(&content)?
            .into_iter()
            .map(|scanned| scanned.entry)
            .collect())
    }

    fn remove_last(&mut self) -> Result<Option<LogEntry>, StoreError> {
        let _lock = FileLock::acquire(&self.path)?;
        let Some(content) = read_optional(&self.path)? else {
            return Ok(None);
        };
        let Some(last) = self.scan(&content)?.pop() else {
            return Ok(None);
        };

        let keep = usize::try_from(last.offset).unwrap_or(content.len());
        write_atomic(&self.path, &content[..keep.min(content.len())])?;
        tracing::info!(event = %last.entry.event, "removed last log entry");
        Ok(Some(last.entry))
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        let _lock = FileLock::acquire(&self.path)?;
        write_atomic(&self.path, &self.header_bytes()?)?;
        tracing::info!(path = %self.path.display(), "cleared event log");
        Ok(())
    }
}
