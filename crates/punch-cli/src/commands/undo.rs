//! Undo command: removes the most recent log entry.

use std::io::Write;

use anyhow::Result;
use punch_core::Clock;

use crate::Session;

pub fn run<W: Write, C: Clock>(writer: &mut W, session: &mut Session<C>) -> Result<()> {
    match session.controller_mut().remove_last_entry()? {
        Some(entry) => writeln!(
            writer,
            "Removed: {}  {}  {}",
            entry.timestamp, entry.subject, entry.event
        )?,
        None => writeln!(writer, "Log is empty.")?,
    }
    Ok(())
}
