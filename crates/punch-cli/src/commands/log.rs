//! Log command: prints event log entries.

use std::io::Write;

use anyhow::Result;
use punch_core::Clock;

use crate::Session;

pub fn run<W: Write, C: Clock>(writer: &mut W, session: &Session<C>, limit: Option<usize>) -> Result<()> {
    let controller = session.controller();
    let entries = match limit {
        Some(limit) => controller.recent_entries(limit)?,
        None => controller.entries()?,
    };

    if entries.is_empty() {
        writeln!(writer, "No activity logged yet.")?;
        return Ok(());
    }

    let subject_width = entries
        .iter()
        .map(|entry| entry.subject.as_str().chars().count())
        .max()
        .unwrap_or_default();
    for entry in &entries {
        writeln!(
            writer,
            "{}  {:<subject_width$}  {:<10}  {}",
            entry.timestamp,
            entry.subject.as_str(),
            entry.event.as_str(),
            entry.elapsed_display()
        )?;
    }
    Ok(())
}
