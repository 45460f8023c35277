//! Erase command with a confirm/cancel step.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use punch_core::Clock;

use crate::Session;

/// Erases the event log after confirmation read from `input`.
///
/// Returns whether the log was erased.
pub fn run<W: Write, R: BufRead, C: Clock>(
    writer: &mut W,
    input: &mut R,
    session: &mut Session<C>,
    yes: bool,
) -> Result<bool> {
    if !yes {
        write!(
            writer,
            "Erase the event log? This cannot be undone. [y/N] "
        )?;
        writer.flush()?;

        let mut answer = String::new();
        input
            .read_line(&mut answer)
            .context("failed to read confirmation")?;
        if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
            writeln!(writer, "Cancelled.")?;
            return Ok(false);
        }
    }

    session.controller_mut().erase_all()?;
    writeln!(writer, "Event log erased.")?;
    Ok(true)
}
