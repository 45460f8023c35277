//! Stop command.

use std::io::Write;

use anyhow::Result;
use punch_core::{Clock, format_time};

use crate::Session;

pub fn run<W: Write, C: Clock>(writer: &mut W, session: &mut Session<C>) -> Result<()> {
    let stopped = session.controller_mut().stop()?;
    session.save()?;

    match stopped {
        Some(stopped) => {
            let today = session.controller().daily_totals().get(&stopped.activity);
            writeln!(
                writer,
                "Stopped {} after {} ({} today).",
                stopped.activity,
                format_time(stopped.elapsed_secs),
                format_time(today)
            )?;
        }
        None => writeln!(writer, "No timer running.")?,
    }
    Ok(())
}
