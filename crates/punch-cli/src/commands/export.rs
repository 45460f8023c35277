//! Export command: the event log or per-activity totals as CSV.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use punch_core::Clock;
use punch_store::export::{DAILY_EXPORT_NAME, LIFETIME_EXPORT_NAME, WEEKLY_EXPORT_NAME};
use punch_store::{export_log, export_totals};

use crate::Session;
use crate::cli::TotalsPeriod;

/// Suggested file name for an export of the given kind.
pub const fn suggested_file_name(totals: Option<TotalsPeriod>) -> &'static str {
    match totals {
        None => LIFETIME_EXPORT_NAME,
        Some(TotalsPeriod::Day) => DAILY_EXPORT_NAME,
        Some(TotalsPeriod::Week) => WEEKLY_EXPORT_NAME,
    }
}

/// Writes the export to `output`, or to `writer` when no path is given.
pub fn run<W: Write, C: Clock>(
    writer: &mut W,
    session: &Session<C>,
    totals: Option<TotalsPeriod>,
    output: Option<&Path>,
) -> Result<()> {
    let controller = session.controller();
    let bytes = match totals {
        None => export_log(&controller.entries()?),
        Some(TotalsPeriod::Day) => export_totals(controller.daily_totals()),
        Some(TotalsPeriod::Week) => export_totals(controller.weekly_totals()),
    }
    .context("failed to encode export")?;

    match output {
        Some(path) => {
            std::fs::write(path, &bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "export written");
            writeln!(writer, "Exported to {}", path.display())?;
        }
        None => writer.write_all(&bytes)?,
    }
    Ok(())
}
