//! Status command: the running timer, totals, and recent log entries.

use std::io::Write;

use anyhow::Result;
use punch_core::{Clock, format_time};

use crate::Session;
use crate::session::Controller;

pub fn run<W: Write, C: Clock>(writer: &mut W, session: &Session<C>, recent: usize) -> Result<()> {
    render(writer, session.controller(), recent)
}

/// Draws the full status view. Reads only; never changes totals.
pub fn render<W: Write, C: Clock>(
    writer: &mut W,
    controller: &Controller<C>,
    recent: usize,
) -> Result<()> {
    match controller.tick() {
        Some(live) => writeln!(
            writer,
            "Running: {} for {} (since {})",
            live.activity,
            format_time(live.elapsed_secs),
            live.started_at.format("%I:%M %p")
        )?,
        None => writeln!(writer, "Idle: no timer running.")?,
    }
    writeln!(writer)?;

    let width = controller
        .activities()
        .iter()
        .map(|activity| activity.as_str().chars().count())
        .chain(["Activity".chars().count()])
        .max()
        .unwrap_or_default();
    let daily = controller.daily_totals();
    let weekly = controller.weekly_totals();

    writeln!(writer, "{:<width$}  {:>10}  {:>10}", "Activity", "Today", "Week")?;
    for (day, week) in daily.iter().zip(weekly.iter()) {
        writeln!(
            writer,
            "{:<width$}  {:>10}  {:>10}",
            day.activity.as_str(),
            format_time(day.seconds),
            format_time(week.seconds)
        )?;
    }
    writeln!(
        writer,
        "{:<width$}  {:>10}  {:>10}",
        "Total",
        format_time(daily.total()),
        format_time(weekly.total())
    )?;
    writeln!(writer)?;

    writeln!(writer, "Recent activity:")?;
    let entries = controller.recent_entries(recent)?;
    if entries.is_empty() {
        writeln!(writer, "  No activity logged yet.")?;
    }
    for entry in entries {
        writeln!(
            writer,
            "  {}  {}  {}",
            entry.timestamp, entry.subject, entry.event
        )?;
    }
    Ok(())
}
