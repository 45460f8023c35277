//! Reset commands for daily and weekly totals.

use std::io::Write;

use anyhow::Result;
use punch_core::Clock;

use crate::Session;

pub fn run_day<W: Write, C: Clock>(writer: &mut W, session: &mut Session<C>) -> Result<()> {
    session.controller_mut().reset_day()?;
    session.save()?;
    writeln!(writer, "Daily totals reset.")?;
    Ok(())
}

pub fn run_week<W: Write, C: Clock>(writer: &mut W, session: &mut Session<C>) -> Result<()> {
    session.controller_mut().reset_week()?;
    session.save()?;
    writeln!(writer, "Weekly totals reset.")?;
    Ok(())
}
