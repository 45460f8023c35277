//! Activities command: lists what can be timed.

use std::io::Write;

use anyhow::Result;
use punch_core::Clock;

use crate::Session;

pub fn run<W: Write, C: Clock>(writer: &mut W, session: &Session<C>) -> Result<()> {
    let controller = session.controller();
    let running = controller.state().activity();
    for activity in controller.activities() {
        let marker = if Some(activity) == running { "*" } else { " " };
        writeln!(writer, "{marker} {activity}")?;
    }
    Ok(())
}
