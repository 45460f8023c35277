//! Watch command: redraws the status view at a fixed interval.
//!
//! Each tick re-checks the day rollover and recomputes the live elapsed time.
//! Ticks never credit time; only `stop` does.

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use punch_core::Clock;

use crate::Session;
use crate::commands::status;

/// ANSI sequence that clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Options for the redraw loop.
#[derive(Debug, Clone, Copy)]
pub struct WatchOptions {
    pub interval: Duration,
    /// Stop after this many redraws; `None` runs until interrupted.
    pub ticks: Option<u64>,
    /// Clear the screen before each redraw.
    pub clear: bool,
    pub recent: usize,
}

pub fn run<W: Write, C: Clock>(
    writer: &mut W,
    session: &mut Session<C>,
    options: WatchOptions,
) -> Result<()> {
    let mut drawn: u64 = 0;
    loop {
        if session.controller_mut().check_day_rollover()? {
            tracing::info!("day rolled over while watching");
            session.save()?;
        }
        if options.clear {
            write!(writer, "{CLEAR_SCREEN}")?;
        }
        status::render(writer, session.controller(), options.recent)?;
        writer.flush()?;

        drawn += 1;
        if options.ticks.is_some_and(|limit| drawn >= limit) {
            return Ok(());
        }
        thread::sleep(options.interval);
    }
}
