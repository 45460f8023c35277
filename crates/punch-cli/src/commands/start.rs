//! Start command.

use std::io::Write;

use anyhow::Result;
use punch_core::{Clock, format_time};

use crate::Session;

/// Starts `activity`, optionally stopping the running timer first.
pub fn run<W: Write, C: Clock>(
    writer: &mut W,
    session: &mut Session<C>,
    activity: &str,
    switch: bool,
) -> Result<()> {
    let stopped = if switch {
        session.controller_mut().switch_to(activity)?
    } else {
        session.controller_mut().start(activity)?;
        None
    };
    session.save()?;

    if let Some(stopped) = stopped {
        writeln!(
            writer,
            "Stopped {} after {}.",
            stopped.activity,
            format_time(stopped.elapsed_secs)
        )?;
    }
    if let Some(running) = session.controller().state().activity() {
        writeln!(writer, "Started {running}.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use punch_core::{Activity, TimerError};

    use super::*;
    use crate::commands::testing::{ClosedPipe, TestSession, output};

    #[test]
    fn start_reports_canonical_name() {
        let test = TestSession::new();
        let mut session = test.open();
        let mut out = Vec::new();

        run(&mut out, &mut session, "coding", false).unwrap();
        assert_eq!(output(out), "Started Coding.\n");
    }

    #[test]
    fn start_while_running_fails() {
        let test = TestSession::new();
        let mut session = test.open();
        run(&mut Vec::new(), &mut session, "Coding", false).unwrap();

        let err = run(&mut Vec::new(), &mut session, "Writing", false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TimerError>(),
            Some(TimerError::AlreadyRunning { .. })
        ));
    }

    #[test]
    fn switch_reports_stopped_timer() {
        let test = TestSession::new();
        let mut session = test.open();
        run(&mut Vec::new(), &mut session, "Coding", false).unwrap();
        test.clock.advance(Duration::seconds(65));

        let mut out = Vec::new();
        run(&mut out, &mut session, "Writing", true).unwrap();
        assert_eq!(output(out), "Stopped Coding after 1m 5s.\nStarted Writing.\n");
    }

    #[test]
    fn switch_credit_is_saved_before_output_fails() {
        let test = TestSession::new();
        let mut session = test.open();
        run(&mut Vec::new(), &mut session, "Coding", false).unwrap();
        test.clock.advance(Duration::seconds(40));

        assert!(run(&mut ClosedPipe, &mut session, "Writing", true).is_err());
        drop(session);

        let reopened = test.open();
        let coding = Activity::new("Coding").unwrap();
        assert_eq!(reopened.controller().daily_totals().get(&coding), 40);
        assert_eq!(
            reopened.controller().state().activity().map(Activity::as_str),
            Some("Writing")
        );
    }
}
