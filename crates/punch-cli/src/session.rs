//! Opening a timer session from configuration.
//!
//! Each `punch` invocation is one pass of the presentation loop: open the
//! controller, restore totals, drop a timer left over from an earlier day,
//! run the command, and save the session snapshot again.

use anyhow::{Context, Result};
use punch_core::{Clock, SystemClock, TimerController};
use punch_store::{CsvEventLog, CsvStateStore, DataDir, SessionFile};

use crate::Config;

/// Controller type backed by the CSV files in the data directory.
pub type Controller<C = SystemClock> = TimerController<CsvEventLog, CsvStateStore, C>;

/// A controller together with the file its totals are saved to.
pub struct Session<C = SystemClock> {
    controller: Controller<C>,
    session_file: SessionFile,
}

impl Session {
    /// Opens the session described by `config` using the system clock.
    pub fn open(config: &Config) -> Result<Self> {
        Self::open_with_clock(config, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    /// Opens the session described by `config` using `clock`.
    pub fn open_with_clock(config: &Config, clock: C) -> Result<Self> {
        let activities = config
            .activities()
            .context("invalid activity configuration")?;
        let data_dir = DataDir::new(&config.data_dir);

        let mut controller = TimerController::open(
            activities,
            data_dir.event_log(),
            data_dir.state_store(),
            clock,
        )
        .with_context(|| format!("failed to open timer in {}", config.data_dir.display()))?;

        let session_file = data_dir.session_file();
        if let Some(snapshot) = session_file.load().context("failed to load session")? {
            controller.restore(&snapshot);
        }
        if controller
            .check_day_rollover()
            .context("failed to apply day rollover")?
        {
            tracing::debug!(today = %controller.last_active_date(), "new day since last interaction");
        }

        Ok(Self {
            controller,
            session_file,
        })
    }

    pub const fn controller(&self) -> &Controller<C> {
        &self.controller
    }

    pub const fn controller_mut(&mut self) -> &mut Controller<C> {
        &mut self.controller
    }

    /// Writes totals and the last active date back to disk.
    pub fn save(&self) -> Result<()> {
        self.session_file
            .save(&self.controller.snapshot())
            .context("failed to save session")
    }
}
