//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Personal activity timer.
///
/// Start and stop named activity timers, see how much time each activity got
/// today and this week, and export the event log as CSV.
#[derive(Debug, Parser)]
#[command(name = "punch", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the timer for an activity.
    Start {
        /// Activity name (case-insensitive).
        activity: String,

        /// Stop the running timer first instead of refusing.
        #[arg(long)]
        switch: bool,
    },

    /// Stop the running timer and credit its time.
    Stop,

    /// Show the running timer, totals and recent log entries.
    Status,

    /// Redraw the status at a fixed interval until interrupted.
    Watch {
        /// Redraw interval in milliseconds (defaults to the configured value).
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Stop after this many redraws.
        #[arg(long)]
        ticks: Option<u64>,
    },

    /// Zero today's totals.
    ResetDay,

    /// Zero this week's totals.
    ResetWeek,

    /// Erase the event log.
    Erase {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Remove the most recent log entry.
    Undo,

    /// Print log entries.
    Log {
        /// Only show the most recent N entries.
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Export the event log or aggregated totals as CSV.
    Export {
        /// Export per-activity totals for a period instead of the log.
        #[arg(long, value_enum)]
        totals: Option<TotalsPeriod>,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the configured activities.
    Activities,
}

/// Which totals to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TotalsPeriod {
    Day,
    Week,
}
