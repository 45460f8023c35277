use std::io::{self, IsTerminal};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use punch_cli::commands::watch::WatchOptions;
use punch_cli::commands::{activities, erase, export, log, reset, start, status, stop, undo, watch};
use punch_cli::{Cli, Commands, Config, Session};

/// Load config and open the timer session, ensuring the data directory exists.
fn open_session(config_path: Option<&Path>) -> Result<(Session, Config)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    std::fs::create_dir_all(&config.data_dir).context("failed to create data directory")?;

    let session = Session::open(&config)?;
    Ok((session, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let (mut session, config) = open_session(cli.config.as_deref())?;
    let result = dispatch(command, &mut session, &config);
    // Rollover applied on open is saved even when the command fails.
    session.save()?;
    result
}

fn dispatch(command: &Commands, session: &mut Session, config: &Config) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Start { activity, switch } => {
            start::run(&mut stdout, session, activity, *switch)?;
        }
        Commands::Stop => stop::run(&mut stdout, session)?,
        Commands::Status => status::run(&mut stdout, session, config.recent_entries)?,
        Commands::Watch { interval_ms, ticks } => {
            let options = WatchOptions {
                interval: Duration::from_millis(interval_ms.unwrap_or(config.refresh_interval_ms)),
                ticks: *ticks,
                clear: io::stdout().is_terminal(),
                recent: config.recent_entries,
            };
            watch::run(&mut stdout, session, options)?;
        }
        Commands::ResetDay => reset::run_day(&mut stdout, session)?,
        Commands::ResetWeek => reset::run_week(&mut stdout, session)?,
        Commands::Erase { yes } => {
            erase::run(&mut stdout, &mut io::stdin().lock(), session, *yes)?;
        }
        Commands::Undo => undo::run(&mut stdout, session)?,
        Commands::Log { limit } => log::run(&mut stdout, session, *limit)?,
        Commands::Export { totals, output } => {
            export::run(&mut stdout, session, *totals, output.as_deref())?;
        }
        Commands::Activities => activities::run(&mut stdout, session)?,
    }

    Ok(())
}
