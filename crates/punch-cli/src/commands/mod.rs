//! CLI subcommand implementations.

pub mod activities;
pub mod erase;
pub mod export;
pub mod log;
pub mod reset;
pub mod start;
pub mod status;
pub mod stop;
pub mod undo;
pub mod watch;
