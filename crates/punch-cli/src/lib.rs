//! Punch activity timer CLI library.
//!
//! This crate provides the command-line presentation layer: it opens a timer
//! session from configuration and maps user intents onto the controller.

mod cli;
pub mod commands;
mod config;
mod session;

pub use cli::{Cli, Commands, TotalsPeriod};
pub use config::{Config, dirs_data_path};
pub use session::{Controller, Session};
