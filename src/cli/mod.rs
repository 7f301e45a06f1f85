//! CLI module for bookshelf
//!
//! Provides the `serve` command: load configuration, set up logging, and run
//! the HTTP server until interrupted.

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
