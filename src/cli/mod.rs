//! CLI module for eggs
//!
//! Provides the command-line interface:
//! - serve: open the store and run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run_command;
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch to the matching command.
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}
