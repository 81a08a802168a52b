//! CLI argument definitions using clap
//!
//! Commands:
//! - eggs serve [--host <host>] [--port <port>] [--db <path>]

use clap::{Parser, Subcommand};

/// eggs - a small HTTP service for managing lists and their items
#[derive(Parser, Debug)]
#[command(name = "eggs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 8000)]
        port: u16,

        /// Path to the SQLite database file
        #[arg(long, default_value = "lists.db")]
        db: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
