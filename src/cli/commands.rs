//! CLI command implementations
//!
//! `serve` owns process setup: tracing subscriber, Tokio runtime, store and
//! server construction. Nothing here is reachable from the HTTP handlers.

use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Dispatch a parsed CLI invocation.
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Serve { host, port, db } => serve(host, port, db),
    }
}

/// Run the HTTP server until it exits.
fn serve(host: String, port: u16, db: String) -> CliResult<()> {
    init_tracing();

    let config = HttpServerConfig {
        host,
        port,
        db_path: db,
        ..Default::default()
    };

    let server = HttpServer::new(config)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

/// Install the global tracing subscriber; `RUST_LOG` overrides the default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
