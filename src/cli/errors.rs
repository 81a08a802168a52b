//! CLI-specific error types

use std::io;

use thiserror::Error;

use crate::store::StoreError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening the store failed
    #[error("failed to open store: {0}")]
    Store(#[from] StoreError),

    /// Server or runtime I/O failure
    #[error("{0}")]
    Io(#[from] io::Error),
}
