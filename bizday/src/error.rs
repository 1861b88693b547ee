//! CLI error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Holiday data file could not be read
    #[error("Cannot read holiday file {path}: {source}")]
    HolidayFile {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Date, time or holiday data error
    #[error(transparent)]
    Core(#[from] bizday_core::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Nothing to export
    #[error("No {0} business day falls in the requested range; nothing to export")]
    EmptySchedule(String),
}
