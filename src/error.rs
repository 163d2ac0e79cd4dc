//! Application-level error types.
//!
//! Wraps library errors with the CLI and manifest failures that only occur
//! at the application boundary.

use thiserror::Error;

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for the command-line application
#[derive(Error, Debug)]
pub enum AppError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Descriptor generation errors
    #[error("Generation error: {0}")]
    IzPack(#[from] crate::izpack::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl AppError {
    /// Process exit code for this error.
    ///
    /// Argument problems exit with 2, everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Cli(CliError::InvalidArguments { .. }) => 2,
            _ => 1,
        }
    }
}
