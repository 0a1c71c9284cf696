//! Error type of the CLI adapter.
//!
//! Maps every [`LaunchError`] onto a user-facing message and a
//! sysexits-style process exit code.

use simplaunch_core::LaunchError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing or validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The input model does not exist.
    #[error("{0}")]
    Input(String),

    /// No executable candidate exists.
    #[error("{0}")]
    Resolution(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Process execution error.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Arguments(_) => 2,  // EX_USAGE
            CliError::Input(_) => 66,     // EX_NOINPUT
            CliError::Resolution(_) => 69, // EX_UNAVAILABLE
            CliError::Io(_) => 74,        // EX_IOERR
            CliError::Config(_) => 78,    // EX_CONFIG
            CliError::Process(_) => 71,   // EX_OSERR
        }
    }
}

impl From<LaunchError> for CliError {
    fn from(err: LaunchError) -> Self {
        match err {
            LaunchError::ResolutionFailed { .. } => CliError::Resolution(err.to_string()),
            LaunchError::InputMissing { .. } => CliError::Input(err.to_string()),
            LaunchError::InvalidParameter { .. } => CliError::Arguments(err.to_string()),
            LaunchError::OutputDirFailed { .. } | LaunchError::Io(_) => {
                CliError::Io(err.to_string())
            }
            LaunchError::SpawnFailed { .. } => CliError::Process(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}
