//! Error types for launcher operations.
//!
//! This module provides a unified error type for resolution, staging and
//! invocation, keeping error plumbing out of orchestration modules.
//!
//! A nonzero exit from the external tool is NOT an error here - a completed
//! child process is a valid [`crate::RunResult`] and is classified by the
//! diagnostics layer instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing for or starting a tool run.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// No candidate build directory contained the executable.
    #[error(
        "executable '{name}' not found; searched: {}",
        .searched.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
    )]
    ResolutionFailed {
        /// Executable file name (with platform suffix) that was probed for
        name: String,
        /// Every path that was checked, in priority order
        searched: Vec<PathBuf>,
    },

    /// The input model does not exist; no child process was spawned.
    #[error("input model not found: {path} (absolute: {absolute})")]
    InputMissing {
        /// Path exactly as the caller provided it
        path: PathBuf,
        /// The same path in absolute form
        absolute: PathBuf,
    },

    /// The output directory could not be created before invocation.
    #[error("failed to create output directory {path}: {reason}")]
    OutputDirFailed { path: PathBuf, reason: String },

    /// The child process could not be started at all.
    #[error("failed to start '{program}': {reason}")]
    SpawnFailed { program: PathBuf, reason: String },

    /// A numeric parameter cannot be rendered as decimal text.
    #[error("{name} must be a finite number, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for launcher operations
pub type LaunchResult<T> = Result<T, LaunchError>;
