//! Executable resolution across build-output directories.
//!
//! The candidate list is ordered by priority: release outputs before debug,
//! generic build directories last. The resolver returns the first existing
//! candidate and never probes further; if none exists the caller aborts
//! before any invocation is attempted.

use std::path::PathBuf;

use simplaunch_core::platform::executable_suffix;
use simplaunch_core::{LaunchError, LaunchResult};
use tracing::debug;

/// Build-output directories probed for the executable, highest priority
/// first, relative to the tool root.
fn candidate_dirs() -> &'static [&'static str] {
    if cfg!(windows) {
        &[
            "cmake-build-release",
            "cmake-build-debug",
            "cmake-build-relwithdebinfo",
            "build/Release",
            "build",
        ]
    } else {
        &["build", "cmake-build-release"]
    }
}

/// Finds the prebuilt external executable under a tool root.
#[derive(Debug, Clone)]
pub struct ArtifactResolver {
    tool_root: PathBuf,
    tool_name: String,
}

impl ArtifactResolver {
    /// Create a resolver for `tool_name` under `tool_root`.
    pub fn new(tool_root: impl Into<PathBuf>, tool_name: impl Into<String>) -> Self {
        Self {
            tool_root: tool_root.into(),
            tool_name: tool_name.into(),
        }
    }

    /// Executable file name with the platform suffix applied.
    pub fn executable_name(&self) -> String {
        format!("{}{}", self.tool_name, executable_suffix())
    }

    /// Full candidate paths in probe order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let name = self.executable_name();
        candidate_dirs()
            .iter()
            .map(|dir| self.tool_root.join(dir).join(&name))
            .collect()
    }

    /// Return the first existing candidate, or fail with the probed list.
    pub fn resolve(&self) -> LaunchResult<PathBuf> {
        let candidates = self.candidates();
        match first_existing(candidates.iter().cloned()) {
            Some(path) => {
                debug!(path = %path.display(), "resolved executable");
                Ok(path)
            }
            None => Err(LaunchError::ResolutionFailed {
                name: self.executable_name(),
                searched: candidates,
            }),
        }
    }
}

/// First path in iteration order that exists as a file.
fn first_existing(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|path| path.is_file())
}
