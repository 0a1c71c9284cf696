//! Shared-library location on the host system.
//!
//! Finds a named library file by checking a configured directory first and
//! then every entry of the dynamic loader's search-path variable, in listed
//! order. Pure lookup, no side effects.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use simplaunch_core::platform::search_path_variable;
use tracing::debug;

/// Locates shared-library files without installing anything.
#[derive(Debug, Clone, Default)]
pub struct LibraryLocator {
    preferred_dir: Option<PathBuf>,
}

impl LibraryLocator {
    /// Create a locator that checks `preferred_dir` before the search path.
    pub fn new(preferred_dir: Option<PathBuf>) -> Self {
        Self { preferred_dir }
    }

    /// Find `filename`, returning the first existing full path.
    ///
    /// Checks the preferred directory first, then each entry of the host's
    /// library-search-path variable in order.
    pub fn locate(&self, filename: &str) -> Option<PathBuf> {
        if let Some(dir) = &self.preferred_dir {
            let candidate = dir.join(filename);
            if candidate.is_file() {
                debug!(path = %candidate.display(), "found in preferred directory");
                return Some(candidate);
            }
        }

        let raw = std::env::var_os(search_path_variable())?;
        locate_in_search_path(filename, &raw)
    }
}

/// Probe each entry of a raw search-path value for `filename`.
///
/// Entries wrapped in quotation characters are unwrapped and empty entries
/// are skipped. Takes the raw value as a parameter so tests can inject it.
pub fn locate_in_search_path(filename: &str, raw: &OsStr) -> Option<PathBuf> {
    for entry in std::env::split_paths(raw) {
        let text = entry.to_string_lossy();
        let trimmed = text.trim().trim_matches('"');
        if trimmed.is_empty() {
            continue;
        }
        let candidate = Path::new(trimmed).join(filename);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}
