//! Platform facts the launcher depends on.
//!
//! Everything here is a pure query; exit-code classification takes an
//! explicit [`OsFamily`] so it can be exercised on any host.

/// Broad OS family, as far as exit-code semantics are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    /// Windows NT status codes (e.g. `STATUS_DLL_NOT_FOUND`) apply.
    Windows,
    /// POSIX exit/signal conventions apply.
    Unix,
}

impl OsFamily {
    /// The family of the host the launcher is running on.
    pub fn host() -> Self {
        if cfg!(windows) {
            OsFamily::Windows
        } else {
            OsFamily::Unix
        }
    }
}

/// File extension of shared libraries on the host platform (without the dot).
pub fn shared_library_extension() -> &'static str {
    if cfg!(windows) {
        "dll"
    } else if cfg!(target_os = "macos") {
        "dylib"
    } else {
        "so"
    }
}

/// Suffix appended to executable base names on the host platform.
pub fn executable_suffix() -> &'static str {
    if cfg!(windows) { ".exe" } else { "" }
}

/// Name of the environment variable the dynamic loader consults when
/// resolving shared libraries.
///
/// On Windows the DLL search path includes `PATH`, which is also where
/// toolchain runtime DLLs are normally found.
pub fn search_path_variable() -> &'static str {
    if cfg!(windows) {
        "PATH"
    } else if cfg!(target_os = "macos") {
        "DYLD_LIBRARY_PATH"
    } else {
        "LD_LIBRARY_PATH"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_family_matches_cfg() {
        let family = OsFamily::host();
        if cfg!(windows) {
            assert_eq!(family, OsFamily::Windows);
        } else {
            assert_eq!(family, OsFamily::Unix);
        }
    }

    #[test]
    fn executable_suffix_is_exe_only_on_windows() {
        if cfg!(windows) {
            assert_eq!(executable_suffix(), ".exe");
        } else {
            assert_eq!(executable_suffix(), "");
        }
    }

    #[test]
    fn shared_library_extension_has_no_dot() {
        assert!(!shared_library_extension().contains('.'));
    }
}
