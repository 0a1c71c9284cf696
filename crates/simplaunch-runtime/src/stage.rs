//! Dependency staging: copy shared libraries next to the executable.
//!
//! Staging is best-effort by contract. A library that cannot be listed,
//! located or copied becomes a warning in the report, never an error - if
//! the miss matters, the tool fails at load time and diagnostics classifies
//! that exit. Presence wins over freshness: a file already at the
//! destination is never overwritten.

use std::fs;
use std::path::Path;

use simplaunch_core::StagingConfig;
use simplaunch_core::platform::shared_library_extension;
use tracing::{debug, warn};

use crate::locate::LibraryLocator;

/// What one staging pass did, and what it could not do.
///
/// Warnings are returned rather than swallowed so callers decide whether to
/// proceed.
#[derive(Debug, Clone, Default)]
pub struct StagingReport {
    /// File names copied into the destination this pass.
    pub copied: Vec<String>,
    /// File names that were already present and left untouched.
    pub present: Vec<String>,
    /// Dependencies that could not be staged, with the reason.
    pub warnings: Vec<String>,
}

impl StagingReport {
    /// True when nothing went wrong (copies may still have happened).
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// True when the pass changed nothing on disk.
    pub fn is_noop(&self) -> bool {
        self.copied.is_empty()
    }
}

/// Copies the tool's shared-library dependencies beside it.
#[derive(Debug, Clone)]
pub struct DependencyStager {
    config: StagingConfig,
    locator: LibraryLocator,
}

impl DependencyStager {
    /// Create a stager for the given staging configuration.
    pub fn new(config: StagingConfig) -> Self {
        let locator = LibraryLocator::new(config.toolchain_bin_dir.clone());
        Self { config, locator }
    }

    /// Stage every configured dependency into `exe_dir`.
    ///
    /// Idempotent: re-running against a fully staged directory performs no
    /// writes.
    pub fn stage(&self, exe_dir: &Path) -> StagingReport {
        let mut report = StagingReport::default();
        self.stage_vendor_libraries(exe_dir, &mut report);
        self.stage_runtime_libraries(exe_dir, &mut report);
        debug!(
            copied = report.copied.len(),
            present = report.present.len(),
            warnings = report.warnings.len(),
            "staging pass finished"
        );
        report
    }

    /// Copy every shared-library file from the vendor directory.
    fn stage_vendor_libraries(&self, exe_dir: &Path, report: &mut StagingReport) {
        let Some(vendor_dir) = &self.config.vendor_bin_dir else {
            return;
        };
        if !vendor_dir.is_dir() {
            push_warning(
                report,
                format!("vendor bin dir not found: {}", vendor_dir.display()),
            );
            return;
        }

        let entries = match fs::read_dir(vendor_dir) {
            Ok(entries) => entries,
            Err(e) => {
                push_warning(
                    report,
                    format!("failed to list {}: {e}", vendor_dir.display()),
                );
                return;
            }
        };

        for entry in entries.flatten() {
            let src = entry.path();
            if !src.is_file() || !is_shared_library(&src) {
                continue;
            }
            let Some(name) = file_name_of(&src) else {
                continue;
            };
            copy_unless_present(&src, &exe_dir.join(&name), name, report);
        }
    }

    /// Ensure each fixed runtime library is present, locating absentees on
    /// the system.
    fn stage_runtime_libraries(&self, exe_dir: &Path, report: &mut StagingReport) {
        for lib in &self.config.runtime_libs {
            let dst = exe_dir.join(lib);
            if dst.exists() {
                report.present.push(lib.clone());
                continue;
            }

            match self.locator.locate(lib) {
                Some(src) => {
                    debug!(lib = %lib, src = %src.display(), "found runtime library");
                    copy_unless_present(&src, &dst, lib.clone(), report);
                }
                None => {
                    push_warning(
                        report,
                        format!("could not find {lib} on the library search path"),
                    );
                }
            }
        }
    }
}

/// Copy `src` to `dst` unless `dst` already exists.
fn copy_unless_present(src: &Path, dst: &Path, name: String, report: &mut StagingReport) {
    if dst.exists() {
        report.present.push(name);
        return;
    }
    match fs::copy(src, dst) {
        Ok(_) => report.copied.push(name),
        Err(e) => push_warning(
            report,
            format!("failed to copy {} to {}: {e}", src.display(), dst.display()),
        ),
    }
}

fn push_warning(report: &mut StagingReport, message: String) {
    warn!("{message}");
    report.warnings.push(message);
}

/// Whether the file carries the host's shared-library extension.
///
/// Case-insensitive: Windows directories mix `.dll` and `.DLL`.
fn is_shared_library(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(shared_library_extension()))
}

fn file_name_of(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn lib_name(stem: &str) -> String {
        format!("{stem}.{}", shared_library_extension())
    }

    fn config(vendor: Option<PathBuf>, toolchain: Option<PathBuf>, libs: &[&str]) -> StagingConfig {
        StagingConfig {
            vendor_bin_dir: vendor,
            toolchain_bin_dir: toolchain,
            runtime_libs: libs.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn copies_vendor_libraries_once() {
        let vendor = tempdir().unwrap();
        let dest = tempdir().unwrap();
        fs::write(vendor.path().join(lib_name("liba")), b"a").unwrap();
        fs::write(vendor.path().join(lib_name("libb")), b"b").unwrap();
        fs::write(vendor.path().join("readme.txt"), b"not a lib").unwrap();

        let stager = DependencyStager::new(config(
            Some(vendor.path().to_path_buf()),
            None,
            &[],
        ));

        let first = stager.stage(dest.path());
        assert!(first.is_clean());
        assert_eq!(first.copied.len(), 2);
        assert!(dest.path().join(lib_name("liba")).exists());
        assert!(!dest.path().join("readme.txt").exists());

        let second = stager.stage(dest.path());
        assert!(second.is_clean());
        assert!(second.is_noop());
        assert_eq!(second.present.len(), 2);
    }

    #[test]
    fn never_overwrites_existing_destination_files() {
        let vendor = tempdir().unwrap();
        let dest = tempdir().unwrap();
        let name = lib_name("liba");
        fs::write(vendor.path().join(&name), b"new contents").unwrap();
        fs::write(dest.path().join(&name), b"original").unwrap();

        let stager =
            DependencyStager::new(config(Some(vendor.path().to_path_buf()), None, &[]));
        let report = stager.stage(dest.path());

        assert!(report.copied.is_empty());
        assert_eq!(report.present, vec![name.clone()]);
        assert_eq!(fs::read(dest.path().join(&name)).unwrap(), b"original");
    }

    #[test]
    fn stages_runtime_libraries_from_toolchain_dir() {
        let toolchain = tempdir().unwrap();
        let dest = tempdir().unwrap();
        let name = lib_name("libruntime");
        fs::write(toolchain.path().join(&name), b"rt").unwrap();

        let stager = DependencyStager::new(config(
            None,
            Some(toolchain.path().to_path_buf()),
            &[&name],
        ));
        let report = stager.stage(dest.path());

        assert!(report.is_clean());
        assert_eq!(report.copied, vec![name.clone()]);
        assert!(dest.path().join(&name).exists());
    }

    #[test]
    fn missing_runtime_library_is_a_warning_not_an_error() {
        let dest = tempdir().unwrap();
        let stager = DependencyStager::new(config(None, None, &["libnowhere.quux"]));
        let report = stager.stage(dest.path());

        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("libnowhere.quux"));
    }

    #[test]
    fn missing_vendor_dir_is_a_warning_not_an_error() {
        let dest = tempdir().unwrap();
        let stager = DependencyStager::new(config(
            Some(PathBuf::from("/definitely/not/here")),
            None,
            &[],
        ));
        let report = stager.stage(dest.path());

        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("vendor bin dir"));
    }
}
