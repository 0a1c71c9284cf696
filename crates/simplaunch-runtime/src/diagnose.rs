//! Exit-code classification and failure reporting.
//!
//! Pure reporting logic: nothing here mutates state or retries the run.
//! Classification is separated from printing and takes an explicit
//! [`OsFamily`] so every branch is testable on every host.

use std::path::Path;
use std::process::Stdio;

use simplaunch_core::{OsFamily, RunResult};
use tracing::{debug, warn};

/// `STATUS_DLL_NOT_FOUND`: the Windows loader could not resolve a required
/// shared library at process start. Observed as `3221225781` or
/// `-1073741515` - the same 32-bit pattern read unsigned or signed.
pub const STATUS_DLL_NOT_FOUND: u32 = 0xC000_0135;

/// Classified outcome of one tool run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Exit code 0.
    Success,
    /// Any other nonzero exit.
    Failure,
    /// The platform's dependency-load crash code.
    MissingDependency,
}

/// Classify a raw exit code for the given OS family.
pub fn classify(exit_code: i32, os: OsFamily) -> Outcome {
    if exit_code == 0 {
        Outcome::Success
    } else if os == OsFamily::Windows && exit_code as u32 == STATUS_DLL_NOT_FOUND {
        Outcome::MissingDependency
    } else {
        Outcome::Failure
    }
}

/// Turns a [`RunResult`] into console diagnostics for the operator.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    os: OsFamily,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostics {
    /// Diagnostics for the host OS.
    pub fn new() -> Self {
        Self {
            os: OsFamily::host(),
        }
    }

    /// Diagnostics for an explicit OS family (test seam).
    pub fn with_os(os: OsFamily) -> Self {
        Self { os }
    }

    /// Report the run's outcome on the console and return its class.
    ///
    /// On the dependency-load crash code this also relaunches the
    /// executable directly, outside capture, so the native loader dialog
    /// becomes visible. Errors from that secondary launch are caught and
    /// reported, never propagated.
    pub fn report(&self, executable: &Path, result: &RunResult, output_path: &Path) -> Outcome {
        let outcome = classify(result.exit_code, self.os);

        match outcome {
            Outcome::Success => {
                if !result.stdout.trim().is_empty() {
                    debug!("tool output:\n{}", result.stdout.trim_end());
                }
                println!("Success! Simplified model saved to {}", output_path.display());
            }
            Outcome::Failure | Outcome::MissingDependency => {
                eprintln!("{}", "=".repeat(40));
                eprintln!(
                    "External tool failed with exit code {} (hex {})",
                    result.exit_code,
                    result.hex_code()
                );
                eprintln!("{}", "=".repeat(40));

                let log = result.failure_log();
                if !log.trim().is_empty() {
                    eprintln!("--- tool output ---");
                    eprintln!("{}", log.trim_end());
                }

                if outcome == Outcome::MissingDependency {
                    self.report_missing_dependency(executable);
                }
            }
        }

        outcome
    }

    /// Extended guidance for the dependency-load crash.
    fn report_missing_dependency(&self, executable: &Path) {
        eprintln!();
        eprintln!("A required shared library is still missing (STATUS_DLL_NOT_FOUND).");
        eprintln!("Check the staging warnings above for libraries that could not be");
        eprintln!("found, and make sure the toolchain's bin directory is either on the");
        eprintln!("search path or configured as the toolchain bin dir.");
        eprintln!();
        eprintln!("Launching the tool directly so the native error dialog is visible...");

        if let Err(e) = launch_unattended(executable) {
            warn!(error = %e, "diagnostic launch failed");
            eprintln!("Could not start the diagnostic launch: {e}");
        }
    }
}

/// Start the executable without capturing anything, so OS-level error UI
/// can surface. The child is not waited on.
fn launch_unattended(executable: &Path) -> std::io::Result<()> {
    std::process::Command::new(executable)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_success_on_both_families() {
        assert_eq!(classify(0, OsFamily::Windows), Outcome::Success);
        assert_eq!(classify(0, OsFamily::Unix), Outcome::Success);
    }

    #[test]
    fn nonzero_is_generic_failure() {
        assert_eq!(classify(1, OsFamily::Windows), Outcome::Failure);
        assert_eq!(classify(-6, OsFamily::Unix), Outcome::Failure);
    }

    #[test]
    fn dll_not_found_code_is_distinguished_on_windows_only() {
        assert_eq!(
            classify(-1073741515, OsFamily::Windows),
            Outcome::MissingDependency
        );
        assert_eq!(classify(-1073741515, OsFamily::Unix), Outcome::Failure);
    }

    #[test]
    fn signed_code_matches_unsigned_status_constant() {
        assert_eq!((-1073741515i32) as u32, STATUS_DLL_NOT_FOUND);
        assert_eq!(3221225781u32, STATUS_DLL_NOT_FOUND);
    }
}
