//! Outcome of one external tool invocation.

use std::process::{ExitStatus, Output};

/// Captured result of a completed tool run.
///
/// Produced once per invocation, after the child has terminated and both
/// streams have been read to the end. Interpretation of `exit_code` is
/// platform-dependent and belongs to the diagnostics layer.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Raw exit code. On Unix, death by signal N is mapped to `-N`.
    pub exit_code: i32,
    /// Complete standard output of the child.
    pub stdout: String,
    /// Complete standard error of the child.
    pub stderr: String,
}

impl RunResult {
    /// Build a result from a finished child's captured output.
    pub fn from_output(output: Output) -> Self {
        Self {
            exit_code: exit_code_of(&output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Whether the tool reported success.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// The exit code as an unsigned 32-bit, 8-digit uppercase hex string.
    ///
    /// This is the form OS error-code tables use, so a Windows status like
    /// `-1073741515` renders as `C0000135`-style `00000000`-padded text.
    pub fn hex_code(&self) -> String {
        format!("{:08X}", self.exit_code as u32)
    }

    /// The stream most useful for failure reporting: stderr when the tool
    /// wrote anything there, stdout otherwise.
    pub fn failure_log(&self) -> &str {
        if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

/// Extract a plain integer exit code from an [`ExitStatus`].
fn exit_code_of(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    // No code means the child was killed by a signal (Unix only).
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    -1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(exit_code: i32, stdout: &str, stderr: &str) -> RunResult {
        RunResult {
            exit_code,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn success_only_for_zero() {
        assert!(result(0, "", "").success());
        assert!(!result(1, "", "").success());
        assert!(!result(-1073741515, "", "").success());
    }

    #[test]
    fn hex_code_is_eight_uppercase_digits() {
        assert_eq!(result(1, "", "").hex_code(), "00000001");
        assert_eq!(result(-1073741515, "", "").hex_code(), "C0000135");
    }

    #[test]
    fn failure_log_prefers_stderr() {
        assert_eq!(result(1, "out", "err").failure_log(), "err");
        assert_eq!(result(1, "out", "  \n").failure_log(), "out");
        assert_eq!(result(1, "out", "").failure_log(), "out");
    }
}
