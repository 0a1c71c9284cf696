//! Child-process invocation of the external tool.
//!
//! The one suspension point of the whole launcher lives here: the child is
//! run to completion and both streams are captured in full before control
//! returns. No streaming, no timeout, no cancellation.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use simplaunch_core::{LaunchError, LaunchResult, RunResult, ToolInvocation, ToolRunner};
use tokio::process::Command;
use tracing::debug;

/// Process backend that actually spawns the external tool.
#[derive(Debug, Clone, Default)]
pub struct Invoker;

impl Invoker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ToolRunner for Invoker {
    async fn run(&self, executable: &Path, invocation: &ToolInvocation) -> LaunchResult<RunResult> {
        run_tool(executable, invocation).await
    }
}

/// Run the tool to completion with the invocation's argument vector.
///
/// Preconditions enforced here: the input model exists, and the output
/// path's parent directories are created before the child is spawned - an
/// invocation never fails solely because the output directory was absent.
pub async fn run_tool(
    executable: &Path,
    invocation: &ToolInvocation,
) -> LaunchResult<RunResult> {
    ensure_input_exists(invocation.input())?;
    ensure_output_parent(invocation.output())?;

    let args = invocation.to_args();
    debug!(
        program = %executable.display(),
        args = %args.join(" "),
        "executing external tool"
    );

    let output = Command::new(executable)
        .args(&args)
        .output()
        .await
        .map_err(|e| LaunchError::SpawnFailed {
            program: executable.to_path_buf(),
            reason: e.to_string(),
        })?;

    Ok(RunResult::from_output(output))
}

/// Verify the input model exists, reporting relative and absolute form.
pub fn ensure_input_exists(path: &Path) -> LaunchResult<()> {
    if path.exists() {
        return Ok(());
    }
    Err(LaunchError::InputMissing {
        path: path.to_path_buf(),
        absolute: absolute_form(path),
    })
}

/// Create the output path's parent directories when missing.
pub fn ensure_output_parent(path: &Path) -> LaunchResult<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.exists() {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|e| LaunchError::OutputDirFailed {
        path: parent.to_path_buf(),
        reason: e.to_string(),
    })
}

fn absolute_form(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
