//! Run command handler: the full launch pipeline.

use simplaunch_core::{LauncherConfig, ToolInvocation};
use simplaunch_runtime::{Diagnostics, Outcome, ToolLauncher};
use tracing::debug;

use crate::error::CliError;

/// Execute the run command.
///
/// Resolves the tool, stages its dependencies, runs the invocation and
/// reports the classified outcome. A nonzero tool exit is returned as an
/// [`Outcome`], not an error - the caller maps it to the process exit code.
pub async fn execute(
    config: LauncherConfig,
    invocation: ToolInvocation,
) -> Result<Outcome, CliError> {
    println!(
        "Simplifying {} -> {}",
        invocation.input().display(),
        invocation.output().display()
    );

    let launcher = ToolLauncher::new(config);
    let summary = launcher.launch(&invocation).await?;
    debug!(
        executable = %summary.executable.display(),
        exit_code = summary.result.exit_code,
        "launch complete"
    );

    if !summary.staging.copied.is_empty() {
        println!(
            "Staged {} shared librar{} next to the tool",
            summary.staging.copied.len(),
            if summary.staging.copied.len() == 1 { "y" } else { "ies" }
        );
    }
    if !summary.staging.warnings.is_empty() {
        println!(
            "{} staging warning(s); the tool may fail to load - see the log above",
            summary.staging.warnings.len()
        );
    }

    let outcome = Diagnostics::new().report(&summary.executable, &summary.result, invocation.output());
    Ok(outcome)
}
