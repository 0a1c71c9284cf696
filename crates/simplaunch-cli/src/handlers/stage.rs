//! Stage command handler: dependency staging without a run.

use simplaunch_core::LauncherConfig;
use simplaunch_runtime::{ArtifactResolver, DependencyStager};

use crate::error::CliError;

/// Execute the stage command.
///
/// Resolves the executable and stages its shared-library dependencies
/// beside it, then prints what happened.
pub fn execute(config: LauncherConfig) -> Result<(), CliError> {
    let resolver = ArtifactResolver::new(config.tool_root.clone(), config.tool_name.clone());
    let executable = resolver.resolve().map_err(CliError::from)?;
    println!("Found executable: {}", executable.display());

    let Some(exe_dir) = executable.parent() else {
        return Err(CliError::Io(format!(
            "executable has no parent directory: {}",
            executable.display()
        )));
    };

    let report = DependencyStager::new(config.staging).stage(exe_dir);

    for name in &report.copied {
        println!("✓ staged {name}");
    }
    for name in &report.present {
        println!("✓ {name} already present");
    }
    for warning in &report.warnings {
        println!("✗ {warning}");
    }

    if report.is_clean() && report.is_noop() && report.present.is_empty() {
        println!("Nothing to stage.");
    }

    Ok(())
}
