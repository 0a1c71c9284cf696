//! Paths command handler.
//!
//! Displays the resolved configuration and every candidate executable
//! path. This is the first stop for "why was nothing found" questions.

use simplaunch_core::LauncherConfig;
use simplaunch_runtime::ArtifactResolver;

use crate::error::CliError;

/// Execute the paths command.
pub fn execute(config: LauncherConfig) -> Result<(), CliError> {
    println!("tool_name = {}", config.tool_name);
    println!("tool_root = {}", config.tool_root.display());

    println!();
    println!("Candidate executable paths, in probe order:");
    let resolver = ArtifactResolver::new(config.tool_root.clone(), config.tool_name.clone());
    for candidate in resolver.candidates() {
        let marker = if candidate.is_file() { "✓" } else { "✗" };
        println!("  {marker} {}", candidate.display());
    }

    println!();
    match &config.staging.vendor_bin_dir {
        Some(dir) => println!("vendor_bin_dir = {}", dir.display()),
        None => println!("vendor_bin_dir = (not configured)"),
    }
    match &config.staging.toolchain_bin_dir {
        Some(dir) => println!("toolchain_bin_dir = {}", dir.display()),
        None => println!("toolchain_bin_dir = (not configured)"),
    }
    if config.staging.runtime_libs.is_empty() {
        println!("runtime_libs = (none)");
    } else {
        println!("runtime_libs = {}", config.staging.runtime_libs.join(", "));
    }

    Ok(())
}
