//! Configuration assembly for the CLI.
//!
//! Precedence, lowest to highest: built-in defaults, config file, then the
//! per-invocation overrides (clap folds `SIMPLAUNCH_*` environment
//! variables into those flags).

use std::path::Path;

use simplaunch_core::LauncherConfig;

use crate::commands::ConfigArgs;
use crate::error::CliError;

/// Build the launcher configuration for one invocation.
pub fn build_config(
    config_file: Option<&Path>,
    args: &ConfigArgs,
) -> Result<LauncherConfig, CliError> {
    let mut config = match config_file {
        Some(path) => {
            LauncherConfig::load(path).map_err(|e| CliError::Config(format!("{e:#}")))?
        }
        None => LauncherConfig::default(),
    };

    if let Some(root) = &args.tool_root {
        config.tool_root = root.clone();
    }
    if let Some(dir) = &args.vendor_bin {
        config.staging.vendor_bin_dir = Some(dir.clone());
    }
    if let Some(dir) = &args.toolchain_bin {
        config.staging.toolchain_bin_dir = Some(dir.clone());
    }

    Ok(config)
}
