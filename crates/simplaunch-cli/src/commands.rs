//! Subcommands and shared argument groups.

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration overrides shared by every subcommand.
///
/// Flags win over environment variables, which win over the config file.
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Directory containing the tool's build outputs
    #[arg(long, env = "SIMPLAUNCH_TOOL_ROOT")]
    pub tool_root: Option<PathBuf>,

    /// Directory of prebuilt third-party shared libraries to stage
    #[arg(long, env = "SIMPLAUNCH_VENDOR_BIN")]
    pub vendor_bin: Option<PathBuf>,

    /// Directory checked first when locating runtime libraries
    #[arg(long, env = "SIMPLAUNCH_TOOLCHAIN_BIN")]
    pub toolchain_bin: Option<PathBuf>,
}

/// Available commands for the simplifier launcher.
#[derive(Subcommand)]
pub enum Commands {
    /// Simplify a model with the external tool
    Run {
        /// Path to the input model
        input: PathBuf,

        /// Path where the simplified model is written
        output: PathBuf,

        /// Target triangle ratio
        #[arg(short, long, default_value_t = 0.5)]
        ratio: f64,

        /// Normal-preservation weight
        #[arg(long, default_value_t = 0.1)]
        normal_weight: f64,

        /// UV-preservation weight
        #[arg(long, default_value_t = 0.1)]
        uv_weight: f64,

        /// Boundary-preservation weight (enables the six-parameter tool contract)
        #[arg(long)]
        boundary_weight: Option<f64>,

        /// Skip dependency staging before the run
        #[arg(long)]
        no_stage: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Stage shared-library dependencies next to the resolved executable
    Stage {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Show resolved configuration and candidate executable paths
    Paths {
        #[command(flatten)]
        config: ConfigArgs,
    },
}
