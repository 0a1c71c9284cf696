//! End-to-end launch orchestration.
//!
//! One parameterized implementation of the resolve -> stage -> invoke
//! pipeline, generic over the runner port so tests can observe invocation
//! attempts without spawning anything. Staging warnings are carried in the
//! summary; they never abort the run.

use std::path::PathBuf;

use simplaunch_core::{LaunchResult, LauncherConfig, RunResult, ToolInvocation, ToolRunner};
use tracing::{info, warn};

use crate::invoke::{Invoker, ensure_input_exists};
use crate::resolve::ArtifactResolver;
use crate::stage::{DependencyStager, StagingReport};

/// Everything one launch produced.
#[derive(Debug, Clone)]
pub struct LaunchSummary {
    /// The executable that was resolved and run.
    pub executable: PathBuf,
    /// What staging did before the run (empty when staging is disabled).
    pub staging: StagingReport,
    /// Captured result of the tool run.
    pub result: RunResult,
}

/// Composes resolver, stager and runner into one launch pipeline.
pub struct ToolLauncher<R: ToolRunner> {
    config: LauncherConfig,
    runner: R,
}

impl ToolLauncher<Invoker> {
    /// Launcher with the real process backend.
    pub fn new(config: LauncherConfig) -> Self {
        Self::with_runner(config, Invoker::new())
    }
}

impl<R: ToolRunner> ToolLauncher<R> {
    /// Launcher with a custom runner backend.
    pub fn with_runner(config: LauncherConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Resolve the tool, stage its dependencies and run the invocation.
    ///
    /// Fails before the runner is reached when no executable candidate
    /// exists or the input model is missing. A nonzero tool exit is not a
    /// failure of this method - it is returned in the summary for the
    /// diagnostics layer to classify.
    pub async fn launch(&self, invocation: &ToolInvocation) -> LaunchResult<LaunchSummary> {
        let resolver =
            ArtifactResolver::new(self.config.tool_root.clone(), self.config.tool_name.clone());
        let executable = resolver.resolve()?;
        info!(executable = %executable.display(), "resolved simplifier executable");

        ensure_input_exists(invocation.input())?;

        let staging = if self.config.stage_dependencies {
            self.stage_beside(&executable)
        } else {
            StagingReport::default()
        };

        let result = self.runner.run(&executable, invocation).await?;

        Ok(LaunchSummary {
            executable,
            staging,
            result,
        })
    }

    fn stage_beside(&self, executable: &std::path::Path) -> StagingReport {
        let Some(exe_dir) = executable.parent() else {
            return StagingReport::default();
        };
        info!(dir = %exe_dir.display(), "staging shared-library dependencies");
        let report = DependencyStager::new(self.config.staging.clone()).stage(exe_dir);
        if !report.copied.is_empty() {
            info!(count = report.copied.len(), "staged libraries");
        }
        for warning in &report.warnings {
            warn!("staging: {warning}");
        }
        report
    }
}
