//! Runner port definition.
//!
//! This port abstracts running the external tool to completion so the
//! orchestration can be exercised with a recording double in tests, and so
//! alternative backends remain possible.

use async_trait::async_trait;
use std::path::Path;

use crate::error::LaunchResult;
use crate::invocation::ToolInvocation;
use crate::result::RunResult;

/// Runs the external tool to completion and captures its output.
///
/// Implementations own the invocation preconditions: the input model must
/// exist and the output directory must be created before the child is
/// spawned. The call blocks until the child has terminated and both streams
/// have been captured in full.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Run `executable` with the invocation's positional arguments.
    async fn run(&self, executable: &Path, invocation: &ToolInvocation) -> LaunchResult<RunResult>;
}
