//! Core domain types for the simplaunch launcher.
//!
//! This crate holds the pieces shared by every adapter: the launcher
//! configuration, the invocation model for the external simplifier tool,
//! the error taxonomy, and the runner port that process backends implement.
//! No process is ever spawned from here.

pub mod config;
pub mod error;
pub mod invocation;
pub mod platform;
pub mod ports;
pub mod result;

pub use config::{LauncherConfig, StagingConfig};
pub use error::{LaunchError, LaunchResult};
pub use invocation::{ArgContract, ToolInvocation, ToolInvocationBuilder};
pub use platform::OsFamily;
pub use ports::ToolRunner;
pub use result::RunResult;
