//! Launcher configuration storage and management.
//!
//! All knobs the launcher reads live in one explicit structure that is
//! passed into each component at construction - there is no ambient global
//! state, so tests can substitute any part of it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where shared-library dependencies are found and which ones are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagingConfig {
    /// Directory of prebuilt third-party shared libraries (e.g. a vcpkg
    /// `bin` directory). Every shared-library file in it is staged.
    pub vendor_bin_dir: Option<PathBuf>,

    /// Directory checked before the search path when locating runtime
    /// libraries (e.g. a toolchain `bin` directory).
    pub toolchain_bin_dir: Option<PathBuf>,

    /// Fixed set of runtime library file names the tool needs at load time.
    #[serde(default = "default_runtime_libs")]
    pub runtime_libs: Vec<String>,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            vendor_bin_dir: None,
            toolchain_bin_dir: None,
            runtime_libs: default_runtime_libs(),
        }
    }
}

/// Compiler runtime libraries a MinGW-built tool loads at startup.
fn default_runtime_libs() -> Vec<String> {
    if cfg!(windows) {
        vec![
            "libgcc_s_seh-1.dll".to_string(),
            "libstdc++-6.dll".to_string(),
            "libwinpthread-1.dll".to_string(),
        ]
    } else {
        Vec::new()
    }
}

/// Complete launcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Base name of the external executable, without platform suffix.
    pub tool_name: String,

    /// Root the candidate build-output directories are resolved against.
    pub tool_root: PathBuf,

    /// Whether to stage dependencies next to the executable before running.
    #[serde(default = "default_true")]
    pub stage_dependencies: bool,

    /// Dependency staging configuration.
    #[serde(default)]
    pub staging: StagingConfig,
}

fn default_true() -> bool {
    true
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            tool_name: "MACSimplifier".to_string(),
            tool_root: default_tool_root(),
            stage_dependencies: true,
            staging: StagingConfig::default(),
        }
    }
}

impl LauncherConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}

/// Default tool root: the directory the launcher itself runs from, falling
/// back to the working directory when the executable path is unavailable.
fn default_tool_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn config_roundtrip() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("launcher.json");

        let mut original = LauncherConfig::default();
        original.tool_name = "TestSimplifier".to_string();
        original.tool_root = PathBuf::from("/opt/tool");
        original.staging.vendor_bin_dir = Some(PathBuf::from("/opt/vendor/bin"));
        original.staging.runtime_libs = vec!["libdemo.so".to_string()];

        original.save(&config_path).unwrap();
        let loaded = LauncherConfig::load(&config_path).unwrap();

        assert_eq!(original.tool_name, loaded.tool_name);
        assert_eq!(original.tool_root, loaded.tool_root);
        assert_eq!(
            original.staging.vendor_bin_dir,
            loaded.staging.vendor_bin_dir
        );
        assert_eq!(original.staging.runtime_libs, loaded.staging.runtime_libs);
        assert!(loaded.stage_dependencies);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("launcher.json");
        fs::write(
            &config_path,
            r#"{"tool_name": "Simplifier", "tool_root": "/tools"}"#,
        )
        .unwrap();

        let loaded = LauncherConfig::load(&config_path).unwrap();
        assert_eq!(loaded.tool_name, "Simplifier");
        assert!(loaded.stage_dependencies);
        assert_eq!(loaded.staging.runtime_libs, StagingConfig::default().runtime_libs);
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("launcher.json");
        fs::write(&config_path, "{not json").unwrap();

        assert!(LauncherConfig::load(&config_path).is_err());
    }
}
