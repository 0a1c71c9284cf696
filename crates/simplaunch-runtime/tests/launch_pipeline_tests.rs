//! End-to-end tests for the resolve -> stage -> invoke pipeline against a
//! fake tool binary.
//!
//! Process spawning is Unix-only here: the fake tool is a shell script.
//! Classification and staging behaviour are covered on every platform by
//! the unit tests beside the modules.

use simplaunch_core::platform::shared_library_extension;
use simplaunch_core::{LauncherConfig, ToolInvocation};
use simplaunch_runtime::{ArtifactResolver, DependencyStager, ToolLauncher};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Place a fake tool at the resolver's highest-priority candidate.
#[cfg(unix)]
fn install_fake_tool(root: &Path, script: &str) -> PathBuf {
    let resolver = ArtifactResolver::new(root, "FakeSimplifier");
    let executable = resolver.candidates()[0].clone();
    fs::create_dir_all(executable.parent().unwrap()).unwrap();
    fs::write(&executable, format!("#!/bin/sh\n{script}\n")).unwrap();
    fs::set_permissions(&executable, fs::Permissions::from_mode(0o755)).unwrap();
    executable
}

#[cfg(unix)]
fn config_for(root: &Path) -> LauncherConfig {
    let mut config = LauncherConfig::default();
    config.tool_name = "FakeSimplifier".to_string();
    config.tool_root = root.to_path_buf();
    config.stage_dependencies = false;
    config.staging.runtime_libs = Vec::new();
    config
}

#[tokio::test]
#[cfg(unix)]
async fn pipeline_simplifies_a_model_end_to_end() {
    let root = tempdir().unwrap();
    // The fake tool copies input to output, like the real simplifier would.
    install_fake_tool(root.path(), "cp \"$1\" \"$2\"");

    let input = root.path().join("scene.gltf");
    fs::write(&input, b"mesh data").unwrap();
    let output = root.path().join("out/scene.gltf");

    let launcher = ToolLauncher::new(config_for(root.path()));
    let invocation = ToolInvocation::builder(&input, &output)
        .ratio(0.5)
        .build()
        .unwrap();

    let summary = launcher.launch(&invocation).await.unwrap();

    assert!(summary.result.success());
    assert_eq!(fs::read(&output).unwrap(), b"mesh data");
}

#[tokio::test]
#[cfg(unix)]
async fn pipeline_surfaces_tool_failure_without_erroring() {
    let root = tempdir().unwrap();
    install_fake_tool(root.path(), "echo 'bad mesh' >&2; exit 2");

    let input = root.path().join("scene.gltf");
    fs::write(&input, b"mesh data").unwrap();

    let launcher = ToolLauncher::new(config_for(root.path()));
    let invocation = ToolInvocation::builder(&input, root.path().join("out/scene.gltf"))
        .build()
        .unwrap();

    let summary = launcher.launch(&invocation).await.unwrap();

    assert_eq!(summary.result.exit_code, 2);
    assert_eq!(summary.result.failure_log().trim(), "bad mesh");
}

#[tokio::test]
#[cfg(unix)]
async fn staging_is_idempotent_across_launches() {
    let root = tempdir().unwrap();
    let executable = install_fake_tool(root.path(), "exit 0");

    let input = root.path().join("scene.gltf");
    fs::write(&input, b"mesh data").unwrap();

    let vendor = root.path().join("vendor-bin");
    fs::create_dir_all(&vendor).unwrap();
    let lib = format!("libvendor.{}", shared_library_extension());
    fs::write(vendor.join(&lib), b"lib").unwrap();

    let mut config = config_for(root.path());
    config.stage_dependencies = true;
    config.staging.vendor_bin_dir = Some(vendor);

    let launcher = ToolLauncher::new(config);
    let invocation = ToolInvocation::builder(&input, root.path().join("out.gltf"))
        .build()
        .unwrap();

    let first = launcher.launch(&invocation).await.unwrap();
    assert_eq!(first.staging.copied, vec![lib.clone()]);
    assert!(executable.parent().unwrap().join(&lib).exists());

    let second = launcher.launch(&invocation).await.unwrap();
    assert!(second.staging.is_noop());
    assert_eq!(second.staging.present, vec![lib]);
}

#[test]
fn stager_alone_reports_unlocatable_runtime_libraries() {
    let dest = tempdir().unwrap();
    let config = simplaunch_core::StagingConfig {
        vendor_bin_dir: None,
        toolchain_bin_dir: None,
        runtime_libs: vec!["libmissing.quux".to_string()],
    };

    let report = DependencyStager::new(config).stage(dest.path());
    assert!(!report.is_clean());
    assert!(report.warnings[0].contains("libmissing.quux"));
}
