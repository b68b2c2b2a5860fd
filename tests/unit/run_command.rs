//! Unit tests for the bare run form.

#![allow(clippy::expect_used)]

use tempfile::TempDir;
use wwset::commands::run;
use wwset::config::{ConfigStore, WwsetConfig};

use crate::mocks::{WslCapture, quiet_ctx, standard_listing};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn store(dir: &TempDir) -> ConfigStore {
    ConfigStore::with_path(dir.path().join("config.json"))
}

fn store_with_default(dir: &TempDir, distro: &str) -> ConfigStore {
    let s = store(dir);
    s.save(&WwsetConfig {
        default_distro: Some(distro.to_string()),
    })
    .expect("seed config");
    s
}

#[tokio::test]
async fn test_run_uses_stored_default_for_plain_commands() {
    let dir = TempDir::new().expect("tempdir");
    let s = store_with_default(&dir, "Ubuntu");
    let wsl = WslCapture::new(standard_listing());

    // The spawn double bails after recording, so the call errors — the
    // interesting part is what was asked of wsl.
    let _ = run::run(&quiet_ctx(), &wsl, &s, &strings(&["echo", "hi"])).await;

    assert_eq!(
        wsl.spawn_calls(),
        vec![("Ubuntu".to_string(), "echo hi".to_string())]
    );
}

#[tokio::test]
async fn test_run_first_token_resolving_selects_that_distro() {
    let dir = TempDir::new().expect("tempdir");
    let s = store_with_default(&dir, "Ubuntu");
    let wsl = WslCapture::new(standard_listing());

    let _ = run::run(&quiet_ctx(), &wsl, &s, &strings(&["debian-12", "uname", "-a"])).await;

    assert_eq!(
        wsl.spawn_calls(),
        vec![("Debian-12".to_string(), "uname -a".to_string())]
    );
}

#[tokio::test]
async fn test_run_without_default_fails_before_spawning() {
    let dir = TempDir::new().expect("tempdir");
    let s = store(&dir);
    let wsl = WslCapture::new(standard_listing());

    let err = run::run(&quiet_ctx(), &wsl, &s, &strings(&["echo", "hi"]))
        .await
        .expect_err("no default configured");

    assert!(
        err.to_string().contains("No default distribution configured"),
        "got: {err}"
    );
    assert!(wsl.spawn_calls().is_empty());
}

#[tokio::test]
async fn test_run_ignores_corrupt_config_and_reports_missing_default() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, b"not valid json").expect("write corrupt file");
    let s = ConfigStore::with_path(path);
    let wsl = WslCapture::new(standard_listing());

    let err = run::run(&quiet_ctx(), &wsl, &s, &strings(&["echo", "hi"]))
        .await
        .expect_err("corrupt config loads as empty");

    assert!(err.to_string().contains("No default distribution configured"));
}

#[tokio::test]
async fn test_run_distro_alone_reports_missing_command() {
    let dir = TempDir::new().expect("tempdir");
    let s = store(&dir);
    let wsl = WslCapture::new(standard_listing());

    let err = run::run(&quiet_ctx(), &wsl, &s, &strings(&["ubuntu"]))
        .await
        .expect_err("distro without command");

    assert!(err.to_string().contains("No command given"), "got: {err}");
    assert!(wsl.spawn_calls().is_empty());
}

#[tokio::test]
async fn test_run_surfaces_launch_failure_with_distro_name() {
    let dir = TempDir::new().expect("tempdir");
    let s = store_with_default(&dir, "Ubuntu");
    let wsl = WslCapture::new(standard_listing());

    let err = run::run(&quiet_ctx(), &wsl, &s, &strings(&["echo", "hi"]))
        .await
        .expect_err("capture double never spawns a real process");

    assert!(
        err.to_string().contains("failed to launch command in 'Ubuntu'"),
        "got: {err}"
    );
}
