// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;
use std::fs;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use tempfile::TempDir;

/// Write an executable shell script named `yandex-disk` into a fresh temp
/// directory and point `PATH` at that directory only, so
/// `locate_executable`/`Gateway::new` see exactly this fake binary.
fn fake_executable(script: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let exe_path = dir.path().join(EXECUTABLE_NAME);
    let mut file = fs::File::create(&exe_path).unwrap();
    writeln!(file, "#!/bin/sh\n{script}").unwrap();
    #[cfg(unix)]
    fs::set_permissions(&exe_path, fs::Permissions::from_mode(0o755)).unwrap();
    std::env::set_var("PATH", dir.path());
    (dir, exe_path)
}

fn config_with_dir_and_auth(sync_dir: &Path, auth_file: &Path) -> TempDir {
    let conf_dir = tempfile::tempdir().unwrap();
    let conf_path = conf_dir.path().join("config.cfg");
    let mut file = fs::File::create(&conf_path).unwrap();
    writeln!(
        file,
        "dir=\"{}\"\nauth=\"{}\"\n",
        sync_dir.display(),
        auth_file.display()
    )
    .unwrap();
    conf_dir
}

#[test]
#[serial]
fn new_fails_when_executable_missing() {
    std::env::set_var("PATH", "/nonexistent-bin-dir-for-test");
    let conf = tempfile::NamedTempFile::new().unwrap();
    let result = futures_block_on(Gateway::new(conf.path()));
    assert!(matches!(result, Err(GatewayError::NotInstalled)));
}

#[test]
#[serial]
fn new_fails_when_config_unreadable() {
    let (_bin_dir, _exe) = fake_executable("exit 0");
    let result = futures_block_on(Gateway::new(Path::new("/no/such/config.cfg")));
    assert!(matches!(result, Err(GatewayError::ConfigUnreadable { .. })));
}

#[test]
#[serial]
fn new_fails_when_dir_does_not_exist_on_disk() {
    let (_bin_dir, _exe) = fake_executable("exit 0");
    let conf_dir = tempfile::tempdir().unwrap();
    let conf_path = conf_dir.path().join("config.cfg");
    let mut file = fs::File::create(&conf_path).unwrap();
    writeln!(file, "dir=\"/no/such/sync/dir\"\nauth=\"/no/such/auth\"\n").unwrap();

    let result = futures_block_on(Gateway::new(&conf_path));
    assert!(matches!(result, Err(GatewayError::NotConfigured { .. })));
}

#[test]
#[serial]
fn new_fails_when_auth_field_missing() {
    let (_bin_dir, _exe) = fake_executable("exit 0");
    let conf_dir = tempfile::tempdir().unwrap();
    let conf_path = conf_dir.path().join("config.cfg");
    let sync_dir = tempfile::tempdir().unwrap();
    let mut file = fs::File::create(&conf_path).unwrap();
    writeln!(file, "dir=\"{}\"\n", sync_dir.path().display()).unwrap();

    let result = futures_block_on(Gateway::new(&conf_path));
    assert!(matches!(result, Err(GatewayError::NotConfigured { .. })));
}

#[test]
#[serial]
fn new_succeeds_with_valid_config() {
    let (_bin_dir, _exe) = fake_executable("exit 0");
    let sync_dir = tempfile::tempdir().unwrap();
    let auth_file = tempfile::NamedTempFile::new().unwrap();
    let conf_dir = config_with_dir_and_auth(sync_dir.path(), auth_file.path());
    let conf_path = conf_dir.path().join("config.cfg");

    let gateway = futures_block_on(Gateway::new(&conf_path)).unwrap();
    assert_eq!(gateway.path(), sync_dir.path());
}

#[test]
#[serial]
fn status_returns_stdout_on_success() {
    let (_bin_dir, _exe) = fake_executable("echo 'Synchronization core status: idle'");
    let sync_dir = tempfile::tempdir().unwrap();
    let auth_file = tempfile::NamedTempFile::new().unwrap();
    let conf_dir = config_with_dir_and_auth(sync_dir.path(), auth_file.path());
    let gateway = futures_block_on(Gateway::new(&conf_dir.path().join("config.cfg"))).unwrap();

    let output = futures_block_on(gateway.status(true));
    assert!(output.contains("idle"));
}

#[test]
#[serial]
fn status_returns_empty_on_nonzero_exit() {
    let (_bin_dir, _exe) = fake_executable("exit 1");
    let sync_dir = tempfile::tempdir().unwrap();
    let auth_file = tempfile::NamedTempFile::new().unwrap();
    let conf_dir = config_with_dir_and_auth(sync_dir.path(), auth_file.path());
    let gateway = futures_block_on(Gateway::new(&conf_dir.path().join("config.cfg"))).unwrap();

    let output = futures_block_on(gateway.status(true));
    assert!(output.is_empty());
}

#[test]
#[serial]
fn start_is_noop_when_status_already_non_empty() {
    let (_bin_dir, _exe) = fake_executable(
        "if [ \"$1\" = status ]; then echo running; else echo 'start should not run' >&2; exit 1; fi",
    );
    let sync_dir = tempfile::tempdir().unwrap();
    let auth_file = tempfile::NamedTempFile::new().unwrap();
    let conf_dir = config_with_dir_and_auth(sync_dir.path(), auth_file.path());
    let gateway = futures_block_on(Gateway::new(&conf_dir.path().join("config.cfg"))).unwrap();

    let result = futures_block_on(gateway.start());
    assert!(result.is_ok());
}

#[test]
#[serial]
fn stop_is_noop_when_status_already_empty() {
    let (_bin_dir, _exe) = fake_executable(
        "if [ \"$1\" = status ]; then exit 1; else echo 'stop should not run' >&2; exit 1; fi",
    );
    let sync_dir = tempfile::tempdir().unwrap();
    let auth_file = tempfile::NamedTempFile::new().unwrap();
    let conf_dir = config_with_dir_and_auth(sync_dir.path(), auth_file.path());
    let gateway = futures_block_on(Gateway::new(&conf_dir.path().join("config.cfg"))).unwrap();

    let result = futures_block_on(gateway.stop());
    assert!(result.is_ok());
}

/// Small helper so these tests can stay plain `#[test]` (required by
/// `#[serial]`, which does not compose with `#[tokio::test]`'s attribute
/// expansion) while still calling `async fn`s.
fn futures_block_on<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(fut)
}
