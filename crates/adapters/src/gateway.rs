// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon Gateway: bridges the core to the external `yandex-disk` process.
//!
//! Grounded in `checkDaemon` and `getYDExecPath`
//! (`examples/original_source/ydisk/check.go`): resolve the executable,
//! open and scan the config file, fail fast if either the daemon binary or
//! the configured paths are missing. `status`/`start`/`stop` are grounded
//! in `YDisk.go`'s subprocess invocations, generalized to run under tokio.

use crate::config::{self, DaemonConfig};
use crate::subprocess::{self, LIFECYCLE_TIMEOUT, STATUS_TIMEOUT};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::process::Command;

const EXECUTABLE_NAME: &str = "yandex-disk";

/// Errors fatal to constructing a [`Gateway`].
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{EXECUTABLE_NAME} not found on PATH")]
    NotInstalled,
    #[error("could not read daemon config {path}: {source}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("daemon config {path} is missing or points at a nonexistent dir/auth path")]
    NotConfigured { path: PathBuf },
}

/// Bridge between the core and the external daemon process.
///
/// Holds the resolved executable path and the daemon's own configuration
/// file path; `dir` (the synchronized folder) is exposed for the façade's
/// `path` accessor.
#[derive(Debug, Clone)]
pub struct Gateway {
    exe: PathBuf,
    conf: PathBuf,
    dir: PathBuf,
}

impl Gateway {
    /// Resolve the executable and validate the configuration at `conf`.
    pub async fn new(conf: &Path) -> Result<Self, GatewayError> {
        let exe = locate_executable().ok_or(GatewayError::NotInstalled)?;

        let parsed = config::extract_dir_and_auth(conf).map_err(|source| {
            GatewayError::ConfigUnreadable {
                path: conf.to_path_buf(),
                source,
            }
        })?;

        let parsed = parsed.ok_or_else(|| GatewayError::NotConfigured {
            path: conf.to_path_buf(),
        })?;

        if !paths_exist(&parsed) {
            return Err(GatewayError::NotConfigured {
                path: conf.to_path_buf(),
            });
        }

        Ok(Self {
            exe,
            conf: conf.to_path_buf(),
            dir: parsed.dir,
        })
    }

    /// The resolved synchronized folder.
    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Invoke `<exe> status -c <conf>` and return its stdout as text.
    ///
    /// When `neutral_locale` is true, the subprocess environment is
    /// cleared and only `TEMP` is injected so output stays in the
    /// canonical language the parser expects. A subprocess failure (I/O
    /// error, nonzero exit, or timeout) yields empty text rather than an
    /// error: that is the in-band signal for "daemon not running" and
    /// must not be treated as a fault by callers.
    pub async fn status(&self, neutral_locale: bool) -> String {
        let mut cmd = self.command("status");
        if neutral_locale {
            neutralize_environment(&mut cmd);
        }

        match subprocess::run_with_timeout(cmd, STATUS_TIMEOUT, "yandex-disk status").await {
            Ok(output) if output.status.success() => {
                String::from_utf8_lossy(&output.stdout).into_owned()
            }
            Ok(_) => String::new(),
            Err(err) => {
                tracing::debug!(error = %err, "status query failed, treating as daemon stopped");
                String::new()
            }
        }
    }

    /// Start the daemon if it is not already running. No-op (and `Ok`) if
    /// `status(neutral)` already reports a non-empty value.
    pub async fn start(&self) -> Result<(), String> {
        if !self.status(true).await.is_empty() {
            return Ok(());
        }

        let cmd = self.command("start");
        subprocess::run_with_timeout(cmd, LIFECYCLE_TIMEOUT, "yandex-disk start")
            .await
            .map(|_| ())
    }

    /// Stop the daemon if it is currently running. No-op (and `Ok`) if
    /// `status(neutral)` already reports an empty value.
    pub async fn stop(&self) -> Result<(), String> {
        if self.status(true).await.is_empty() {
            return Ok(());
        }

        let cmd = self.command("stop");
        subprocess::run_with_timeout(cmd, LIFECYCLE_TIMEOUT, "yandex-disk stop")
            .await
            .map(|_| ())
    }

    fn command(&self, subcommand: &str) -> Command {
        let mut cmd = Command::new(&self.exe);
        cmd.arg(subcommand).arg("-c").arg(&self.conf);
        cmd
    }
}

fn paths_exist(parsed: &DaemonConfig) -> bool {
    parsed.dir.exists() && parsed.auth.exists()
}

/// Resolve `yandex-disk` on the process search path, `which`-style.
fn locate_executable() -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(EXECUTABLE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Clear the subprocess environment and inject `TEMP` so the daemon's
/// textual output stays in the canonical (POSIX "C") locale. `LANG`/
/// `LC_ALL` are left unset rather than pinned to a specific value, since
/// an unset locale is already the neutral default.
fn neutralize_environment(cmd: &mut Command) {
    let temp = std::env::var_os("TMPDIR").unwrap_or_else(|| "/tmp".into());
    cmd.env_clear();
    cmd.env("TEMP", temp);
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
