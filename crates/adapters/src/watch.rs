// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thin wrapper around the `notify` crate for watching the daemon's sync
//! log file.
//!
//! Grounded in `create_file_watcher` (`examples/groblegark-oddjobs/crates/
//! adapters/src/agent/watcher.rs`): a closure-based `recommended_watcher`
//! forwarding events into an mpsc channel via `blocking_send`, since the
//! `notify` callback runs off the async runtime.

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

/// Relative path, from the synchronized folder, of the file whose writes
/// signal daemon activity.
pub const SYNC_LOG_RELATIVE_PATH: &str = ".sync/cli.log";

/// Build the watch path for a given synchronized folder.
pub fn sync_log_path(sync_dir: &Path) -> PathBuf {
    sync_dir.join(SYNC_LOG_RELATIVE_PATH)
}

/// An event forwarded from the watch closure: `Ok(())` for a filesystem
/// change, `Err` for a `notify`-reported runtime error (terminal for the
/// Observation Loop).
pub type WatchEvent = Result<(), String>;

/// Register a watch on `path`, forwarding a [`WatchEvent`] on `tx` for
/// every filesystem event or error `notify` reports. Returns the live
/// watcher, which must be kept alive for the watch to remain registered.
///
/// Fails if the path does not exist yet (daemon never started) or the OS
/// refuses to allocate a watcher.
pub fn create_file_watcher(
    path: &Path,
    tx: mpsc::Sender<WatchEvent>,
) -> Result<RecommendedWatcher, notify::Error> {
    let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
        let event = res.map(|_| ()).map_err(|e| e.to_string());
        let _ = tx.blocking_send(event);
    })?;

    watcher.watch(path, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
