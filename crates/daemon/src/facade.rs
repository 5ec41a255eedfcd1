// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Public Façade: the one type the rest of the workspace talks to.
//!
//! Grounded in `start_watcher`/`watch_agent`
//! (`examples/groblegark-oddjobs/crates/adapters/src/agent/watcher.rs`):
//! construction spawns the long-lived loop and hands the caller a
//! lightweight handle (there, a shutdown sender; here, `Core` itself,
//! which holds the command sender alongside a `Gateway` clone so
//! `start`/`stop`/`output` can bypass the loop for a direct subprocess
//! call).

use crate::error::CoreError;
use crate::observer::{LoopCommand, Observer};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::sync::{mpsc, oneshot, watch};
use ydt_adapters::Gateway;
use ydt_core::{ChangeEvent, Snapshot};

/// Handle to a running Observation Loop and its underlying `Gateway`.
///
/// Cloning is not supported: `close` takes the command sender exactly
/// once, so a second handle could race a caller into awaiting a shutdown
/// acknowledgement that never arrives.
pub struct Core {
    gateway: Gateway,
    command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    changes: watch::Receiver<ChangeEvent>,
}

impl Core {
    /// Validate the daemon configuration, spawn the Observation Loop, and
    /// return a handle to it.
    pub async fn new(config_path: &Path) -> Result<Self, CoreError> {
        let gateway = Gateway::new(config_path).await?;

        let (changes_tx, changes_rx) = watch::channel(Snapshot::initial());
        let (command_tx, command_rx) = mpsc::channel(8);

        let observer = Observer::new(gateway.clone(), gateway.path().to_path_buf(), changes_tx, command_rx);
        tokio::spawn(observer.run());

        Ok(Self {
            gateway,
            command_tx: Mutex::new(Some(command_tx)),
            changes: changes_rx,
        })
    }

    /// The synchronized folder this instance observes.
    pub fn path(&self) -> &Path {
        self.gateway.path()
    }

    /// A receive-only handle to the change-event stream. Every `borrow`/
    /// `changed` observes a snapshot no older than the most recently
    /// produced one.
    pub fn changes(&self) -> watch::Receiver<ChangeEvent> {
        self.changes.clone()
    }

    /// Start the daemon, then ask the Observation Loop to retry arming its
    /// filesystem watch (the sync log may not have existed before the
    /// daemon was running).
    pub async fn start(&self) -> Result<(), String> {
        self.gateway.start().await?;
        let tx = self
            .command_tx
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        if let Some(tx) = tx {
            let _ = tx.send(LoopCommand::RearmWatcher).await;
        }
        Ok(())
    }

    /// Stop the daemon. The Observation Loop keeps running and will
    /// report the resulting `none` status on its next cycle.
    pub async fn stop(&self) -> Result<(), String> {
        self.gateway.stop().await
    }

    /// Fetch human-readable `yandex-disk status` text directly, bypassing
    /// the neutral-locale environment used for parsing.
    pub async fn output(&self) -> String {
        self.gateway.status(false).await
    }

    /// Shut the Observation Loop down and wait for it to acknowledge.
    /// Idempotent: a second call is a no-op.
    pub async fn close(&self) {
        let tx = self.command_tx.lock().unwrap_or_else(|e| e.into_inner()).take();
        let Some(tx) = tx else {
            return;
        };
        let (ack_tx, ack_rx) = oneshot::channel();
        if tx.send(LoopCommand::Shutdown(ack_tx)).await.is_ok() {
            let _ = ack_rx.await;
        }
    }
}

#[cfg(test)]
#[path = "facade_tests.rs"]
mod tests;
