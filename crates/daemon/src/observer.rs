// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observation Loop: the single worker that drives the Gateway, Parser,
//! and Differ, and owns the filesystem watcher for its lifetime.
//!
//! Grounded in `watch_agent`/`watch_loop`
//! (`examples/groblegark-oddjobs/crates/adapters/src/agent/watcher.rs`): a
//! `tokio::select!` over a watcher channel, a rearmable timer, and a
//! shutdown receiver, reconstructed fresh each loop iteration rather than
//! held as a pinned future — `tokio::select!` already re-evaluates each
//! branch expression per iteration, so a plain `tokio::time::sleep(d)`
//! inline is the rearmed timer.
//!
//! The outbound channel is a `tokio::sync::watch`, not an `mpsc`: the
//! workspace's capacity-1 "overwrite in place" backpressure policy is
//! exactly what `watch` provides natively (the consumer's next `borrow()`
//! is never older than the most recently sent value), which an `mpsc`
//! with manual drop-on-full handling would only approximate.

use crate::backoff::Backoff;
use crate::error::ObserverError;
use notify::RecommendedWatcher;
use std::path::PathBuf;
use tokio::sync::{mpsc, oneshot, watch};
use ydt_adapters::{create_file_watcher, parse, sync_log_path, Gateway, WatchEvent};
use ydt_core::{ChangeEvent, Snapshot, Status};

/// Commands the façade sends to a running loop.
pub(crate) enum LoopCommand {
    /// Retry activating the filesystem watcher (sent from `start()`).
    RearmWatcher,
    /// Shut the loop down; the loop acknowledges via the carried sender
    /// once teardown completes.
    Shutdown(oneshot::Sender<()>),
}

pub(crate) struct Observer {
    gateway: Gateway,
    sync_dir: PathBuf,
    current: Snapshot,
    backoff: Backoff,
    changes: watch::Sender<ChangeEvent>,
    command_rx: mpsc::Receiver<LoopCommand>,
    watcher: Option<RecommendedWatcher>,
    watcher_rx: Option<mpsc::Receiver<WatchEvent>>,
    poll_count: u64,
}

impl Observer {
    pub(crate) fn new(
        gateway: Gateway,
        sync_dir: PathBuf,
        changes: watch::Sender<ChangeEvent>,
        command_rx: mpsc::Receiver<LoopCommand>,
    ) -> Self {
        let mut observer = Self {
            gateway,
            sync_dir,
            current: Snapshot::initial(),
            backoff: Backoff::initial(),
            changes,
            command_rx,
            watcher: None,
            watcher_rx: None,
            poll_count: 0,
        };
        observer.try_arm_watcher();
        observer
    }

    /// Register (or re-register) the filesystem watch. Failure is
    /// non-fatal: the caller retries via `start()`.
    fn try_arm_watcher(&mut self) {
        let path = sync_log_path(&self.sync_dir);
        let (tx, rx) = mpsc::channel(32);
        match create_file_watcher(&path, tx) {
            Ok(watcher) => {
                self.watcher = Some(watcher);
                self.watcher_rx = Some(rx);
                tracing::debug!(path = %path.display(), "filesystem watch armed");
            }
            Err(source) => {
                let err = ObserverError::WatchPathUnavailable(path);
                tracing::debug!(%err, %source, "watch not yet available, will retry on start()");
                self.watcher = None;
                self.watcher_rx = None;
            }
        }
    }

    /// Run the loop until a shutdown command is received or the watcher
    /// reports a terminal error. Consumes `self`.
    pub(crate) async fn run(mut self) {
        let mut armed: Option<std::time::Duration> = Some(self.backoff.interval());

        loop {
            tokio::select! {
                biased;

                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(LoopCommand::RearmWatcher) => {
                            if self.watcher.is_none() {
                                self.try_arm_watcher();
                            }
                        }
                        Some(LoopCommand::Shutdown(ack)) => {
                            tracing::debug!("observation loop shutting down");
                            self.watcher = None;
                            self.watcher_rx = None;
                            let _ = ack.send(());
                            break;
                        }
                        None => break,
                    }
                }

                event = Self::wait_watcher(&mut self.watcher_rx) => {
                    match event {
                        Some(Ok(())) => {
                            armed = self.poll_cycle(true).await;
                        }
                        Some(Err(message)) => {
                            let err = ObserverError::WatcherRuntimeError(message);
                            tracing::warn!(%err, "terminating observation loop");
                            break;
                        }
                        None => {
                            // Channel closed unexpectedly; stop selecting on
                            // it until the next successful rearm.
                            self.watcher_rx = None;
                        }
                    }
                }

                _ = Self::wait_timer(armed) => {
                    armed = self.poll_cycle(false).await;
                }
            }
        }
    }

    async fn wait_watcher(rx: &mut Option<mpsc::Receiver<WatchEvent>>) -> Option<WatchEvent> {
        match rx {
            Some(rx) => rx.recv().await,
            None => std::future::pending().await,
        }
    }

    async fn wait_timer(armed: Option<std::time::Duration>) {
        match armed {
            Some(d) => tokio::time::sleep(d).await,
            None => std::future::pending().await,
        }
    }

    /// One Gateway → Parser → Differ cycle. Returns the next timer arm
    /// duration (`None` means the timer stops, per the `none` state).
    async fn poll_cycle(&mut self, triggered_by_watcher: bool) -> Option<std::time::Duration> {
        let text = self.gateway.status(true).await;
        let fresh = parse(&text);
        let changed = ydt_core::update(&mut self.current, fresh);

        if changed {
            let _ = self.changes.send(self.current.clone());
        } else {
            self.poll_count += 1;
            if self.poll_count.is_multiple_of(6) {
                tracing::debug!(poll_count = self.poll_count, stat = %self.current.stat, "poll cycle: no change");
            } else {
                tracing::trace!(poll_count = self.poll_count, stat = %self.current.stat, "poll cycle: no change");
            }
        }

        if self.current.stat == Status::None {
            return None;
        }

        if triggered_by_watcher || changed {
            self.backoff.reset();
        } else {
            self.backoff.advance(self.current.stat.is_active());
        }
        Some(self.backoff.interval())
    }
}

#[cfg(test)]
#[path = "observer_tests.rs"]
mod tests;
