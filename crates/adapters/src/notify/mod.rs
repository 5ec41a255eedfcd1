// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification adapters.
//!
//! This is a boundary concern: the Observation Loop never sends
//! notifications itself, it only emits change events on the `changes`
//! channel. A `ydt-cli`-level consumer is free to watch that channel and
//! drive a [`NotifyAdapter`] (e.g. on transitions into `error`), but that
//! policy lives outside this crate.

mod desktop;
mod noop;

pub use desktop::DesktopNotifyAdapter;
pub use noop::NoOpNotifyAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeNotifyAdapter, NotifyCall};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from notify operations.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("send failed: {0}")]
    SendFailed(String),
}

/// Adapter for sending desktop notifications.
#[async_trait]
pub trait NotifyAdapter: Clone + Send + Sync + 'static {
    /// Send a notification with a title and message body.
    async fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError>;
}
