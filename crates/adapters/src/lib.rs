// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for external I/O: the daemon subprocess, its configuration
//! file, its status text, its log file watch, and desktop notifications.

pub mod config;
pub mod gateway;
pub mod notify;
pub mod parser;
pub mod subprocess;
pub mod watch;

pub use config::{default_config_path, extract_dir_and_auth, DaemonConfig};
pub use gateway::{Gateway, GatewayError};
pub use notify::{DesktopNotifyAdapter, NoOpNotifyAdapter, NotifyAdapter, NotifyError};
pub use parser::parse;
pub use watch::{create_file_watcher, sync_log_path, WatchEvent, SYNC_LOG_RELATIVE_PATH};

#[cfg(any(test, feature = "test-support"))]
pub use notify::{FakeNotifyAdapter, NotifyCall};
