// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error kinds for core construction and runtime.
//!
//! Mirrors the teacher's `LifecycleError` convention: each variant carries
//! enough context to log usefully without the caller downcasting, and
//! construction errors are distinguished from the errors a running loop
//! can produce.

use std::path::PathBuf;
use thiserror::Error;
use ydt_adapters::GatewayError;

/// Fatal errors constructing a [`crate::facade::Core`].
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0}")]
    Gateway(#[from] GatewayError),
}

/// Errors a running Observation Loop can surface; these do not propagate
/// out of the loop but are logged, and in the `WatcherRuntimeError` case
/// terminate the loop the same way a shutdown signal would.
#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("watch path {0} is not yet available")]
    WatchPathUnavailable(PathBuf),

    #[error("filesystem watcher reported an error: {0}")]
    WatcherRuntimeError(String),
}
