// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon status tag.
//!
//! Modeled as a tagged enum with a catch-all [`Status::Other`] arm so that
//! an unexpected daemon token from a future yandex-disk release never
//! panics a consumer. The wire form is always the verbatim token the
//! daemon reported (see [`Status::as_wire`] / the `Display` impl).

use std::fmt;

/// Current (or previous) synchronization status of the daemon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Status {
    /// No status observed yet (the initial value of `prev`).
    Unknown,
    /// The daemon is not running.
    None,
    /// The daemon is running but synchronization is paused.
    Paused,
    /// The daemon is running, idle, and fully synchronized.
    Idle,
    /// The daemon is rebuilding its file index.
    Index,
    /// The daemon is actively synchronizing files.
    Busy,
    /// The daemon reported an error.
    Error,
    /// Any other verbatim token reported by the daemon.
    Other(String),
}

impl Status {
    /// Parse a daemon-reported status token into a `Status`.
    pub fn parse(token: &str) -> Self {
        match token {
            "unknown" => Status::Unknown,
            "none" => Status::None,
            "paused" => Status::Paused,
            "idle" => Status::Idle,
            "index" => Status::Index,
            "busy" => Status::Busy,
            "error" => Status::Error,
            other => Status::Other(other.to_string()),
        }
    }

    /// The verbatim wire token for this status, as the daemon would report it
    /// (or as `NewYDisk`'s initial value reports `"unknown"`).
    pub fn as_wire(&self) -> &str {
        match self {
            Status::Unknown => "unknown",
            Status::None => "none",
            Status::Paused => "paused",
            Status::Idle => "idle",
            Status::Index => "index",
            Status::Busy => "busy",
            Status::Error => "error",
            Status::Other(s) => s,
        }
    }

    /// True while the daemon is actively working (busy or rebuilding its
    /// index). The backoff policy uses this to clamp the poll interval;
    /// unlike the UI layer, the core never folds `Index` into `Busy` — this
    /// predicate is a separate, narrower notion used only for scheduling.
    pub fn is_active(&self) -> bool {
        matches!(self, Status::Busy | Status::Index)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl From<&str> for Status {
    fn from(token: &str) -> Self {
        Status::parse(token)
    }
}

impl From<String> for Status {
    fn from(token: String) -> Self {
        Status::parse(&token)
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_wire().to_string()
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Unknown
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
