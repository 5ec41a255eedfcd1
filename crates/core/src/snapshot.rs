// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The authoritative representation of the daemon's observable state at
//! one instant, and the change event delivered when it moves.

use crate::status::Status;

/// Maximum number of "last synchronized items" retained, per the daemon's
/// own reporting limit.
pub const MAX_LAST_ITEMS: usize = 10;

/// A single observed snapshot of daemon status.
///
/// Mutated only by the Observation Loop (see `ydt-daemon`); consumers
/// receive snapshots by value.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    /// Current status.
    pub stat: Status,
    /// Value of `stat` immediately before this update took effect.
    pub prev: Status,
    /// Total disk space, human-formatted (empty when unknown).
    pub total: String,
    /// Used disk space, human-formatted.
    pub used: String,
    /// Free disk space, human-formatted.
    pub free: String,
    /// Trash size, human-formatted.
    pub trash: String,
    /// Most recently synchronized items, root-relative, daemon order.
    pub last: Vec<String>,
    /// True iff `last` changed on the most recent update.
    pub ch_last: bool,
    /// Error description (populated in error state).
    pub err: String,
    /// Path associated with `err`.
    pub err_path: String,
    /// Synchronization progress text (populated while busy).
    pub prog: String,
}

impl Snapshot {
    /// The initial snapshot: `stat == prev == Unknown`, all other fields empty.
    pub fn initial() -> Self {
        Snapshot {
            stat: Status::Unknown,
            prev: Status::Unknown,
            ..Default::default()
        }
    }

    /// True iff this snapshot satisfies invariant 1 of the data model: when
    /// `stat == None`, every size/error/progress field is empty and `last`
    /// is empty.
    pub fn is_none_state_consistent(&self) -> bool {
        if self.stat != Status::None {
            return true;
        }
        self.total.is_empty()
            && self.used.is_empty()
            && self.free.is_empty()
            && self.trash.is_empty()
            && self.prog.is_empty()
            && self.err.is_empty()
            && self.err_path.is_empty()
            && self.last.is_empty()
    }
}

/// A snapshot delivered to the consumer by value whenever the Differ
/// reports any field changed or `ch_last` became true.
pub type ChangeEvent = Snapshot;

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
