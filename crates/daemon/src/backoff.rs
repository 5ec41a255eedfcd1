// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adaptive polling backoff for the Observation Loop.
//!
//! Re-architected per the workspace's redesign notes: the original
//! implementation modeled this as a bare shifting integer
//! (`interval <<= 1`). Here it is an explicit `{interval, max}` state
//! struct so the doubling, the busy-state clamp, and the reset-on-change
//! rule are each a single named method rather than inline bit twiddling.

use std::time::Duration;

const INITIAL: Duration = Duration::from_millis(100);
const BUSY_CLAMP: Duration = Duration::from_secs(2);
const MAX: Duration = Duration::from_secs(32);

/// Backoff state owned by the Observation Loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    interval: Duration,
}

impl Backoff {
    /// The timer duration to arm immediately after construction, so the
    /// first status update lands promptly.
    pub fn initial() -> Self {
        Self { interval: INITIAL }
    }

    /// Current interval to arm the timer for.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Reset to the fastest poll cadence: used on a watcher event, or when
    /// the previous poll cycle found any field changed.
    pub fn reset(&mut self) {
        self.interval = BUSY_CLAMP;
    }

    /// Advance the backoff after a poll cycle that found nothing new.
    ///
    /// While the daemon is actively working (`busy`/`index`), the timer is
    /// clamped to [`BUSY_CLAMP`] rather than allowed to grow, so an active
    /// sync is never polled less often than every 2s. Otherwise the
    /// interval doubles, saturating at [`MAX`].
    pub fn advance(&mut self, is_active: bool) {
        if is_active {
            self.interval = BUSY_CLAMP;
            return;
        }

        self.interval = (self.interval * 2).min(MAX);
        if self.interval < BUSY_CLAMP {
            self.interval = BUSY_CLAMP;
        }
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
#[path = "backoff_tests.rs"]
mod tests;
