// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot Differ: folds a freshly-parsed snapshot into the current one,
//! reporting whether anything observable changed.

use crate::snapshot::Snapshot;

/// Compare `current` against `fresh` and fold `fresh`'s values into
/// `current` in place.
///
/// `current.prev` is set to `current.stat`'s prior value before any other
/// field is touched, and is never itself reported as a changed field.
/// `last` uses length-then-elementwise comparison: a length change
/// replaces the list wholesale and sets `ch_last`; an equal-length list is
/// compared element by element. If `fresh.ch_last` already arrives `true`
/// (the Status Parser's signal for its empty-input branch), that verdict is
/// taken unconditionally instead of being recomputed — this is what
/// guarantees `ch_last` on the very first poll even though an empty
/// `current.last` diffed against an empty `fresh.last` would otherwise look
/// unchanged.
///
/// Returns `true` iff any field other than `prev` differs, or `ch_last`
/// became true.
pub fn update(current: &mut Snapshot, fresh: Snapshot) -> bool {
    current.prev = current.stat.clone();

    let mut changed = false;
    set_changed(&mut current.stat, fresh.stat, &mut changed);
    set_changed(&mut current.total, fresh.total, &mut changed);
    set_changed(&mut current.used, fresh.used, &mut changed);
    set_changed(&mut current.free, fresh.free, &mut changed);
    set_changed(&mut current.trash, fresh.trash, &mut changed);
    set_changed(&mut current.err, fresh.err, &mut changed);
    set_changed(&mut current.err_path, fresh.err_path, &mut changed);
    set_changed(&mut current.prog, fresh.prog, &mut changed);

    current.ch_last = if fresh.ch_last {
        current.last = fresh.last;
        true
    } else {
        diff_last(&mut current.last, fresh.last)
    };

    changed || current.ch_last
}

fn set_changed<T: PartialEq>(slot: &mut T, value: T, changed: &mut bool) {
    if *slot != value {
        *slot = value;
        *changed = true;
    }
}

/// Fold `fresh` into `current_last`, returning whether the list changed.
fn diff_last(current_last: &mut Vec<String>, fresh: Vec<String>) -> bool {
    if current_last.len() != fresh.len() {
        *current_last = fresh;
        return true;
    }
    let mut ch_last = false;
    for (slot, value) in current_last.iter_mut().zip(fresh) {
        set_changed(slot, value, &mut ch_last);
    }
    ch_last
}

#[cfg(test)]
#[path = "differ_tests.rs"]
mod tests;
