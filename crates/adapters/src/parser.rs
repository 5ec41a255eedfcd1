// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status Parser: converts `yandex-disk status` output into a [`Snapshot`].
//!
//! Grounded in `(val *YDvals) update(out string)`
//! (`examples/original_source/ydisk/ydisk.go`), but split from the diff
//! step per this workspace's redesign: this module only parses text into a
//! typed value, it never compares against a prior snapshot (that's
//! `ydt_core::differ`). Per REDESIGN FLAGS in the spec, key/value
//! extraction is a line-oriented scan rather than a whole-blob regex, so
//! the Format A / Format B tolerance stays explicit and testable.

use ydt_core::{Snapshot, Status, MAX_LAST_ITEMS};

const LAST_SECTION_MARKER: &str = "Last synchronized items:";
const PATH_TO_PREFIX: &str = "Path to ";

/// Parse the output of `yandex-disk status` (run under a neutral locale)
/// into a [`Snapshot`].
///
/// An empty `text` means the daemon is not running: the returned snapshot
/// has `stat = Status::None`, every other string field empty, `last`
/// empty, and — per the spec's empty-input branch — `ch_last` is set
/// unconditionally so the Differ reports a change even if the previous
/// `last` was already empty.
///
/// `prev` is always left as `Status::Unknown` on the returned snapshot:
/// it is the caller's (the Observation Loop's) job to carry `prev`
/// forward via the Differ, not the parser's.
pub fn parse(text: &str) -> Snapshot {
    if text.is_empty() {
        return Snapshot {
            stat: Status::None,
            ch_last: true,
            ..Default::default()
        };
    }

    let (header, tail) = match text.split_once(LAST_SECTION_MARKER) {
        Some((header, tail)) => (header, Some(tail)),
        None => (text, None),
    };
    // "Path to " only ever prefixes the non-error Path line; stripping it
    // once means a later bare "Path:" match unambiguously refers to the
    // error-case path.
    let header = header.replacen(PATH_TO_PREFIX, "", 1);

    let mut snapshot = Snapshot::default();
    for (key, value) in scan_key_values(&header) {
        match key {
            "Synchronization" => snapshot.stat = Status::parse(value),
            "Total" => snapshot.total = value.to_string(),
            "Used" => snapshot.used = value.to_string(),
            "Available" => snapshot.free = value.to_string(),
            "Trash" => snapshot.trash = value.to_string(),
            "Sync" => snapshot.prog = value.to_string(),
            "Error" => snapshot.err = value.to_string(),
            // Format A reports a bare "Path:" line unconditionally (not only
            // in the error state), so err_path picks it up even outside an
            // error — this mirrors the key table literally rather than
            // special-casing on `stat`. Format B's synchronized-folder line
            // is "Path to ...:" and is never mistaken for this key, since
            // the `Path to ` prefix is stripped before this scan runs.
            "Path" => snapshot.err_path = value.to_string(),
            _ => {} // unrecognized keys are ignored
        }
    }

    snapshot.last = tail.map(scan_last_items).unwrap_or_default();
    snapshot
}

/// Scan lines for `key: value` or `key ...: value` pairs, where `key` is
/// the first whitespace-delimited token appearing before the first colon
/// on the line, and `value` is the text after the first `": "`. This
/// tolerates both `Synchronization core status: <v>` (Format A) and
/// `Synchronization: <v>` (Format B) because only the first token is used
/// as the key.
fn scan_key_values(text: &str) -> impl Iterator<Item = (&str, &str)> {
    text.lines().filter_map(|line| {
        let trimmed = line.trim_start();
        let key = trimmed.split_whitespace().next()?;
        let after_key = &trimmed[key.len()..];
        let colon = after_key.find(':')?;
        let value = after_key[colon + 1..].trim_start();
        Some((key, unquote(value)))
    })
}

fn unquote(value: &str) -> &str {
    if let Some(stripped) = value.strip_prefix('\'') {
        if let Some(stripped) = stripped.strip_suffix('\'') {
            return stripped;
        }
    }
    value
}

/// Extract up to [`MAX_LAST_ITEMS`] paths from the "Last synchronized
/// items:" section: each matching line has shape `<kind>: '<path>'`.
fn scan_last_items(tail: &str) -> Vec<String> {
    tail.lines()
        .filter_map(|line| {
            let quote_start = line.find('\'')?;
            let quote_end = line.rfind('\'')?;
            if quote_end <= quote_start {
                return None;
            }
            Some(line[quote_start + 1..quote_end].to_string())
        })
        .take(MAX_LAST_ITEMS)
        .collect()
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
