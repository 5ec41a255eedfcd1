// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn initial_snapshot_is_unknown_unknown() {
    let s = Snapshot::initial();
    assert_eq!(s.stat, Status::Unknown);
    assert_eq!(s.prev, Status::Unknown);
    assert!(s.total.is_empty());
    assert!(s.last.is_empty());
    assert!(!s.ch_last);
}

#[test]
fn none_state_with_populated_fields_is_inconsistent() {
    let mut s = Snapshot::initial();
    s.stat = Status::None;
    s.total = "43.50 GB".to_string();
    assert!(!s.is_none_state_consistent());
}

#[test]
fn none_state_with_empty_fields_is_consistent() {
    let mut s = Snapshot::initial();
    s.stat = Status::None;
    assert!(s.is_none_state_consistent());
}

#[test]
fn non_none_state_is_always_consistent() {
    let mut s = Snapshot::initial();
    s.stat = Status::Idle;
    s.total = "43.50 GB".to_string();
    assert!(s.is_none_state_consistent());
}

#[test]
fn serde_round_trip() {
    let mut s = Snapshot::initial();
    s.stat = Status::Busy;
    s.last = vec!["a.txt".to_string(), "b.txt".to_string()];
    let json = serde_json::to_string(&s).unwrap();
    let parsed: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, s);
}
