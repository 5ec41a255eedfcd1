// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn initial_interval_is_100ms() {
    let backoff = Backoff::initial();
    assert_eq!(backoff.interval(), Duration::from_millis(100));
}

#[test]
fn first_advance_after_initial_lands_on_2s_floor() {
    let mut backoff = Backoff::initial();
    backoff.advance(false);
    assert_eq!(backoff.interval(), Duration::from_secs(2));
}

#[yare::parameterized(
    second_tick = { 2, Duration::from_secs(4) },
    third_tick = { 3, Duration::from_secs(8) },
    fourth_tick = { 4, Duration::from_secs(16) },
    fifth_tick = { 5, Duration::from_secs(32) },
)]
fn doubling_sequence(ticks: usize, expected: Duration) {
    let mut backoff = Backoff::initial();
    for _ in 0..ticks {
        backoff.advance(false);
    }
    assert_eq!(backoff.interval(), expected);
}

#[test]
fn saturates_at_32s() {
    let mut backoff = Backoff::initial();
    for _ in 0..10 {
        backoff.advance(false);
    }
    assert_eq!(backoff.interval(), Duration::from_secs(32));
}

#[test]
fn active_state_clamps_to_2s_even_from_a_larger_interval() {
    let mut backoff = Backoff::initial();
    for _ in 0..5 {
        backoff.advance(false);
    }
    assert_eq!(backoff.interval(), Duration::from_secs(32));

    backoff.advance(true);
    assert_eq!(backoff.interval(), Duration::from_secs(2));
}

#[test]
fn reset_returns_to_2s_floor_from_anywhere() {
    let mut backoff = Backoff::initial();
    for _ in 0..5 {
        backoff.advance(false);
    }
    backoff.reset();
    assert_eq!(backoff.interval(), Duration::from_secs(2));
}

#[test]
fn consecutive_active_ticks_stay_at_2s() {
    let mut backoff = Backoff::initial();
    backoff.advance(true);
    backoff.advance(true);
    backoff.advance(true);
    assert_eq!(backoff.interval(), Duration::from_secs(2));
}
