// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! Black-box checks on the timeout primitive's public surface, pinning the
//! correct `expired()` polarity the spec explicitly calls out a past
//! revision getting backwards.

use std::{thread::sleep, time::Duration};

use netbridge_rs::model::timeout::Timeout;

#[test]
fn a_timeout_with_zero_duration_is_expired_not_fresh() {
    let t = Timeout::new(Duration::from_millis(0));
    sleep(Duration::from_millis(2));
    assert!(t.expired(), "start + duration < now() must be expired, not the reverse");
}

#[test]
fn a_freshly_reset_timeout_has_positive_time_left() {
    let mut t = Timeout::new(Duration::from_millis(5));
    sleep(Duration::from_millis(10));
    assert!(t.expired());
    t.reset();
    assert!(t.time_left_millis() > 0);
}

#[test]
fn time_left_can_go_negative_but_clamped_view_cannot() {
    let t = Timeout::new(Duration::from_millis(0));
    sleep(Duration::from_millis(5));
    assert!(t.time_left_millis() < 0);
    assert_eq!(t.time_left_millis_clamped(), 0);
}
