// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! Black-box checks on the sent-packet content hash: pure, deterministic,
//! and only a pre-filter ahead of byte-exact equality.

use netbridge_rs::model::packet::content_hash;

#[test]
fn hash_is_pure_in_the_frame_bytes() {
    let frame = vec![0x02, 0, 0, 0, 0, 1, 0x02, 0, 0, 0, 0, 2, 0x08, 0x00];
    assert_eq!(content_hash(&frame), content_hash(&frame.clone()));
}

#[test]
fn a_single_byte_change_changes_the_hash() {
    let mut a = vec![1u8; 64];
    let b = a.clone();
    a[40] ^= 0xff;
    assert_ne!(content_hash(&a), content_hash(&b));
}

#[test]
fn length_participates_in_the_hash() {
    let short = vec![5u8; 10];
    let mut long = short.clone();
    long.push(5);
    assert_ne!(content_hash(&short), content_hash(&long));
}
