// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! Scenario 3: the same bytes arriving twice on the ingress interface
//! (simulating a peer echoing back what the bridge just injected) is
//! suppressed the second time via the sent-packet set.

use std::time::Duration;

use netbridge_rs::model::mac::MacAddress;

use crate::integration_tests::common::{recv_within, tcp_frame, two_port_bridge};

#[test]
fn a_repeated_frame_is_dropped_the_second_time() {
    let src = MacAddress::new(0x02, 0, 0, 0, 0, 5);
    let dst = MacAddress::new(0x02, 0, 0, 0, 0, 6);
    let (controller, io_a, io_b) = two_port_bridge(
        "eth0",
        MacAddress::new(0x02, 0xbb, 0, 0, 0, 1),
        "eth1",
        MacAddress::new(0x02, 0xbb, 0, 0, 0, 2),
    );

    let frame = tcp_frame(src, dst);

    io_a.arrive.send(frame.clone()).expect("first arrival");
    recv_within(&io_b, Duration::from_millis(500)).expect("first flood goes out");

    let stats_after_first = controller.storage_handle().guard().statistics.len();

    // Simulate the bridge's own injected copy looping back onto eth0.
    io_a.arrive.send(frame.clone()).expect("second arrival, a loop");
    assert!(
        recv_within(&io_b, Duration::from_millis(200)).is_none(),
        "duplicate frame must not be forwarded again"
    );

    let stats_after_second = controller.storage_handle().guard().statistics.len();
    assert_eq!(stats_after_first, stats_after_second, "a dropped duplicate opens no new stat buckets");
}
