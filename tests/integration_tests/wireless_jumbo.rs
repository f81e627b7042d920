// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! Scenario 5: a frame above the Ethernet MTU destined for a wireless-named
//! interface is dropped silently rather than injected.

use std::time::Duration;

use netbridge_rs::model::mac::MacAddress;

use crate::integration_tests::common::{recv_within, tcp_frame, two_port_bridge};

#[test]
fn oversized_frames_never_reach_a_wireless_interface() {
    let eth_addr = MacAddress::new(0x02, 0xdd, 0, 0, 0, 1);
    let wifi_addr = MacAddress::new(0x02, 0xdd, 0, 0, 0, 2);
    let (controller, io_a, io_wifi) = two_port_bridge("eth0", eth_addr, "wlo0", wifi_addr);

    let mut frame = tcp_frame(MacAddress::new(0x02, 0, 0, 0, 0, 7), wifi_addr);
    frame.extend(std::iter::repeat(0xab).take(2000));
    assert!(frame.len() > 1500);

    io_a.arrive.send(frame.clone()).expect("oversized frame arrives on eth0");

    assert!(
        recv_within(&io_wifi, Duration::from_millis(300)).is_none(),
        "oversized frame must not be injected onto the wireless link"
    );
    assert!(!controller.storage_handle().guard().was_sent(&frame));
}
