// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! Scenario 4: a frame whose source address is the ingress interface's own
//! hardware address is dropped before the MAC table is touched.

use std::time::Duration;

use netbridge_rs::model::mac::MacAddress;

use crate::integration_tests::common::{recv_within, tcp_frame, two_port_bridge};

#[test]
fn self_echo_is_dropped_before_learning() {
    let own_address = MacAddress::new(0x02, 0xcc, 0, 0, 0, 1);
    let other_address = MacAddress::new(0x02, 0xcc, 0, 0, 0, 2);
    let (controller, io_a, io_b) = two_port_bridge("eth0", own_address, "eth1", other_address);

    let frame = tcp_frame(own_address, MacAddress::new(0x02, 0, 0, 0, 0, 9));
    io_a.arrive.send(frame).expect("self-sourced frame arrives");

    assert!(recv_within(&io_b, Duration::from_millis(200)).is_none(), "never forwarded");
    assert!(
        controller.storage_handle().guard().lookup_mac(&own_address).is_none(),
        "own address never enters the MAC table via self-echo"
    );
}
