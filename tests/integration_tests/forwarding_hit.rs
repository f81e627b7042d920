// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! Scenario 2: once both sides have been learned, a reply goes out on the
//! single learned interface instead of flooding.

use std::time::Duration;

use netbridge_rs::model::mac::MacAddress;

use crate::integration_tests::common::{recv_within, tcp_frame, two_port_bridge};

#[test]
fn a_learned_destination_is_forwarded_not_flooded() {
    let host1 = MacAddress::new(0x02, 0, 0, 0, 0, 1);
    let host2 = MacAddress::new(0x02, 0, 0, 0, 0, 2);
    let (_controller, io_a, io_b) = two_port_bridge(
        "eth0",
        MacAddress::new(0x02, 0xaa, 0, 0, 0, 1),
        "eth1",
        MacAddress::new(0x02, 0xaa, 0, 0, 0, 2),
    );

    // Learn host1 on eth0 first (the flooded copy lands on eth1).
    io_a.arrive.send(tcp_frame(host1, host2)).expect("first frame arrives");
    recv_within(&io_b, Duration::from_millis(500)).expect("flooded to eth1");

    // host2 replies from eth1; the bridge already knows host1 lives on eth0.
    let reply = tcp_frame(host2, host1);
    io_b.arrive.send(reply.clone()).expect("reply arrives on eth1");

    let forwarded = recv_within(&io_a, Duration::from_millis(500)).expect("forwarded to eth0 only");
    assert_eq!(forwarded, reply);
    assert!(recv_within(&io_b, Duration::from_millis(100)).is_none(), "not flooded back onto eth1");
}
