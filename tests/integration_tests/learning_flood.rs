// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! Scenario 1 from the spec: an unknown destination on a fresh bridge is
//! learned on the ingress side and flooded to the other port.

use std::time::Duration;

use netbridge_rs::model::mac::MacAddress;

use crate::integration_tests::common::{recv_within, tcp_frame, two_port_bridge};

#[test]
fn learning_floods_to_the_other_interface_and_records_the_source() {
    let src = MacAddress::new(0x02, 0, 0, 0, 0, 1);
    let dst = MacAddress::new(0x02, 0, 0, 0, 0, 2);
    let (controller, io_a, io_b) = two_port_bridge("eth0", MacAddress::new(0x02, 0xaa, 0, 0, 0, 1), "eth1", MacAddress::new(0x02, 0xaa, 0, 0, 0, 2));

    let frame = tcp_frame(src, dst);
    io_a.arrive.send(frame.clone()).expect("frame lands on eth0");

    let flooded = recv_within(&io_b, Duration::from_millis(500)).expect("flooded onto eth1");
    assert_eq!(flooded, frame);
    assert!(recv_within(&io_a, Duration::from_millis(100)).is_none(), "never echoed back on ingress");

    let guard = controller.storage_handle().guard();
    let learned = guard.lookup_mac(&src).expect("source learned");
    assert_eq!(learned.interface.os_name, "eth0");
    assert!(guard.was_sent(&frame));
}
