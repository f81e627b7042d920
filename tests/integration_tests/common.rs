// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

use std::{
    collections::HashMap,
    io,
    sync::{mpsc, Arc, Mutex},
    time::Duration,
};

use netbridge_rs::{
    capture::{CaptureCapability, FrameReceiver, FrameSender},
    error::BridgeError,
    model::{interface::InterfaceId, mac::MacAddress},
    switch::BridgeController,
};

struct ChannelSender(mpsc::Sender<Vec<u8>>);

impl FrameSender for ChannelSender {
    fn send(&mut self, data: &[u8]) -> io::Result<()> {
        self.0
            .send(data.to_vec())
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "observer dropped"))
    }
}

struct ChannelReceiver(mpsc::Receiver<Vec<u8>>);

impl FrameReceiver for ChannelReceiver {
    fn recv_timeout(&mut self) -> io::Result<Option<Vec<u8>>> {
        match self.0.recv_timeout(Duration::from_millis(50)) {
            Ok(frame) => Ok(Some(frame)),
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(None),
            Err(mpsc::RecvTimeoutError::Disconnected) => Ok(None),
        }
    }
}

type Spec = (InterfaceId, Box<dyn FrameSender>, Box<dyn FrameReceiver>);

/// A [`CaptureCapability`] wired entirely to in-process channels, so
/// scenario tests can drive frame arrival and observe injection without a
/// real NIC. Each interface is consumed from the table the first (and only)
/// time it is opened.
pub struct TestCapture {
    specs: Mutex<HashMap<String, Spec>>,
}

impl CaptureCapability for TestCapture {
    fn open(&self, os_name: &str) -> Result<Spec, BridgeError> {
        self.specs
            .lock()
            .expect("test capture mutex poisoned")
            .remove(os_name)
            .ok_or_else(|| BridgeError::UnknownInterface(os_name.to_string()))
    }
}

/// The test's own handle onto one fixture interface: `arrive` simulates a
/// frame landing on the wire, `observe` drains whatever the bridge injected
/// back onto that same wire.
pub struct TestIo {
    pub arrive: mpsc::Sender<Vec<u8>>,
    pub observe: mpsc::Receiver<Vec<u8>>,
}

fn fixture(os_name: &str, addr: MacAddress) -> (TestIo, String, Spec) {
    let (arrive_tx, arrive_rx) = mpsc::channel();
    let (observe_tx, observe_rx) = mpsc::channel();
    let id = InterfaceId::new(os_name, addr);
    let spec: Spec = (
        id,
        Box::new(ChannelSender(observe_tx)),
        Box::new(ChannelReceiver(arrive_rx)),
    );
    (
        TestIo {
            arrive: arrive_tx,
            observe: observe_rx,
        },
        os_name.to_string(),
        spec,
    )
}

/// Builds a running two-port bridge over two fixture interfaces and hands
/// back the test's I/O handles for each side.
pub fn two_port_bridge(
    name_a: &str,
    addr_a: MacAddress,
    name_b: &str,
    addr_b: MacAddress,
) -> (BridgeController, TestIo, TestIo) {
    let (io_a, key_a, spec_a) = fixture(name_a, addr_a);
    let (io_b, key_b, spec_b) = fixture(name_b, addr_b);

    let mut specs = HashMap::new();
    specs.insert(key_a, spec_a);
    specs.insert(key_b, spec_b);

    let capture = Arc::new(TestCapture {
        specs: Mutex::new(specs),
    });
    let mut controller = BridgeController::new(capture);
    controller.start_network(name_a, name_b).expect("bridge starts");

    (controller, io_a, io_b)
}

pub fn recv_within(io: &TestIo, timeout: Duration) -> Option<Vec<u8>> {
    io.observe.recv_timeout(timeout).ok()
}

/// Builds a minimal Ethernet/IPv4/TCP frame between two hardware addresses.
pub fn tcp_frame(src: MacAddress, dst: MacAddress) -> Vec<u8> {
    use pnet::packet::{
        ethernet::{EtherTypes, MutableEthernetPacket},
        ip::IpNextHeaderProtocols,
        ipv4::MutableIpv4Packet,
        tcp::MutableTcpPacket,
    };

    const ETH_LEN: usize = 14;
    const IP_LEN: usize = 20;
    const TCP_LEN: usize = 20;

    let mut buf = vec![0u8; ETH_LEN + IP_LEN + TCP_LEN];
    {
        let mut eth = MutableEthernetPacket::new(&mut buf).expect("eth buffer sized correctly");
        eth.set_source(src.octets().into());
        eth.set_destination(dst.octets().into());
        eth.set_ethertype(EtherTypes::Ipv4);
    }
    {
        let mut ip = MutableIpv4Packet::new(&mut buf[ETH_LEN..]).expect("ip buffer sized correctly");
        ip.set_version(4);
        ip.set_header_length(5);
        ip.set_total_length((IP_LEN + TCP_LEN) as u16);
        ip.set_next_level_protocol(IpNextHeaderProtocols::Tcp);
        ip.set_ttl(64);
    }
    {
        let mut tcp =
            MutableTcpPacket::new(&mut buf[ETH_LEN + IP_LEN..]).expect("tcp buffer sized correctly");
        tcp.set_source(11111);
        tcp.set_destination(443);
        tcp.set_data_offset(5);
    }
    buf
}
