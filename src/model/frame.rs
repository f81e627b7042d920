// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! Ethernet frame decoding: pulls out source/destination hardware addresses
//! and which protocol layers are present, for the capture loop's
//! classification step and the statistics table.

use pnet::packet::{
    arp::ArpPacket,
    ethernet::{EtherTypes, EthernetPacket},
    icmp::IcmpPacket,
    ip::IpNextHeaderProtocols,
    ipv4::Ipv4Packet,
    tcp::TcpPacket,
    udp::UdpPacket,
    Packet,
};

use crate::model::{
    mac::MacAddress,
    protocol::{ProtocolStack, HTTP_PORTS},
};

/// The parts of an incoming frame the capture loop needs.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    pub src: MacAddress,
    pub dst: MacAddress,
    pub stack: ProtocolStack,
}

/// Decodes a raw frame as EthernetII, walking into IP/ARP and then
/// TCP/UDP/ICMP to build the protocol stack. Returns `None` if the bytes
/// are too short to be a valid EthernetII frame.
pub fn decode(data: &[u8]) -> Option<DecodedFrame> {
    let eth = EthernetPacket::new(data)?;
    let src: MacAddress = eth.get_source().into();
    let dst: MacAddress = eth.get_destination().into();

    let mut stack = ProtocolStack {
        ethernet_ii: true,
        ..Default::default()
    };

    match eth.get_ethertype() {
        EtherTypes::Arp => {
            stack.arp = ArpPacket::new(eth.payload()).is_some();
        },
        EtherTypes::Ipv4 => {
            if let Some(ipv4) = Ipv4Packet::new(eth.payload()) {
                stack.ip = true;
                decode_transport(ipv4.get_next_level_protocol(), ipv4.payload(), &mut stack);
            }
        },
        _ => {},
    }

    Some(DecodedFrame { src, dst, stack })
}

fn decode_transport(
    proto: pnet::packet::ip::IpNextHeaderProtocol,
    payload: &[u8],
    stack: &mut ProtocolStack,
) {
    match proto {
        IpNextHeaderProtocols::Tcp => {
            if let Some(tcp) = TcpPacket::new(payload) {
                stack.tcp = true;
                let sport = tcp.get_source();
                let dport = tcp.get_destination();
                stack.http = HTTP_PORTS.contains(&sport) || HTTP_PORTS.contains(&dport);
            }
        },
        IpNextHeaderProtocols::Udp => {
            stack.udp = UdpPacket::new(payload).is_some();
        },
        IpNextHeaderProtocols::Icmp => {
            stack.icmp = IcmpPacket::new(payload).is_some();
        },
        _ => {},
    }
}
