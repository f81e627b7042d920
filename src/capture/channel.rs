// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! The capture/injection capability: `open(iface) -> (sender, receiver)`,
//! `receiver.recv_timeout()`, `sender.send(bytes)`. This is the trait
//! boundary the spec calls out as an external collaborator; the concrete
//! implementation below binds it to `pnet`'s datalink channels.

use std::{io, time::Duration};

use pnet::datalink::{self, Channel, Config, NetworkInterface};

use crate::{
    error::BridgeError,
    model::{interface::InterfaceId, mac::MacAddress},
};

/// How long a single poll blocks before yielding control back to the loop
/// to re-check its `running` flag.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(500);

/// The half of a capture session that injects frames onto the wire.
pub trait FrameSender: Send {
    fn send(&mut self, data: &[u8]) -> io::Result<()>;
}

/// The half of a capture session that yields frames. `recv_timeout` returns
/// `Ok(None)` on a poll timeout (no frame arrived) rather than blocking
/// forever, so the owning loop can observe a stop signal promptly.
pub trait FrameReceiver: Send {
    fn recv_timeout(&mut self) -> io::Result<Option<Vec<u8>>>;
}

/// Opens a promiscuous, immediate-mode capture session on a named OS
/// interface, with a 500 ms poll timeout.
pub trait CaptureCapability: Send + Sync {
    fn open(
        &self,
        os_name: &str,
    ) -> Result<(InterfaceId, Box<dyn FrameSender>, Box<dyn FrameReceiver>), BridgeError>;
}

/// The real capability, backed by `pnet::datalink`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PnetCapture;

impl CaptureCapability for PnetCapture {
    fn open(
        &self,
        os_name: &str,
    ) -> Result<(InterfaceId, Box<dyn FrameSender>, Box<dyn FrameReceiver>), BridgeError> {
        let iface = find_interface(os_name)
            .ok_or_else(|| BridgeError::UnknownInterface(os_name.to_string()))?;

        let config = Config {
            read_timeout: Some(POLL_TIMEOUT),
            promiscuous: true,
            ..Config::default()
        };

        let channel = datalink::channel(&iface, config).map_err(|source| BridgeError::CaptureOpen {
            iface: os_name.to_string(),
            source,
        })?;

        let (tx, rx) = match channel {
            Channel::Ethernet(tx, rx) => (tx, rx),
            _ => {
                return Err(BridgeError::CaptureOpen {
                    iface: os_name.to_string(),
                    source: io::Error::new(io::ErrorKind::Unsupported, "unhandled channel type"),
                })
            },
        };

        let address = iface
            .mac
            .map(MacAddress::from)
            .unwrap_or(MacAddress::BROADCAST);
        let id = InterfaceId::new(os_name, address);

        Ok((
            id,
            Box::new(PnetSender(tx)),
            Box::new(PnetReceiver(rx)),
        ))
    }
}

fn find_interface(os_name: &str) -> Option<NetworkInterface> {
    datalink::interfaces()
        .into_iter()
        .find(|iface| iface.name == os_name)
}

struct PnetSender(Box<dyn datalink::DataLinkSender>);

impl FrameSender for PnetSender {
    fn send(&mut self, data: &[u8]) -> io::Result<()> {
        match self.0.send_to(data, None) {
            Some(result) => result,
            None => Err(io::Error::new(io::ErrorKind::Other, "send_to produced no result")),
        }
    }
}

struct PnetReceiver(Box<dyn datalink::DataLinkReceiver>);

impl FrameReceiver for PnetReceiver {
    fn recv_timeout(&mut self) -> io::Result<Option<Vec<u8>>> {
        match self.0.next() {
            Ok(bytes) => Ok(Some(bytes.to_vec())),
            Err(e) if e.kind() == io::ErrorKind::TimedOut || e.kind() == io::ErrorKind::WouldBlock => {
                Ok(None)
            },
            Err(e) => Err(e),
        }
    }
}
