// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

use std::fmt;

use pnet::util::MacAddr;
use serde::{Serialize, Serializer};

/// A 48-bit Ethernet hardware address.
///
/// Thin newtype over [`pnet::util::MacAddr`] so the rest of the crate talks
/// about "hardware addresses" in the vocabulary of the spec rather than
/// `pnet`'s, while still getting `Eq`/`Ord`/`Hash`/`Display` for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MacAddress(MacAddr);

impl MacAddress {
    pub const BROADCAST: MacAddress = MacAddress(MacAddr(0xff, 0xff, 0xff, 0xff, 0xff, 0xff));

    pub fn new(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8) -> Self {
        Self(MacAddr::new(a, b, c, d, e, f))
    }

    pub fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(MacAddr::new(
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5],
        ))
    }

    pub fn octets(&self) -> [u8; 6] {
        let MacAddr(a, b, c, d, e, f) = self.0;
        [a, b, c, d, e, f]
    }

    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }
}

impl From<MacAddr> for MacAddress {
    fn from(addr: MacAddr) -> Self {
        Self(addr)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for MacAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        serializer.collect_str(self)
    }
}
