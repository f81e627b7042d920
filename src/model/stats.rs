// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

use crate::model::{interface::InterfaceId, protocol::Protocol};

/// Key into the statistics table: one counter pair per (protocol, interface).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatsKey {
    pub protocol: Protocol,
    pub interface: InterfaceId,
}

impl StatsKey {
    pub fn new(protocol: Protocol, interface: InterfaceId) -> Self {
        Self {
            protocol,
            interface,
        }
    }
}

/// Input/output frame counters for one [`StatsKey`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsEntry {
    pub input: u64,
    pub output: u64,
}
