// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

use serde::Serialize;

use crate::model::mac::MacAddress;

/// Opaque interface identity: the operating-system interface name plus its
/// own hardware address. Used as the value type in the MAC table and as the
/// self-identity a capture loop compares incoming frames against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterfaceId {
    pub os_name: String,
    pub address: MacAddress,
}

impl InterfaceId {
    pub fn new(os_name: impl Into<String>, address: MacAddress) -> Self {
        Self {
            os_name: os_name.into(),
            address,
        }
    }

    /// Known wireless driver name prefixes (`wlo0`, `wlan0`, `wlp2s0`, ...).
    /// A frame above the Ethernet MTU must never be sent on such a link.
    pub fn is_wireless(&self) -> bool {
        const WIRELESS_PREFIXES: [&str; 3] = ["wlo", "wlan", "wl"];
        WIRELESS_PREFIXES
            .iter()
            .any(|prefix| self.os_name.starts_with(prefix))
    }
}

/// The start/stop/finished control pair shared between a lifecycle
/// controller and the thread it drives (a capture loop or the REST thread).
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadControl {
    pub running: bool,
    pub finished: bool,
}

/// A registered interface: its identity, its mutable display name and
/// admin-up flag, and the control pair of the thread bound to it.
#[derive(Debug, Clone)]
pub struct InterfaceRecord {
    pub id: InterfaceId,
    pub display_name: String,
    pub up: bool,
    pub control: ThreadControl,
}

impl InterfaceRecord {
    pub fn new(id: InterfaceId) -> Self {
        let display_name = id.os_name.clone();
        Self {
            id,
            display_name,
            up: true,
            control: ThreadControl::default(),
        }
    }
}

/// Wire representation of an interface for the management surface.
#[derive(Debug, Clone, Serialize)]
pub struct InterfaceView {
    pub id: usize,
    pub name: String,
    pub up: bool,
    pub address: MacAddress,
}

impl InterfaceView {
    pub fn from_record(id: usize, record: &InterfaceRecord) -> Self {
        Self {
            id,
            name: record.display_name.clone(),
            up: record.up,
            address: record.id.address,
        }
    }
}
