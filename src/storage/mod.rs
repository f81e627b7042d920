// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! The shared storage aggregate: every piece of mutable bridge state behind
//! a single mutex, plus the scoped access grant used to reach it.

pub mod handle;

use std::time::Duration;

use crate::model::{
    interface::{InterfaceId, InterfaceRecord, ThreadControl},
    mac::MacAddress,
    packet::SentPacket,
    protocol::ProtocolStack,
    session::Session,
    stats::{StatsEntry, StatsKey},
    timeout::Timeout,
    DeviceInfo,
};

pub use handle::{StorageGuard, StorageHandle};

pub const DEFAULT_SENT_PACKET_TIMEOUT: Duration = Duration::from_secs(30);

/// A learned MAC table entry.
#[derive(Debug, Clone)]
pub struct MacEntry {
    pub interface: InterfaceId,
    pub timeout: Timeout,
}

/// Everything the bridge core mutates, guarded by exactly one mutex.
///
/// `sent_packet_timeout` and `session_timeout` are runtime-configurable (see
/// `cfg::config::DeviceConfig`) but, unlike `device_info`, are not reset by
/// [`Self::reset`] — they are process-wide policy, not per-run bridge state.
#[derive(Debug)]
pub struct SharedStorage {
    pub mac_table: std::collections::HashMap<MacAddress, MacEntry>,
    pub sent_packets: Vec<SentPacket>,
    pub statistics: std::collections::HashMap<StatsKey, StatsEntry>,
    pub interfaces: Vec<InterfaceRecord>,
    pub sessions: Vec<Session>,
    pub device_info: DeviceInfo,
    pub rest_thread_control: ThreadControl,
    pub sent_packet_timeout: Duration,
    pub session_timeout: Duration,
}

impl Default for SharedStorage {
    fn default() -> Self {
        Self {
            mac_table: Default::default(),
            sent_packets: Default::default(),
            statistics: Default::default(),
            interfaces: Default::default(),
            sessions: Default::default(),
            device_info: Default::default(),
            rest_thread_control: Default::default(),
            sent_packet_timeout: DEFAULT_SENT_PACKET_TIMEOUT,
            session_timeout: crate::model::session::DEFAULT_SESSION_TIMEOUT,
        }
    }
}

impl SharedStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears MAC table, statistics, sessions, sent packets and interfaces;
    /// restores device info to defaults. `rest_thread_control` is left
    /// untouched — it belongs to the REST thread's own lifecycle, not to a
    /// network-start/reset cycle.
    pub fn reset(&mut self) {
        self.mac_table.clear();
        self.sent_packets.clear();
        self.statistics.clear();
        self.interfaces.clear();
        self.sessions.clear();
        self.device_info = DeviceInfo::default();
    }

    // --- MAC table -----------------------------------------------------

    /// Unconditional refresh-on-seen upsert.
    pub fn learn_mac(&mut self, addr: MacAddress, interface: InterfaceId) {
        let timeout = Timeout::new(self.device_info.default_mac_timeout);
        self.mac_table.insert(addr, MacEntry { interface, timeout });
    }

    pub fn lookup_mac(&self, addr: &MacAddress) -> Option<&MacEntry> {
        self.mac_table.get(addr)
    }

    pub fn clear_mac(&mut self) {
        self.mac_table.clear();
    }

    pub fn reset_mac_timeouts(&mut self) {
        let duration = self.device_info.default_mac_timeout;
        for entry in self.mac_table.values_mut() {
            entry.timeout = Timeout::new(duration);
        }
    }

    pub fn set_default_mac_timeout(&mut self, duration: Duration) {
        self.device_info.default_mac_timeout = duration;
    }

    /// Removes every MAC entry whose timeout has expired.
    pub fn evict_mac(&mut self) {
        self.mac_table.retain(|_, entry| !entry.timeout.expired());
    }

    // --- sent-packet set -------------------------------------------------

    pub fn record_sent(&mut self, data: Vec<u8>) {
        self.sent_packets
            .push(SentPacket::new(data, Timeout::new(self.sent_packet_timeout)));
    }

    /// Byte-exact membership test (the hash only narrows the scan).
    pub fn was_sent(&self, data: &[u8]) -> bool {
        let needle_hash = crate::model::packet::content_hash(data);
        self.sent_packets
            .iter()
            .any(|p| p.hash == needle_hash && p.matches(data))
    }

    pub fn clear_sent_packets(&mut self) {
        self.sent_packets.clear();
    }

    pub fn evict_sent_packets(&mut self) {
        self.sent_packets.retain(|p| !p.timeout.expired());
    }

    // --- statistics ------------------------------------------------------

    pub fn record_input(&mut self, stack: &ProtocolStack, interface: &InterfaceId) {
        for protocol in stack.present() {
            let key = StatsKey::new(protocol, interface.clone());
            self.statistics.entry(key).or_default().input += 1;
        }
    }

    pub fn record_output(&mut self, stack: &ProtocolStack, interface: &InterfaceId) {
        for protocol in stack.present() {
            let key = StatsKey::new(protocol, interface.clone());
            self.statistics.entry(key).or_default().output += 1;
        }
    }

    pub fn clear_statistics(&mut self, interface: Option<&InterfaceId>) {
        match interface {
            Some(iface) => self.statistics.retain(|key, _| &key.interface != iface),
            None => self.statistics.clear(),
        }
    }

    // --- interfaces ------------------------------------------------------

    pub fn find_interface_index(&self, id: &InterfaceId) -> Option<usize> {
        self.interfaces.iter().position(|rec| &rec.id == id)
    }

    pub fn find_interface_by_address(&self, addr: MacAddress) -> Option<usize> {
        self.interfaces
            .iter()
            .position(|rec| rec.id.address == addr)
    }

    pub fn register_interface(&mut self, record: InterfaceRecord) -> usize {
        if let Some(index) = self.find_interface_index(&record.id) {
            self.interfaces[index] = record;
            index
        } else {
            self.interfaces.push(record);
            self.interfaces.len() - 1
        }
    }

    // --- sessions ----------------------------------------------------------

    pub fn add_session(&mut self, token: String) {
        self.sessions.push(Session::new(token, self.session_timeout));
    }

    pub fn token_is_live(&self, token: &str) -> bool {
        self.sessions
            .iter()
            .any(|s| s.token == token && !s.timeout.expired())
    }

    /// Resets the matching session's timeout (refresh-on-use). Returns
    /// whether a live session matched.
    pub fn touch_session(&mut self, token: &str) -> bool {
        match self
            .sessions
            .iter_mut()
            .find(|s| s.token == token && !s.timeout.expired())
        {
            Some(session) => {
                session.timeout.reset();
                true
            },
            None => false,
        }
    }

    pub fn remove_session(&mut self, token: &str) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.token != token);
        self.sessions.len() != before
    }

    pub fn clear_sessions(&mut self) {
        self.sessions.clear();
    }

    pub fn evict_sessions(&mut self) {
        self.sessions.retain(|s| !s.timeout.expired());
    }
}
