// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

use crate::model::timeout::Timeout;

/// Stable content hash used for sent-packet loop suppression.
///
/// Byte-for-byte the function pinned by the spec: start with the length,
/// then fold every byte in with `h ^= byte + 73 + (h >> 1) + (h << 3)`.
/// Must not be swapped for a generic hasher — a dedicated test pins its
/// exact collision behavior on small frames.
pub fn content_hash(data: &[u8]) -> u64 {
    let mut h: u64 = data.len() as u64;
    for &byte in data {
        h ^= (byte as u64)
            .wrapping_add(73)
            .wrapping_add(h >> 1)
            .wrapping_add(h << 3);
    }
    h
}

/// An entry in the sent-packet set: the raw bytes the bridge injected, their
/// content hash, and the deadline after which the entry no longer suppresses
/// a loopback.
#[derive(Debug, Clone)]
pub struct SentPacket {
    pub hash: u64,
    pub data: Vec<u8>,
    pub timeout: Timeout,
}

impl SentPacket {
    pub fn new(data: Vec<u8>, timeout: Timeout) -> Self {
        let hash = content_hash(&data);
        Self {
            hash,
            data,
            timeout,
        }
    }

    /// Membership is byte-exact; the hash is only a pre-filter.
    pub fn matches(&self, data: &[u8]) -> bool {
        self.data == data
    }
}

impl PartialEq for SentPacket {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}
impl Eq for SentPacket {}
