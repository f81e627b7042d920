// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! Three independent periodic purges: the MAC table, the sent-packet set,
//! and sessions each age out on their own clock rather than sharing one
//! tick, so a slow session sweep never delays MAC aging.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use crate::storage::{SharedStorage, StorageHandle};

const MAC_EVICTION_PERIOD: Duration = Duration::from_millis(200);
const SENT_PACKET_EVICTION_PERIOD: Duration = Duration::from_millis(300);
const SESSION_EVICTION_PERIOD: Duration = Duration::from_secs(1);

/// Owns the three eviction threads. Dropping it (or calling `stop`) signals
/// all three to exit and joins them.
pub struct EvictionHandle {
    stop: Arc<AtomicBool>,
    joins: Vec<JoinHandle<()>>,
}

impl EvictionHandle {
    pub fn start(storage: StorageHandle) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let joins = vec![
            spawn_ticker(
                "evict-mac",
                storage.clone(),
                stop.clone(),
                MAC_EVICTION_PERIOD,
                SharedStorage::evict_mac,
            ),
            spawn_ticker(
                "evict-sent",
                storage.clone(),
                stop.clone(),
                SENT_PACKET_EVICTION_PERIOD,
                SharedStorage::evict_sent_packets,
            ),
            spawn_ticker(
                "evict-sessions",
                storage,
                stop.clone(),
                SESSION_EVICTION_PERIOD,
                SharedStorage::evict_sessions,
            ),
        ];
        Self { stop, joins }
    }

    pub fn stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}

impl Drop for EvictionHandle {
    fn drop(&mut self) {
        self.stop();
        for join in self.joins.drain(..) {
            let _ = join.join();
        }
    }
}

fn spawn_ticker(
    name: &'static str,
    storage: StorageHandle,
    stop: Arc<AtomicBool>,
    period: Duration,
    evict: fn(&mut SharedStorage),
) -> JoinHandle<()> {
    thread::Builder::new()
        .name(name.to_string())
        .spawn(move || {
            while !stop.load(Ordering::SeqCst) {
                thread::sleep(period);
                if stop.load(Ordering::SeqCst) {
                    break;
                }
                evict(&mut storage.guard());
            }
        })
        .expect("failed to spawn eviction thread")
}
