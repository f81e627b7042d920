// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

use std::thread::JoinHandle;

use tracing::{debug, trace, warn};

use crate::{
    capture::{channel::FrameReceiver, senders::SenderRegistry},
    model::{frame, interface::InterfaceId, protocol::ProtocolStack},
    storage::StorageHandle,
};

/// Drives one bound interface's capture/forward/flood loop on its own OS
/// thread. The receiver half is owned exclusively by the loop; the sender
/// half was handed to the shared [`SenderRegistry`] before this was built,
/// so peer loops can inject onto this interface too.
pub struct CaptureThreadHandle {
    interface: InterfaceId,
    storage: StorageHandle,
    join: Option<JoinHandle<()>>,
}

impl CaptureThreadHandle {
    /// Spawns the loop thread. `storage` must already have an
    /// [`crate::model::interface::InterfaceRecord`] for `interface` with
    /// `control.running == true` before frames start flowing, so the thread
    /// doesn't race its own startup flag.
    pub fn spawn(
        interface: InterfaceId,
        storage: StorageHandle,
        senders: SenderRegistry,
        mut receiver: Box<dyn FrameReceiver>,
    ) -> Self {
        let thread_interface = interface.clone();
        let thread_storage = storage.clone();

        let join = std::thread::Builder::new()
            .name(format!("capture-{}", interface.os_name))
            .spawn(move || {
                run_loop(thread_interface, thread_storage, senders, receiver.as_mut());
            })
            .expect("failed to spawn capture thread");

        Self {
            interface,
            storage,
            join: Some(join),
        }
    }

    pub fn interface(&self) -> &InterfaceId {
        &self.interface
    }

    /// Cooperative stop: flips `running` false under the storage mutex. The
    /// loop notices at its next poll return; this does not join the thread.
    pub fn signal_stop(&self) {
        let mut guard = self.storage.guard();
        if let Some(idx) = guard.find_interface_index(&self.interface) {
            guard.interfaces[idx].control.running = false;
        }
    }
}

impl Drop for CaptureThreadHandle {
    fn drop(&mut self) {
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

fn is_running(storage: &StorageHandle, interface: &InterfaceId) -> bool {
    let guard = storage.guard();
    guard
        .find_interface_index(interface)
        .map(|idx| guard.interfaces[idx].control.running)
        .unwrap_or(false)
}

fn mark_finished(storage: &StorageHandle, interface: &InterfaceId) {
    let mut guard = storage.guard();
    if let Some(idx) = guard.find_interface_index(interface) {
        guard.interfaces[idx].control.finished = true;
    }
}

fn run_loop(
    interface: InterfaceId,
    storage: StorageHandle,
    senders: SenderRegistry,
    receiver: &mut dyn FrameReceiver,
) {
    debug!(interface = %interface.os_name, "capture loop starting");

    loop {
        match receiver.recv_timeout() {
            Ok(Some(data)) => process_frame(&interface, &storage, &senders, data),
            Ok(None) => {},
            Err(e) => warn!(interface = %interface.os_name, error = %e, "capture poll failed"),
        }

        if !is_running(&storage, &interface) {
            break;
        }
    }

    mark_finished(&storage, &interface);
    debug!(interface = %interface.os_name, "capture loop exiting");
}

fn process_frame(
    interface: &InterfaceId,
    storage: &StorageHandle,
    senders: &SenderRegistry,
    data: Vec<u8>,
) {
    let decoded = match frame::decode(&data) {
        Some(decoded) => decoded,
        None => return,
    };

    let mut guard = storage.guard();

    let own_up = guard
        .find_interface_index(interface)
        .map(|idx| guard.interfaces[idx].up)
        .unwrap_or(false);
    if !own_up {
        return;
    }

    if guard.was_sent(&data) {
        trace!(interface = %interface.os_name, "dropping frame already seen in sent-set");
        return;
    }

    guard.record_input(&decoded.stack, interface);

    if decoded.src == interface.address {
        return; // self-echo
    }

    guard.learn_mac(decoded.src, interface.clone());

    if decoded.dst == interface.address {
        return; // addressed to the host, not to be bridged
    }

    if let Some(idx) = guard.find_interface_by_address(decoded.dst) {
        let target = guard.interfaces[idx].id.clone();
        if target != *interface {
            send_on(&mut guard, senders, &target, &decoded.stack, &data);
        }
        return;
    }

    if let Some(entry) = guard.lookup_mac(&decoded.dst) {
        let target = entry.interface.clone();
        if target == *interface {
            return; // the recipient has already seen it on this segment
        }
        send_on(&mut guard, senders, &target, &decoded.stack, &data);
        return;
    }

    let targets: Vec<InterfaceId> = guard
        .interfaces
        .iter()
        .map(|rec| rec.id.clone())
        .filter(|id| id != interface)
        .collect();
    for target in targets {
        send_on(&mut guard, senders, &target, &decoded.stack, &data);
    }
}

/// Inserts into the sent-set *before* the wire write (closes the loop-race
/// the distilled spec calls out), increments output counters, then injects.
fn send_on(
    guard: &mut crate::storage::StorageGuard<'_>,
    senders: &SenderRegistry,
    target: &InterfaceId,
    stack: &ProtocolStack,
    data: &[u8],
) {
    if data.len() > 1500 && target.is_wireless() {
        trace!(interface = %target.os_name, "dropping oversized frame on wireless link");
        return;
    }

    guard.record_sent(data.to_vec());
    guard.record_output(stack, target);

    if let Err(e) = senders.send(target, data) {
        warn!(interface = %target.os_name, error = %e, "frame injection failed");
    }
}
