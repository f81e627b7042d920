// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! The lifecycle controller: owns the two capture-loop threads and the
//! optional REST thread, and derives run state from shared storage.

use std::{sync::Arc, time::Duration};

use crate::{
    capture::{senders::SenderRegistry, thread::CaptureThreadHandle, CaptureCapability},
    error::BridgeError,
    http::server::RestThreadHandle,
    model::interface::{InterfaceId, InterfaceRecord},
    storage::StorageHandle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchState {
    Idle,
    RunningNetwork,
    RunningRest,
    Stopping,
}

/// Credentials the `/login` endpoint checks the request body against.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "root".to_string(),
            password: "root".to_string(),
        }
    }
}

pub struct BridgeController {
    storage: StorageHandle,
    senders: SenderRegistry,
    capture: Arc<dyn CaptureCapability>,
    interface1: Option<CaptureThreadHandle>,
    interface2: Option<CaptureThreadHandle>,
    rest: Option<RestThreadHandle>,
}

impl BridgeController {
    pub fn new(capture: Arc<dyn CaptureCapability>) -> Self {
        Self {
            storage: StorageHandle::new(),
            senders: SenderRegistry::new(),
            capture,
            interface1: None,
            interface2: None,
            rest: None,
        }
    }

    pub fn storage_handle(&self) -> StorageHandle {
        self.storage.clone()
    }

    pub fn state(&self) -> SwitchState {
        let guard = self.storage.guard();

        if guard.interfaces.is_empty()
            || guard
                .interfaces
                .iter()
                .all(|rec| rec.control.finished && !rec.control.running)
        {
            return SwitchState::Idle;
        }

        let any_stopping = guard
            .interfaces
            .iter()
            .any(|rec| !rec.control.running && !rec.control.finished);
        if any_stopping {
            return SwitchState::Stopping;
        }

        let any_running = guard
            .interfaces
            .iter()
            .any(|rec| rec.control.running && !rec.control.finished);
        if any_running {
            if guard.rest_thread_control.running && !guard.rest_thread_control.finished {
                return SwitchState::RunningRest;
            }
            return SwitchState::RunningNetwork;
        }

        SwitchState::Idle
    }

    /// Opens both interfaces, resets storage, and starts both capture
    /// threads. Forbidden unless [`SwitchState::Idle`].
    pub fn start_network(&mut self, iface1: &str, iface2: &str) -> Result<(), BridgeError> {
        if self.state() != SwitchState::Idle {
            return Err(BridgeError::AlreadyRunning);
        }
        if iface1.is_empty() || iface2.is_empty() {
            return Err(BridgeError::InterfacesUnselected);
        }
        if iface1 == iface2 {
            return Err(BridgeError::DuplicateInterface(iface1.to_string()));
        }

        let (id1, tx1, rx1) = self.capture.open(iface1)?;
        let (id2, tx2, rx2) = self.capture.open(iface2)?;

        {
            let mut guard = self.storage.guard();
            guard.reset();

            let mut rec1 = InterfaceRecord::new(id1.clone());
            rec1.control.running = true;
            let mut rec2 = InterfaceRecord::new(id2.clone());
            rec2.control.running = true;

            guard.register_interface(rec1);
            guard.register_interface(rec2);
        }

        self.senders.clear();
        self.senders.register(id1.clone(), tx1);
        self.senders.register(id2.clone(), tx2);

        self.interface1 = Some(CaptureThreadHandle::spawn(
            id1,
            self.storage.clone(),
            self.senders.clone(),
            rx1,
        ));
        self.interface2 = Some(CaptureThreadHandle::spawn(
            id2,
            self.storage.clone(),
            self.senders.clone(),
            rx2,
        ));

        tracing::info!(interface1 = iface1, interface2 = iface2, "network threads started");
        Ok(())
    }

    /// Sets both `running` flags false; does not join the threads.
    pub fn stop_network(&mut self) -> Result<(), BridgeError> {
        if self.state() == SwitchState::Idle {
            return Err(BridgeError::NotRunning);
        }
        if let Some(handle) = &self.interface1 {
            handle.signal_stop();
        }
        if let Some(handle) = &self.interface2 {
            handle.signal_stop();
        }
        tracing::info!("network threads signaled to stop");
        Ok(())
    }

    /// Starts the HTTP management surface. Forbidden unless
    /// [`SwitchState::RunningNetwork`].
    pub fn start_rest(&mut self, port: u16, credentials: Credentials) -> Result<(), BridgeError> {
        if self.state() != SwitchState::RunningNetwork {
            return Err(BridgeError::RestAlreadyRunning);
        }

        {
            let mut guard = self.storage.guard();
            guard.rest_thread_control.running = true;
            guard.rest_thread_control.finished = false;
        }

        self.rest = Some(RestThreadHandle::start(self.storage.clone(), port, credentials));
        tracing::info!(port, "REST server started");
        Ok(())
    }

    pub fn stop_rest(&mut self) -> Result<(), BridgeError> {
        let guard = self.storage.guard();
        if !guard.rest_thread_control.running {
            return Err(BridgeError::RestNotRunning);
        }
        drop(guard);

        if let Some(handle) = &self.rest {
            handle.signal_stop();
        }
        tracing::info!("REST server signaled to stop");
        Ok(())
    }

    pub fn interfaces(&self) -> (String, String) {
        let i1 = self
            .interface1
            .as_ref()
            .map(|h| h.interface().os_name.clone())
            .unwrap_or_default();
        let i2 = self
            .interface2
            .as_ref()
            .map(|h| h.interface().os_name.clone())
            .unwrap_or_default();
        (i1, i2)
    }

    // --- clear/reset operations, delegated to storage under a grant ---

    pub fn clear_mac(&self) {
        self.storage.guard().clear_mac();
    }

    pub fn clear_statistics(&self, interface: Option<&InterfaceId>) {
        self.storage.guard().clear_statistics(interface);
    }

    pub fn clear_sessions(&self) {
        self.storage.guard().clear_sessions();
    }

    pub fn reset_mac_timeouts(&self) {
        self.storage.guard().reset_mac_timeouts();
    }

    pub fn apply_default_mac_timeout(&self, timeout: Duration) {
        self.storage.guard().set_default_mac_timeout(timeout);
    }
}
