// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! A shared registry of per-interface injection handles. A capture loop
//! bound to interface A needs to inject onto interface B when forwarding or
//! flooding, not only onto its own wire — this registry is how it reaches
//! another loop's sender half without owning it.

use std::{
    collections::HashMap,
    io,
    sync::{Arc, Mutex},
};

use crate::{capture::channel::FrameSender, model::interface::InterfaceId};

#[derive(Clone, Default)]
pub struct SenderRegistry {
    inner: Arc<Mutex<HashMap<InterfaceId, Box<dyn FrameSender>>>>,
}

impl SenderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, id: InterfaceId, sender: Box<dyn FrameSender>) {
        self.inner
            .lock()
            .expect("sender registry mutex poisoned")
            .insert(id, sender);
    }

    pub fn clear(&self) {
        self.inner.lock().expect("sender registry mutex poisoned").clear();
    }

    /// Sends on the named interface's sender, if one is registered.
    pub fn send(&self, id: &InterfaceId, data: &[u8]) -> io::Result<()> {
        let mut guard = self.inner.lock().expect("sender registry mutex poisoned");
        match guard.get_mut(id) {
            Some(sender) => sender.send(data),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no sender registered for interface {id:?}"),
            )),
        }
    }
}
