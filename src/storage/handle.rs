// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

use std::{
    ops::{Deref, DerefMut},
    sync::{Arc, Mutex, MutexGuard},
};

use super::SharedStorage;

/// A copyable handle onto the shared storage aggregate. Cloning shares the
/// same underlying mutex and data; it does not duplicate storage.
#[derive(Clone)]
pub struct StorageHandle(Arc<Mutex<SharedStorage>>);

impl StorageHandle {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(SharedStorage::new())))
    }

    /// Acquires the single aggregate mutex. The returned grant gives
    /// exclusive read/write access to the storage for as long as it lives;
    /// the lock is released when it is dropped.
    ///
    /// A poisoned mutex means some prior holder panicked while the aggregate
    /// may have been left inconsistent. That is a fatal condition: rather
    /// than risk operating on torn state, this terminates the process.
    pub fn guard(&self) -> StorageGuard<'_> {
        match self.0.lock() {
            Ok(guard) => StorageGuard(guard),
            Err(_) => {
                tracing::error!("shared storage mutex poisoned, terminating");
                panic!("shared storage mutex poisoned");
            },
        }
    }
}

impl Default for StorageHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// The scoped proof-of-lock object. Derefs transparently to the aggregate.
pub struct StorageGuard<'a>(MutexGuard<'a, SharedStorage>);

impl Deref for StorageGuard<'_> {
    type Target = SharedStorage;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for StorageGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
