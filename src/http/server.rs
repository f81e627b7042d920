// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! The REST thread: owns a single-threaded tokio runtime and an `axum`
//! server, polling the same `running` flag convention the capture threads
//! use rather than wiring up a dedicated shutdown channel.

use std::{sync::Arc, thread::JoinHandle, time::Duration};

use crate::{http::routes, storage::StorageHandle, switch::Credentials};

#[derive(Clone)]
pub struct AppState {
    pub storage: StorageHandle,
    pub credentials: Arc<Credentials>,
}

pub struct RestThreadHandle {
    storage: StorageHandle,
    join: Option<JoinHandle<()>>,
}

impl RestThreadHandle {
    pub fn start(storage: StorageHandle, port: u16, credentials: Credentials) -> Self {
        let thread_storage = storage.clone();

        let join = std::thread::Builder::new()
            .name("rest".to_string())
            .spawn(move || run_server(thread_storage, port, credentials))
            .expect("failed to spawn REST thread");

        Self {
            storage,
            join: Some(join),
        }
    }

    /// Cooperative stop: flips `running` false under the storage mutex. The
    /// server notices at its next shutdown-poll tick.
    pub fn signal_stop(&self) {
        self.storage.guard().rest_thread_control.running = false;
    }
}

impl Drop for RestThreadHandle {
    fn drop(&mut self) {
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

fn run_server(storage: StorageHandle, port: u16, credentials: Credentials) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build REST runtime");

    let state = AppState {
        storage: storage.clone(),
        credentials: Arc::new(credentials),
    };

    runtime.block_on(async move {
        let app = routes::router(state);
        let listener = match tokio::net::TcpListener::bind(("0.0.0.0", port)).await {
            Ok(listener) => listener,
            Err(e) => {
                tracing::error!(port, error = %e, "REST server failed to bind");
                return;
            },
        };

        let shutdown_storage = storage.clone();
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(wait_for_stop(shutdown_storage))
            .await;

        if let Err(e) = result {
            tracing::error!(error = %e, "REST server exited with an error");
        }
    });

    let mut guard = storage.guard();
    guard.rest_thread_control.finished = true;
}

async fn wait_for_stop(storage: StorageHandle) {
    loop {
        tokio::time::sleep(Duration::from_millis(200)).await;
        if !storage.guard().rest_thread_control.running {
            break;
        }
    }
}
