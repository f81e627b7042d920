// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

use std::sync::Arc;

use anyhow::{Context, Result};
use netbridge_rs::{
    capture::PnetCapture,
    cfg::{cli::resolve_config_path, config::Config, logger::init_logger},
    eviction::EvictionHandle,
    switch::BridgeController,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let raw_path = std::env::args().nth(1).unwrap_or_else(|| "config.yaml".to_string());
    let cfg = resolve_config_path(&raw_path)
        .and_then(Config::load_from_file)
        .context("failed to resolve or load config")?;

    init_logger(&cfg.logging)?;

    let mut controller = BridgeController::new(Arc::new(PnetCapture));
    controller
        .start_network(&cfg.network.interface1, &cfg.network.interface2)
        .context("failed to start network threads")?;

    {
        let mut guard = controller.storage_handle().guard();
        guard.device_info.hostname = cfg.device.hostname.clone();
        guard.device_info.default_mac_timeout = cfg.device.mac_timeout;
        guard.sent_packet_timeout = cfg.device.sent_packet_timeout;
        guard.session_timeout = cfg.device.session_timeout;
    }

    controller
        .start_rest(cfg.rest.port, cfg.rest.credentials.clone())
        .context("failed to start REST server")?;

    let _eviction = EvictionHandle::start(controller.storage_handle());

    info!(
        interface1 = %cfg.network.interface1,
        interface2 = %cfg.network.interface2,
        port = cfg.rest.port,
        "netbridge running"
    );

    tokio::signal::ctrl_c().await.context("failed to listen for ctrl-c")?;
    info!("shutdown signal received");

    let _ = controller.stop_rest();
    let _ = controller.stop_network();

    Ok(())
}
