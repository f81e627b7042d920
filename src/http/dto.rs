// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! Wire-format request/response bodies for the management surface. Kept
//! separate from the internal model so a storage-layout change doesn't leak
//! straight onto the wire.

use serde::{Deserialize, Serialize};

use crate::model::{DeviceInfo, InterfaceView};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub auth: bool,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct InterfaceListResponse {
    pub interfaces: Vec<InterfaceView>,
}

#[derive(Debug, Deserialize, Default)]
pub struct InterfaceEditRequest {
    pub name: Option<String>,
    pub up: Option<bool>,
}

/// `device_info`'s timeout is kept in memory as a `Duration`; the wire
/// format rounds to whole seconds, which is the grain the management UI
/// actually exposes.
#[derive(Debug, Serialize)]
pub struct DeviceView {
    pub hostname: String,
    pub timeout_seconds: u64,
}

impl From<&DeviceInfo> for DeviceView {
    fn from(info: &DeviceInfo) -> Self {
        Self {
            hostname: info.hostname.clone(),
            timeout_seconds: info.default_mac_timeout.as_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct DeviceEditRequest {
    pub hostname: Option<String>,
    pub timeout: Option<u64>,
}
