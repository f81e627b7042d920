// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_HOSTNAME: &str = "Switch";
pub const DEFAULT_MAC_TIMEOUT: Duration = Duration::from_secs(30);

/// Runtime device identity and the default lifetime assigned to newly
/// learned MAC entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub hostname: String,
    #[serde(with = "duration_millis")]
    pub default_mac_timeout: Duration,
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            default_mac_timeout: DEFAULT_MAC_TIMEOUT,
        }
    }
}

/// (De)serializes a [`Duration`] as whole milliseconds, since that is the
/// unit shared storage keeps internally (the wire format is seconds — see
/// `http::dto`).
mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        (d.as_millis() as u64).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let millis = u64::deserialize(d)?;
        Ok(Duration::from_millis(millis))
    }
}
