// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

use std::{fs, path::Path, time::Duration};

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::switch::Credentials;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// The two OS interface names the bridge binds to at startup.
    pub network: NetworkConfig,
    /// The management HTTP surface: port and bearer-auth credentials.
    pub rest: RestConfig,
    /// Device identity and the default MAC-table entry lifetime.
    pub device: DeviceConfig,
    /// Logging verbosity.
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NetworkConfig {
    #[serde(rename = "Interface1")]
    pub interface1: String,
    #[serde(rename = "Interface2")]
    pub interface2: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RestConfig {
    #[serde(rename = "Port")]
    pub port: u16,
    /// Absent in the YAML file means the spec's documented `root`/`root`.
    #[serde(rename = "Credentials", default = "default_credentials")]
    pub credentials: Credentials,
}

fn default_credentials() -> Credentials {
    Credentials::default()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DeviceConfig {
    #[serde(rename = "Hostname")]
    pub hostname: String,
    #[serde(rename = "MacTimeoutSecs", with = "serde_secs", default = "default_mac_timeout")]
    pub mac_timeout: Duration,
    #[serde(
        rename = "SentPacketTimeoutSecs",
        with = "serde_secs",
        default = "default_sent_packet_timeout"
    )]
    pub sent_packet_timeout: Duration,
    #[serde(rename = "SessionTimeoutSecs", with = "serde_secs", default = "default_session_timeout")]
    pub session_timeout: Duration,
}

fn default_mac_timeout() -> Duration {
    crate::model::device::DEFAULT_MAC_TIMEOUT
}

fn default_sent_packet_timeout() -> Duration {
    crate::storage::DEFAULT_SENT_PACKET_TIMEOUT
}

fn default_session_timeout() -> Duration {
    crate::model::session::DEFAULT_SESSION_TIMEOUT
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(rename = "Level", default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&s).context("failed to parse config YAML")?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            !self.network.interface1.is_empty() && !self.network.interface2.is_empty(),
            "both Interface1 and Interface2 must be set"
        );
        ensure!(
            self.network.interface1 != self.network.interface2,
            "Interface1 and Interface2 must name different interfaces"
        );
        ensure!(self.rest.port != 0, "rest.Port must be nonzero");
        ensure!(
            !self.rest.credentials.username.is_empty(),
            "rest credentials username must not be empty"
        );
        Ok(())
    }
}

mod serde_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(d)?;
        Ok(Duration::from_secs(secs))
    }
}
