// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! A plain stdout subscriber: an `EnvFilter` layered under `fmt`, matching
//! the spec's ambient logging needs without the JSON-span-capture and
//! fastrace-reporting machinery a distributed client doesn't apply here.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cfg::config::LoggingConfig;

pub fn init_logger(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level)
        .or_else(|_| EnvFilter::try_from_default_env())
        .context("failed to parse log level from config or env")?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .try_init()
        .context("failed to install global tracing subscriber")?;

    Ok(())
}
