// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! The management HTTP surface: session auth plus interface/device
//! inspection and editing.

pub mod dto;
pub mod handlers;
pub mod routes;
pub mod server;

pub use server::{AppState, RestThreadHandle};
