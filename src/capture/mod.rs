// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! The capture capability boundary and the per-interface capture loop.

pub mod channel;
pub mod senders;
pub mod thread;

pub use channel::{CaptureCapability, FrameReceiver, FrameSender, PnetCapture};
pub use senders::SenderRegistry;
pub use thread::CaptureThreadHandle;
