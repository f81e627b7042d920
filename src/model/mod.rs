// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! The data model shared by every component: addresses, interfaces,
//! protocols, statistics, device info, sessions and the timeout primitive.

pub mod device;
pub mod frame;
pub mod interface;
pub mod mac;
pub mod packet;
pub mod protocol;
pub mod session;
pub mod stats;
pub mod timeout;

pub use device::DeviceInfo;
pub use frame::{decode, DecodedFrame};
pub use interface::{InterfaceId, InterfaceRecord, InterfaceView, ThreadControl};
pub use mac::MacAddress;
pub use packet::SentPacket;
pub use protocol::{Protocol, ProtocolStack};
pub use session::Session;
pub use stats::{StatsEntry, StatsKey};
pub use timeout::Timeout;
