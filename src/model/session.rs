// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

use std::time::Duration;

use rand::Rng;

use crate::model::timeout::Timeout;

pub const TOKEN_LENGTH: usize = 32;
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(30);

/// A live, bearer-authenticated session.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub timeout: Timeout,
}

impl Session {
    pub fn new(token: String, timeout: Duration) -> Self {
        Self {
            token,
            timeout: Timeout::new(timeout),
        }
    }
}

/// Draws 32 uniform symbols from `[0, 64)` and maps them onto
/// `0-9`, `a-z`, `A-Z`, then `-`/`_` alternating by parity, per the spec's
/// token-generation rule.
pub fn generate_token() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_LENGTH)
        .map(|i| symbol_for(rng.random_range(0..64), i))
        .collect()
}

fn symbol_for(value: u32, index: usize) -> char {
    match value {
        0..=9 => (b'0' + value as u8) as char,
        10..=35 => (b'a' + (value - 10) as u8) as char,
        36..=61 => (b'A' + (value - 36) as u8) as char,
        _ => {
            if index % 2 == 0 {
                '-'
            } else {
                '_'
            }
        },
    }
}
