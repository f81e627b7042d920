// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! Black-box checks on session-token generation: length, alphabet, and that
//! the RNG is actually wired up rather than returning a constant.

use std::collections::HashSet;

use netbridge_rs::model::session::{generate_token, TOKEN_LENGTH};

#[test]
fn tokens_are_32_chars_over_the_spec_alphabet() {
    for _ in 0..20 {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}

#[test]
fn repeated_draws_are_not_all_identical() {
    let tokens: HashSet<String> = (0..20).map(|_| generate_token()).collect();
    assert!(tokens.len() > 1, "20 draws from a 64-symbol alphabet should not all collide");
}
