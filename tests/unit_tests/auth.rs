// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! Black-box session round-trip: login, authenticate, logout, then a
//! rejected re-use of the same token — the law from the spec's §8.

use netbridge_rs::{auth, storage::StorageHandle, switch::Credentials};

fn creds() -> Credentials {
    Credentials {
        username: "root".to_string(),
        password: "root".to_string(),
    }
}

#[test]
fn token_round_trip_then_rejected_after_logout() {
    let storage = StorageHandle::new();

    let token = auth::login(&storage, &creds(), "root", "root").expect("valid creds log in");
    auth::authenticate(&storage, &token).expect("fresh token authenticates");

    auth::logout(&storage, &token).expect("logout finds the live session");
    assert!(auth::authenticate(&storage, &token).is_err(), "token is dead after logout");
}

#[test]
fn wrong_password_never_creates_a_session() {
    let storage = StorageHandle::new();
    assert!(auth::login(&storage, &creds(), "root", "not-root").is_err());
    assert!(storage.guard().sessions.is_empty());
}

#[test]
fn logout_of_an_unknown_token_is_forbidden_not_silently_ignored() {
    let storage = StorageHandle::new();
    assert!(auth::logout(&storage, "not-a-real-token").is_err());
}
