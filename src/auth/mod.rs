// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! Session store glue: login/logout and bearer-token validation sit here,
//! one layer above the raw session list in [`crate::storage`].

use crate::{error::ApiError, model::session, storage::StorageHandle, switch::Credentials};

/// Regenerate on collision with a live session's token, rather than trust
/// that 32 symbols from a 64-wide alphabet never repeat.
const TOKEN_GENERATION_RETRIES: usize = 8;

/// Validates `username`/`password` against the configured credentials and,
/// on success, mints and stores a new session token.
pub fn login(storage: &StorageHandle, credentials: &Credentials, username: &str, password: &str) -> Result<String, ApiError> {
    if username != credentials.username || password != credentials.password {
        return Err(ApiError::Forbidden);
    }

    let mut guard = storage.guard();
    let mut token = session::generate_token();
    for _ in 0..TOKEN_GENERATION_RETRIES {
        if !guard.token_is_live(&token) {
            break;
        }
        token = session::generate_token();
    }
    guard.add_session(token.clone());
    Ok(token)
}

/// Bearer-auth check used by every authenticated endpoint. Refreshes the
/// session's timeout on every successful use.
pub fn authenticate(storage: &StorageHandle, token: &str) -> Result<(), ApiError> {
    if storage.guard().touch_session(token) {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}

pub fn logout(storage: &StorageHandle, token: &str) -> Result<(), ApiError> {
    if storage.guard().remove_session(token) {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}

/// Pulls the bearer token out of an `Authorization: Bearer <token>` header
/// value. Any other scheme, or a missing header, yields `None`.
pub fn bearer_token(header_value: Option<&str>) -> Option<&str> {
    header_value?.strip_prefix("Bearer ").map(str::trim)
}
