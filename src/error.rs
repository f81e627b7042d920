// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

//! Error taxonomy for the bridge core.
//!
//! [`BridgeError`] covers the data-plane and lifecycle-controller boundary;
//! [`ApiError`] covers the management-plane boundary and maps directly onto
//! HTTP status codes via `IntoResponse`.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("interface {0:?} is not configured")]
    UnknownInterface(String),

    #[error("both interfaces must be selected")]
    InterfacesUnselected,

    #[error("interface {0:?} was chosen for both ports")]
    DuplicateInterface(String),

    #[error("network threads are already running")]
    AlreadyRunning,

    #[error("network threads are not running")]
    NotRunning,

    #[error("REST server is already running")]
    RestAlreadyRunning,

    #[error("REST server is not running")]
    RestNotRunning,

    #[error("failed to open capture session on {iface}: {source}")]
    CaptureOpen {
        iface: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to send frame on {iface}: {source}")]
    Injection {
        iface: String,
        #[source]
        source: std::io::Error,
    },
}

/// Management-plane failures, mapped onto HTTP status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("forbidden")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
