// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Form, Json,
};
use serde_json::{json, Value};

use crate::{
    auth,
    error::ApiError,
    http::{
        dto::{
            AuthResponse, DeviceEditRequest, DeviceView, InterfaceEditRequest,
            InterfaceListResponse, LoginRequest, LoginResponse,
        },
        server::AppState,
    },
    model::InterfaceView,
};

fn bearer(headers: &HeaderMap) -> Option<&str> {
    let raw = headers.get(axum::http::header::AUTHORIZATION)?.to_str().ok()?;
    auth::bearer_token(Some(raw))
}

fn require_session(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let token = bearer(headers).ok_or(ApiError::Forbidden)?;
    auth::authenticate(&state.storage, token)
}

/// Liveness check; body is a fixed constant, not derived from any state.
pub async fn index() -> Json<Value> {
    Json(json!({ "hello": "world", "test": [1, 2] }))
}

pub async fn login(
    State(state): State<AppState>,
    Form(body): Form<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let token = auth::login(&state.storage, &state.credentials, &body.username, &body.password)?;
    Ok(Json(LoginResponse { token }))
}

/// Unlike the other bearer-gated endpoints, a bad or missing token here is
/// still a 403 — only a *live* session gets the `{auth:true}` body; the
/// spec's `{auth:true|false}` column is the success shape, not a way to
/// report failure without a status code.
pub async fn reauth(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AuthResponse>, ApiError> {
    require_session(&state, &headers)?;
    Ok(Json(AuthResponse { auth: true }))
}

pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer(&headers).ok_or(ApiError::Forbidden)?;
    auth::logout(&state.storage, token)?;
    Ok(Json(json!({})))
}

pub async fn list_interfaces(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<InterfaceListResponse>, ApiError> {
    require_session(&state, &headers)?;
    let guard = state.storage.guard();
    let interfaces = guard
        .interfaces
        .iter()
        .enumerate()
        .map(|(idx, rec)| InterfaceView::from_record(idx, rec))
        .collect();
    Ok(Json(InterfaceListResponse { interfaces }))
}

pub async fn get_interface(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<usize>,
) -> Result<Json<InterfaceView>, ApiError> {
    require_session(&state, &headers)?;
    let guard = state.storage.guard();
    let record = guard.interfaces.get(id).ok_or(ApiError::NotFound)?;
    Ok(Json(InterfaceView::from_record(id, record)))
}

pub async fn edit_interface(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<usize>,
    Form(body): Form<InterfaceEditRequest>,
) -> Result<Json<InterfaceView>, ApiError> {
    require_session(&state, &headers)?;
    let mut guard = state.storage.guard();
    let record = guard.interfaces.get_mut(id).ok_or(ApiError::NotFound)?;
    if let Some(name) = body.name {
        record.display_name = name;
    }
    if let Some(up) = body.up {
        record.up = up;
    }
    Ok(Json(InterfaceView::from_record(id, record)))
}

pub async fn get_device(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DeviceView>, ApiError> {
    require_session(&state, &headers)?;
    let guard = state.storage.guard();
    Ok(Json(DeviceView::from(&guard.device_info)))
}

pub async fn edit_device(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(body): Form<DeviceEditRequest>,
) -> Result<Json<DeviceView>, ApiError> {
    require_session(&state, &headers)?;
    let mut guard = state.storage.guard();
    if let Some(hostname) = body.hostname {
        guard.device_info.hostname = hostname;
    }
    if let Some(secs) = body.timeout {
        guard.device_info.default_mac_timeout = Duration::from_secs(secs);
    }
    Ok(Json(DeviceView::from(&guard.device_info)))
}
