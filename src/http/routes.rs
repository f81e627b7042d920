// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::http::{handlers, server::AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/login", post(handlers::login))
        .route("/auth", get(handlers::reauth))
        .route("/logout", post(handlers::logout))
        .route("/interface", get(handlers::list_interfaces))
        .route("/interface/:id", get(handlers::get_interface))
        .route("/interface/:id/edit", put(handlers::edit_interface))
        .route("/device", get(handlers::get_device))
        .route("/device/edit", put(handlers::edit_device))
        .with_state(state)
}
