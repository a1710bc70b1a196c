// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::{api::AppState, version};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
	pub timestamp: String,
	pub version: &'static str,
	pub index: String,
}

/// GET /health - Liveness check. Does not call the search service.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	let response = HealthResponse {
		status: "healthy",
		timestamp: chrono::Utc::now().to_rfc3339(),
		version: version::VERSION,
		index: state.settings.index_name.clone(),
	};

	(StatusCode::OK, Json(response))
}
