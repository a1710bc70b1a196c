// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Search page and search JSON handlers.
//!
//! Both read the search state from the URL query string and issue exactly
//! one search per request.

use axum::{
	extract::{RawQuery, State},
	http::StatusCode,
	response::Html,
	Json,
};
use serde::Serialize;

use crate::{
	api::AppState,
	error::ServerError,
	page::SearchPage,
	routing::UiState,
	search::{no_results_message, run_search, SearchResults},
};

/// JSON form of one page view, for client-side updates.
#[derive(Debug, Serialize)]
pub struct SearchPayload {
	pub state: UiState,
	/// Canonical URL for `state`.
	pub href: String,
	pub no_results: Option<String>,
	#[serde(flatten)]
	pub results: SearchResults,
}

/// GET / - Server-rendered search page.
///
/// A failed search still renders the page, with an error notice and a 502.
pub async fn search_page(
	State(state): State<AppState>,
	RawQuery(raw): RawQuery,
) -> Result<(StatusCode, Html<String>), ServerError> {
	let index_name = &state.settings.index_name;
	let ui_state = UiState::parse(index_name, raw.as_deref().unwrap_or_default());

	match run_search(state.backend.as_ref(), &state.settings, &ui_state).await {
		Ok(results) => {
			let html = state
				.templates
				.render_search(&SearchPage::new(index_name, &ui_state, Some(&results)))?;
			Ok((StatusCode::OK, Html(html)))
		}
		Err(e) => {
			tracing::error!(error = %e, query = %ui_state.query, "Search failed");
			let html = state
				.templates
				.render_search(&SearchPage::failed(index_name, &ui_state))?;
			Ok((StatusCode::BAD_GATEWAY, Html(html)))
		}
	}
}

/// GET /api/search - The same search as JSON.
pub async fn search_api(
	State(state): State<AppState>,
	RawQuery(raw): RawQuery,
) -> Result<Json<SearchPayload>, ServerError> {
	let index_name = &state.settings.index_name;
	let ui_state = UiState::parse(index_name, raw.as_deref().unwrap_or_default());

	let results = run_search(state.backend.as_ref(), &state.settings, &ui_state).await?;
	let no_results = results
		.is_empty()
		.then(|| no_results_message(&ui_state.query));

	Ok(Json(SearchPayload {
		href: ui_state.href(index_name),
		state: ui_state,
		no_results,
		results,
	}))
}
