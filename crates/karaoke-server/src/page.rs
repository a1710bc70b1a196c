// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server-rendered search page.

use minijinja::Environment;
use serde::Serialize;

use crate::routing::UiState;
use crate::search::{no_results_message, SearchResults};

pub const SITE_TITLE: &str = "東方カラオケ検索";

/// Shown in place of the error toast when the search request fails.
pub const SEARCH_ERROR_MESSAGE: &str = "検索中にエラーが発生しました。時間をおいて再度お試しください。";

const BASE_TEMPLATE: &str = include_str!("../templates/base.html");
const SEARCH_TEMPLATE: &str = include_str!("../templates/search.html");

/// Compiled page templates.
#[derive(Debug)]
pub struct Templates {
	env: Environment<'static>,
}

impl Templates {
	pub fn new() -> Result<Self, minijinja::Error> {
		let mut env = Environment::new();
		env.add_template("base.html", BASE_TEMPLATE)?;
		env.add_template("search.html", SEARCH_TEMPLATE)?;
		Ok(Self { env })
	}

	pub fn render_search(&self, page: &SearchPage<'_>) -> Result<String, minijinja::Error> {
		self.env.get_template("search.html")?.render(page)
	}
}

/// Template context for one search page view.
#[derive(Debug, Serialize)]
pub struct SearchPage<'a> {
	pub title: &'static str,
	pub query: &'a str,
	/// Form field name for the query, e.g. `touhou_karaoke[query]`.
	pub query_field: String,
	pub hidden_fields: Vec<(String, String)>,
	pub results: Option<&'a SearchResults>,
	pub no_results: Option<String>,
	pub error: Option<&'static str>,
}

impl<'a> SearchPage<'a> {
	pub fn new(index_name: &str, state: &'a UiState, results: Option<&'a SearchResults>) -> Self {
		let no_results = results
			.filter(|results| results.is_empty())
			.map(|_| no_results_message(&state.query));

		Self {
			title: SITE_TITLE,
			query: &state.query,
			query_field: format!("{index_name}[query]"),
			hidden_fields: state.hidden_fields(index_name),
			results,
			no_results,
			error: None,
		}
	}

	/// The page shown when the search itself failed: form and error notice,
	/// no results.
	pub fn failed(index_name: &str, state: &'a UiState) -> Self {
		Self {
			error: Some(SEARCH_ERROR_MESSAGE),
			..Self::new(index_name, state, None)
		}
	}
}
