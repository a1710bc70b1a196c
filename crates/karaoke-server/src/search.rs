// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Search page controller: URL state in, rendered results out.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use async_trait::async_trait;
use karaoke_hit_render::{render_hit, Card, Hit};
use karaoke_search_algolia::{AlgoliaClient, AlgoliaError, SearchRequest, SearchResponse};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::pagination::{Pagination, DEFAULT_PADDING};
use crate::routing::UiState;

/// The hosted search service, as seen by the controller.
#[async_trait]
pub trait SearchBackend: Send + Sync {
	async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, AlgoliaError>;
}

#[async_trait]
impl SearchBackend for AlgoliaClient {
	async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, AlgoliaError> {
		AlgoliaClient::search(self, request).await
	}
}

/// Per-deployment search settings, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
	pub index_name: String,
	pub hits_per_page: u32,
	pub max_values_per_facet: u32,
}

/// One hit as a node tree plus its HTML.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedHit {
	pub card: Card,
	pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetValue {
	pub value: String,
	pub count: u64,
	pub refined: bool,
	/// URL with this value toggled.
	pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetPanel {
	/// Facet attribute; doubles as the panel header.
	pub attribute: String,
	pub values: Vec<FacetValue>,
}

/// Everything one page view shows.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
	pub query: String,
	pub nb_hits: u64,
	pub processing_time_ms: u64,
	pub hits: Vec<RenderedHit>,
	/// Records dropped because they are not valid hits.
	pub skipped: usize,
	pub facets: Vec<FacetPanel>,
	pub pagination: Pagination,
}

impl SearchResults {
	/// True when the query matched nothing at all. A page past the last one,
	/// or a page whose records were all skipped, still has matches.
	pub fn is_empty(&self) -> bool {
		self.nb_hits == 0
	}
}

/// Text shown in place of hits when nothing matched.
pub fn no_results_message(query: &str) -> String {
	format!("「{query}」は見つかりませんでした。")
}

/// Build the request for a URL state.
pub fn build_request(settings: &SearchSettings, state: &UiState) -> SearchRequest {
	SearchRequest::new(&settings.index_name, &state.query)
		.with_page(state.page.saturating_sub(1))
		.with_hits_per_page(settings.hits_per_page)
		.with_max_values_per_facet(settings.max_values_per_facet)
		.with_facet_filters(state.facet_filters())
}

/// Run one search for `state` and render the result.
#[instrument(skip(backend, settings, state), fields(index = %settings.index_name, query = %state.query, page = state.page))]
pub async fn run_search(
	backend: &dyn SearchBackend,
	settings: &SearchSettings,
	state: &UiState,
) -> Result<SearchResults, AlgoliaError> {
	let request = build_request(settings, state);
	let mut response = backend.search(&request).await?;

	let (hits, skipped) = render_hits(std::mem::take(&mut response.hits));
	let facets = build_facet_panels(&response, settings, state);
	let pagination = Pagination::build(response.page, response.nb_pages, DEFAULT_PADDING, |page| {
		state.with_page(page).href(&settings.index_name)
	});

	debug!(
		hits = hits.len(),
		skipped,
		nb_hits = response.nb_hits,
		facets = facets.len(),
		"Search rendered"
	);

	Ok(SearchResults {
		query: state.query.clone(),
		nb_hits: response.nb_hits,
		processing_time_ms: response.processing_time_ms,
		hits,
		skipped,
		facets,
		pagination,
	})
}

/// Render raw records in order. Records that are not valid hits are
/// skipped and counted.
pub fn render_hits(records: impl IntoIterator<Item = serde_json::Value>) -> (Vec<RenderedHit>, usize) {
	let mut hits = Vec::new();
	let mut skipped = 0;

	for (position, record) in records.into_iter().enumerate() {
		match Hit::from_value(record) {
			Ok(hit) => {
				let card = render_hit(&hit);
				let html = card.to_html();
				hits.push(RenderedHit { card, html });
			}
			Err(e) => {
				warn!(position, error = %e, "Skipping search record that is not a valid hit");
				skipped += 1;
			}
		}
	}

	(hits, skipped)
}

/// One panel per facet attribute. Panels follow the index's configured
/// facet order, then the remaining attributes alphabetically.
pub fn build_facet_panels(
	response: &SearchResponse,
	settings: &SearchSettings,
	state: &UiState,
) -> Vec<FacetPanel> {
	let mut attributes: BTreeSet<&str> = response.facets.keys().map(String::as_str).collect();
	attributes.extend(state.refinements.keys().map(String::as_str));

	let mut ordered: Vec<&str> = Vec::with_capacity(attributes.len());
	for attribute in response.facet_order().unwrap_or_default() {
		if attributes.remove(attribute.as_str()) {
			ordered.push(attribute.as_str());
		}
	}
	ordered.extend(attributes);

	ordered
		.into_iter()
		.map(|attribute| FacetPanel {
			attribute: attribute.to_string(),
			values: facet_values(response, settings, state, attribute),
		})
		.filter(|panel| !panel.values.is_empty())
		.collect()
}

/// Refined values first, then by count descending, then by name. Refined
/// values are kept even past the limit.
fn facet_values(
	response: &SearchResponse,
	settings: &SearchSettings,
	state: &UiState,
	attribute: &str,
) -> Vec<FacetValue> {
	let counts = response.facets.get(attribute);

	let mut values: Vec<(&str, u64, bool)> = counts
		.into_iter()
		.flatten()
		.map(|(value, count)| (value.as_str(), *count, state.is_refined(attribute, value)))
		.collect();

	// A selected value the service no longer counts is still shown.
	if let Some(refined) = state.refinements.get(attribute) {
		for value in refined {
			if !counts.is_some_and(|counts| counts.contains_key(value)) {
				values.push((value.as_str(), 0, true));
			}
		}
	}

	values.sort_by(|a, b| {
		(Reverse(a.2), Reverse(a.1), a.0).cmp(&(Reverse(b.2), Reverse(b.1), b.0))
	});

	let refined_count = values.iter().filter(|v| v.2).count();
	let limit = (settings.max_values_per_facet as usize).max(refined_count);

	values
		.into_iter()
		.take(limit)
		.map(|(value, count, refined)| FacetValue {
			value: value.to_string(),
			count,
			refined,
			href: state.toggled(attribute, value).href(&settings.index_name),
		})
		.collect()
}
