// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request and response types for the Algolia query endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One search against one index.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
	pub index_name: String,
	pub query: String,
	/// Zero-based page number.
	pub page: u32,
	pub hits_per_page: u32,
	/// Attributes to compute facet counts for; `*` for all faceted attributes.
	pub facets: Vec<String>,
	pub max_values_per_facet: u32,
	/// Conjunction of disjunctions: each inner list is OR-ed, lists are AND-ed.
	/// Entries are `attribute:value`.
	pub facet_filters: Vec<Vec<String>>,
}

impl SearchRequest {
	pub fn new(index_name: impl Into<String>, query: impl Into<String>) -> Self {
		Self {
			index_name: index_name.into(),
			query: query.into(),
			page: 0,
			hits_per_page: 20,
			facets: vec!["*".to_string()],
			max_values_per_facet: 10,
			facet_filters: Vec::new(),
		}
	}

	pub fn with_page(mut self, page: u32) -> Self {
		self.page = page;
		self
	}

	pub fn with_hits_per_page(mut self, hits_per_page: u32) -> Self {
		self.hits_per_page = hits_per_page;
		self
	}

	pub fn with_max_values_per_facet(mut self, max_values_per_facet: u32) -> Self {
		self.max_values_per_facet = max_values_per_facet;
		self
	}

	pub fn with_facet_filters(mut self, facet_filters: Vec<Vec<String>>) -> Self {
		self.facet_filters = facet_filters;
		self
	}

	/// Encode the search parameters in the URL-encoded form the query
	/// endpoint expects in its `params` field. List values are JSON arrays.
	pub fn to_params(&self) -> String {
		let mut params = url::form_urlencoded::Serializer::new(String::new());
		params.append_pair("query", &self.query);
		params.append_pair("page", &self.page.to_string());
		params.append_pair("hitsPerPage", &self.hits_per_page.to_string());
		if !self.facets.is_empty() {
			params.append_pair("facets", &json_list(&self.facets));
			params.append_pair(
				"maxValuesPerFacet",
				&self.max_values_per_facet.to_string(),
			);
		}
		if !self.facet_filters.is_empty() {
			params.append_pair("facetFilters", &json_list(&self.facet_filters));
		}
		params.finish()
	}
}

fn json_list<T: Serialize>(value: &T) -> String {
	// Serialising strings and lists of strings cannot fail.
	serde_json::to_string(value).unwrap_or_else(|_| "[]".to_string())
}

/// Body of a query request.
#[derive(Debug, Serialize)]
pub(crate) struct QueryBody {
	pub params: String,
}

/// The parts of a query response this crate uses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
	/// Raw hit documents in ranking order.
	#[serde(default)]
	pub hits: Vec<serde_json::Value>,
	#[serde(default)]
	pub nb_hits: u64,
	/// Zero-based page number.
	#[serde(default)]
	pub page: u32,
	#[serde(default)]
	pub nb_pages: u32,
	#[serde(default)]
	pub hits_per_page: u32,
	#[serde(default)]
	pub query: String,
	/// Facet value counts per attribute.
	#[serde(default)]
	pub facets: BTreeMap<String, BTreeMap<String, u64>>,
	#[serde(default, rename = "processingTimeMS")]
	pub processing_time_ms: u64,
	#[serde(default)]
	pub rendering_content: Option<RenderingContent>,
}

impl SearchResponse {
	/// Facet attribute order configured on the index, if any.
	pub fn facet_order(&self) -> Option<&[String]> {
		self.rendering_content
			.as_ref()?
			.facet_ordering
			.as_ref()?
			.facets
			.as_ref()
			.map(|facets| facets.order.as_slice())
	}
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderingContent {
	#[serde(default)]
	pub facet_ordering: Option<FacetOrdering>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FacetOrdering {
	#[serde(default)]
	pub facets: Option<FacetsOrder>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FacetsOrder {
	#[serde(default)]
	pub order: Vec<String>,
}
