// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Search state carried in the page URL.
//!
//! The format is the one InstantSearch's history router writes, keyed by the
//! index name:
//!
//! ```text
//! touhou_karaoke[query]=bad%20apple
//! touhou_karaoke[refinementList][circle.name][0]=IOSYS
//! touhou_karaoke[page]=2
//! ```
//!
//! Parsing accepts both `[n]` and `[]` array suffixes. Serialising is
//! canonical: attributes and values are sorted, page 1 is omitted, and
//! brackets are percent-encoded.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Query, refinements and page for one index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiState {
	pub query: String,
	/// One-based page number.
	pub page: u32,
	/// Selected facet values per attribute.
	pub refinements: BTreeMap<String, BTreeSet<String>>,
}

impl Default for UiState {
	fn default() -> Self {
		Self {
			query: String::new(),
			page: 1,
			refinements: BTreeMap::new(),
		}
	}
}

impl UiState {
	/// Read the state for `index_name` from a raw URL query string. Keys for
	/// other indexes and keys this router does not write are ignored.
	pub fn parse(index_name: &str, raw_query: &str) -> Self {
		let mut state = UiState::default();

		for (key, value) in url::form_urlencoded::parse(raw_query.as_bytes()) {
			let Some(rest) = key.strip_prefix(index_name) else {
				continue;
			};
			let Some(segments) = bracket_segments(rest) else {
				continue;
			};

			match segments.as_slice() {
				["query"] => state.query = value.into_owned(),
				["page"] => {
					if let Ok(page) = value.parse::<u32>() {
						state.page = page.max(1);
					}
				}
				["refinementList", attribute, position]
					if !attribute.is_empty() && is_array_index(position) && !value.is_empty() =>
				{
					state
						.refinements
						.entry((*attribute).to_string())
						.or_default()
						.insert(value.into_owned());
				}
				_ => {}
			}
		}

		state
	}

	/// Serialise to the canonical query string, without the leading `?`.
	pub fn to_query_string(&self, index_name: &str) -> String {
		let mut out = url::form_urlencoded::Serializer::new(String::new());

		if !self.query.is_empty() {
			out.append_pair(&format!("{index_name}[query]"), &self.query);
		}
		for (attribute, values) in &self.refinements {
			for (position, value) in values.iter().enumerate() {
				out.append_pair(
					&format!("{index_name}[refinementList][{attribute}][{position}]"),
					value,
				);
			}
		}
		if self.page > 1 {
			out.append_pair(&format!("{index_name}[page]"), &self.page.to_string());
		}

		out.finish()
	}

	/// Link target for this state, relative to the site root.
	pub fn href(&self, index_name: &str) -> String {
		let query = self.to_query_string(index_name);
		if query.is_empty() {
			"/".to_string()
		} else {
			format!("/?{query}")
		}
	}

	pub fn with_page(&self, page: u32) -> Self {
		Self {
			page: page.max(1),
			..self.clone()
		}
	}

	/// Select or deselect one facet value. Any change of refinements goes
	/// back to the first page.
	pub fn toggled(&self, attribute: &str, value: &str) -> Self {
		let mut next = self.clone();
		next.page = 1;

		let values = next.refinements.entry(attribute.to_string()).or_default();
		if !values.remove(value) {
			values.insert(value.to_string());
		}
		if values.is_empty() {
			next.refinements.remove(attribute);
		}

		next
	}

	pub fn is_refined(&self, attribute: &str, value: &str) -> bool {
		self.refinements
			.get(attribute)
			.is_some_and(|values| values.contains(value))
	}

	/// Refinements as search `facetFilters`: values of one attribute are
	/// OR-ed, attributes are AND-ed.
	pub fn facet_filters(&self) -> Vec<Vec<String>> {
		self.refinements
			.iter()
			.filter(|(_, values)| !values.is_empty())
			.map(|(attribute, values)| {
				values
					.iter()
					.map(|value| facet_filter(attribute, value))
					.collect()
			})
			.collect()
	}

	/// Name/value pairs the search form must resubmit so a new query keeps
	/// the selected refinements.
	pub fn hidden_fields(&self, index_name: &str) -> Vec<(String, String)> {
		self.refinements
			.iter()
			.flat_map(|(attribute, values)| {
				values.iter().enumerate().map(move |(position, value)| {
					(
						format!("{index_name}[refinementList][{attribute}][{position}]"),
						value.clone(),
					)
				})
			})
			.collect()
	}
}

/// Split `[a][b][]` into `["a", "b", ""]`.
fn bracket_segments(mut rest: &str) -> Option<Vec<&str>> {
	let mut segments = Vec::new();
	while !rest.is_empty() {
		let inner = rest.strip_prefix('[')?;
		let end = inner.find(']')?;
		segments.push(&inner[..end]);
		rest = &inner[end + 1..];
	}
	if segments.is_empty() {
		None
	} else {
		Some(segments)
	}
}

fn is_array_index(segment: &str) -> bool {
	segment.bytes().all(|b| b.is_ascii_digit())
}

/// A leading `-` would negate the filter.
fn facet_filter(attribute: &str, value: &str) -> String {
	if value.starts_with('-') {
		format!("{attribute}:\\{value}")
	} else {
		format!("{attribute}:{value}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	const INDEX: &str = "touhou_karaoke";

	#[test]
	fn test_parse_canonical_url() {
		let state = UiState::parse(
			INDEX,
			"touhou_karaoke%5Bquery%5D=bad+apple\
			 &touhou_karaoke%5BrefinementList%5D%5Bcircle.name%5D%5B0%5D=IOSYS\
			 &touhou_karaoke%5BrefinementList%5D%5Bcircle.name%5D%5B1%5D=%E5%B9%BD%E9%96%89%E3%82%B5%E3%83%86%E3%83%A9%E3%82%A4%E3%83%88\
			 &touhou_karaoke%5Bpage%5D=3",
		);
		assert_eq!(state.query, "bad apple");
		assert_eq!(state.page, 3);
		assert!(state.is_refined("circle.name", "IOSYS"));
		assert!(state.is_refined("circle.name", "幽閉サテライト"));
	}

	#[test]
	fn test_parse_unencoded_brackets_and_empty_index() {
		let state = UiState::parse(
			INDEX,
			"touhou_karaoke[query]=東方&touhou_karaoke[refinementList][karaoke_type][]=DAM",
		);
		assert_eq!(state.query, "東方");
		assert_eq!(state.page, 1);
		assert!(state.is_refined("karaoke_type", "DAM"));
	}

	#[test]
	fn test_parse_ignores_other_indexes_and_unknown_keys() {
		let state = UiState::parse(
			INDEX,
			"other[query]=x&touhou_karaoke_dev[query]=y&touhou_karaoke[sortBy]=z&q=w&touhou_karaoke=v",
		);
		assert_eq!(state, UiState::default());
	}

	#[test]
	fn test_parse_bad_page_falls_back() {
		assert_eq!(UiState::parse(INDEX, "touhou_karaoke[page]=abc").page, 1);
		assert_eq!(UiState::parse(INDEX, "touhou_karaoke[page]=0").page, 1);
		assert_eq!(UiState::parse(INDEX, "touhou_karaoke[page]=-2").page, 1);
	}

	#[test]
	fn test_serialize_is_sorted_and_omits_first_page() {
		let state = UiState::default()
			.toggled("karaoke_type", "JOYSOUND")
			.toggled("circle.name", "IOSYS")
			.toggled("karaoke_type", "DAM");
		assert_eq!(
			state.to_query_string(INDEX),
			"touhou_karaoke%5BrefinementList%5D%5Bcircle.name%5D%5B0%5D=IOSYS\
			 &touhou_karaoke%5BrefinementList%5D%5Bkaraoke_type%5D%5B0%5D=DAM\
			 &touhou_karaoke%5BrefinementList%5D%5Bkaraoke_type%5D%5B1%5D=JOYSOUND"
		);
		assert_eq!(UiState::default().href(INDEX), "/");
		assert_eq!(
			UiState::default().with_page(2).href(INDEX),
			"/?touhou_karaoke%5Bpage%5D=2"
		);
	}

	#[test]
	fn test_toggle_resets_page_and_removes_empty_attribute() {
		let state = UiState {
			page: 4,
			..UiState::default()
		};
		let selected = state.toggled("circle.name", "IOSYS");
		assert_eq!(selected.page, 1);
		assert!(selected.is_refined("circle.name", "IOSYS"));

		let cleared = selected.with_page(2).toggled("circle.name", "IOSYS");
		assert_eq!(cleared.page, 1);
		assert!(cleared.refinements.is_empty());
	}

	#[test]
	fn test_facet_filters_or_within_and_across() {
		let state = UiState::default()
			.toggled("circle.name", "IOSYS")
			.toggled("circle.name", "Alstroemeria Records")
			.toggled("karaoke_type", "DAM");
		assert_eq!(
			state.facet_filters(),
			vec![
				vec![
					"circle.name:Alstroemeria Records".to_string(),
					"circle.name:IOSYS".to_string()
				],
				vec!["karaoke_type:DAM".to_string()],
			]
		);
	}

	#[test]
	fn test_facet_filter_escapes_leading_dash() {
		let state = UiState::default().toggled("title", "-Reverse-");
		assert_eq!(state.facet_filters(), vec![vec!["title:\\-Reverse-".to_string()]]);
	}

	#[test]
	fn test_hidden_fields_carry_refinements_only() {
		let state = UiState {
			query: "q".to_string(),
			page: 3,
			..UiState::default()
		}
		.toggled("circle.name", "IOSYS");
		assert_eq!(
			state.hidden_fields(INDEX),
			vec![(
				"touhou_karaoke[refinementList][circle.name][0]".to_string(),
				"IOSYS".to_string()
			)]
		);
	}

	fn ui_state() -> impl Strategy<Value = UiState> {
		(
			"\\PC{0,20}",
			1u32..50,
			prop::collection::btree_map(
				"[a-z_.]{1,12}",
				prop::collection::btree_set("\\PC{1,12}", 1..4),
				0..3,
			),
		)
			.prop_map(|(query, page, refinements)| UiState {
				query,
				page,
				refinements,
			})
	}

	proptest! {
		#[test]
		fn serialised_state_parses_back(state in ui_state()) {
			let query = state.to_query_string(INDEX);
			prop_assert_eq!(UiState::parse(INDEX, &query), state);
		}
	}
}
