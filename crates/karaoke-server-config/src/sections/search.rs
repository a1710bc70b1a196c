// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Search service configuration section.

use karaoke_common_config::SecretString;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INDEX_NAME: &str = "touhou_karaoke";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfigLayer {
	pub app_id: Option<String>,
	pub api_key: Option<SecretString>,
	pub index_name: Option<String>,
	pub hits_per_page: Option<u32>,
	pub max_values_per_facet: Option<u32>,
	pub base_url: Option<String>,
	pub timeout_secs: Option<u64>,
}

impl SearchConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.app_id.is_some() {
			self.app_id = other.app_id;
		}
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.index_name.is_some() {
			self.index_name = other.index_name;
		}
		if other.hits_per_page.is_some() {
			self.hits_per_page = other.hits_per_page;
		}
		if other.max_values_per_facet.is_some() {
			self.max_values_per_facet = other.max_values_per_facet;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}

	pub fn finalize(self) -> SearchConfig {
		SearchConfig {
			app_id: self.app_id,
			api_key: self.api_key,
			index_name: self
				.index_name
				.unwrap_or_else(|| DEFAULT_INDEX_NAME.to_string()),
			hits_per_page: self.hits_per_page.unwrap_or(20),
			max_values_per_facet: self.max_values_per_facet.unwrap_or(10),
			base_url: self.base_url,
			timeout_secs: self.timeout_secs.unwrap_or(10),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
	pub app_id: Option<String>,
	/// Search-only key; it ends up in outbound request headers only.
	pub api_key: Option<SecretString>,
	pub index_name: String,
	pub hits_per_page: u32,
	pub max_values_per_facet: u32,
	/// Overrides `https://{app_id}-dsn.algolia.net`.
	pub base_url: Option<String>,
	pub timeout_secs: u64,
}

impl Default for SearchConfig {
	fn default() -> Self {
		SearchConfigLayer::default().finalize()
	}
}

impl SearchConfig {
	pub fn is_configured(&self) -> bool {
		self.app_id.is_some() && self.api_key.is_some()
	}
}
