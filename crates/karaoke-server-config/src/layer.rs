// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration as read from one source.

use serde::{Deserialize, Serialize};

use crate::sections::{HttpConfigLayer, LoggingConfigLayer, SearchConfigLayer};

/// Every field optional; later layers override earlier ones field by field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub search: Option<SearchConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if let Some(other_http) = other.http {
			self.http.get_or_insert_with(Default::default).merge(other_http);
		}
		if let Some(other_search) = other.search {
			self.search
				.get_or_insert_with(Default::default)
				.merge(other_search);
		}
		if let Some(other_logging) = other.logging {
			self.logging
				.get_or_insert_with(Default::default)
				.merge(other_logging);
		}
	}
}
