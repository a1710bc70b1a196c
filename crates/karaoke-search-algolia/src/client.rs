// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Algolia API client implementation.

use std::time::Duration;

use karaoke_common_config::SecretString;
use reqwest::Client;
use tracing::{debug, error, instrument, trace};
use url::Url;

use crate::error::AlgoliaError;
use crate::types::{QueryBody, SearchRequest, SearchResponse};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Algolia search REST API, bound to one application.
#[derive(Debug, Clone)]
pub struct AlgoliaClient {
	http_client: Client,
	app_id: String,
	api_key: SecretString,
	base_url: String,
}

impl AlgoliaClient {
	/// Creates a client for the given application using the default
	/// `https://{app_id}-dsn.algolia.net` host.
	pub fn new(app_id: impl Into<String>, api_key: SecretString) -> Result<Self, AlgoliaError> {
		Self::with_timeout(app_id, api_key, DEFAULT_TIMEOUT)
	}

	/// Creates a client with a custom request timeout.
	pub fn with_timeout(
		app_id: impl Into<String>,
		api_key: SecretString,
		timeout: Duration,
	) -> Result<Self, AlgoliaError> {
		let app_id = app_id.into();
		let http_client = karaoke_common_http::builder_with_timeout(timeout).build()?;
		let base_url = default_base_url(&app_id);

		Ok(Self {
			http_client,
			app_id,
			api_key,
			base_url,
		})
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn app_id(&self) -> &str {
		&self.app_id
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Runs one query against one index.
	#[instrument(skip(self, request), fields(index = %request.index_name, query = %request.query, page = request.page))]
	pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, AlgoliaError> {
		let url = self.query_url(&request.index_name)?;
		let body = QueryBody {
			params: request.to_params(),
		};

		debug!(url = %url, "Sending search request to Algolia");
		trace!(params = %body.params, "Search parameters");

		let response = self
			.http_client
			.post(url)
			.header("X-Algolia-Application-Id", &self.app_id)
			.header("X-Algolia-API-Key", self.api_key.expose())
			.json(&body)
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return AlgoliaError::Timeout;
				}
				error!(error = %e, "Network error during Algolia request");
				AlgoliaError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from Algolia");

		if !status.is_success() {
			let status_code = status.as_u16();
			let body = response.text().await.unwrap_or_default();
			let message = error_message(&body);

			return Err(match status_code {
				401 | 403 => {
					error!(status = status_code, "Unauthorized request");
					AlgoliaError::Unauthorized
				}
				404 => {
					error!(status = status_code, index = %request.index_name, "Index not found");
					AlgoliaError::IndexNotFound(request.index_name.clone())
				}
				429 => {
					error!(status = status_code, "Rate limit exceeded");
					AlgoliaError::RateLimited
				}
				_ => {
					error!(status = status_code, message = %message, "Algolia API error");
					AlgoliaError::ApiError {
						status: status_code,
						message,
					}
				}
			});
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			AlgoliaError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		let search_response: SearchResponse = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse Algolia response");
			AlgoliaError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		debug!(
			hit_count = search_response.hits.len(),
			nb_hits = search_response.nb_hits,
			processing_time_ms = search_response.processing_time_ms,
			"Search completed successfully"
		);

		Ok(search_response)
	}

	fn query_url(&self, index_name: &str) -> Result<Url, AlgoliaError> {
		let invalid = |message: &str| AlgoliaError::InvalidBaseUrl {
			url: self.base_url.clone(),
			message: message.to_string(),
		};

		let mut url = Url::parse(&self.base_url).map_err(|e| invalid(&e.to_string()))?;
		url.path_segments_mut()
			.map_err(|()| invalid("cannot be a base"))?
			.pop_if_empty()
			.extend(["1", "indexes", index_name, "query"]);
		Ok(url)
	}
}

fn default_base_url(app_id: &str) -> String {
	format!("https://{app_id}-dsn.algolia.net")
}

/// Algolia error bodies look like `{"message": "...", "status": 400}`.
fn error_message(body: &str) -> String {
	serde_json::from_str::<serde_json::Value>(body)
		.ok()
		.and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
		.unwrap_or_else(|| body.to_string())
}
