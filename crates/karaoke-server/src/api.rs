// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP routes and shared application state.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use karaoke_search_algolia::AlgoliaClient;
use karaoke_server_config::SearchConfig;

use crate::error::ServerError;
use crate::page::Templates;
use crate::routes;
use crate::search::{SearchBackend, SearchSettings};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
	pub backend: Arc<dyn SearchBackend>,
	pub settings: Arc<SearchSettings>,
	pub templates: Arc<Templates>,
}

impl From<&SearchConfig> for SearchSettings {
	fn from(config: &SearchConfig) -> Self {
		Self {
			index_name: config.index_name.clone(),
			hits_per_page: config.hits_per_page,
			max_values_per_facet: config.max_values_per_facet,
		}
	}
}

/// Creates the search client from validated configuration.
pub fn create_search_client(config: &SearchConfig) -> Result<AlgoliaClient, ServerError> {
	let (Some(app_id), Some(api_key)) = (&config.app_id, &config.api_key) else {
		return Err(ServerError::Internal(
			"search credentials are not configured".to_string(),
		));
	};

	let client = AlgoliaClient::with_timeout(
		app_id.clone(),
		api_key.clone(),
		Duration::from_secs(config.timeout_secs),
	)?;

	let client = match &config.base_url {
		Some(base_url) => {
			tracing::info!(base_url = %base_url, "Using custom search base URL");
			client.with_base_url(base_url.clone())
		}
		None => client,
	};

	tracing::info!(
		app_id = %client.app_id(),
		index = %config.index_name,
		"Search client configured"
	);
	Ok(client)
}

/// Creates the application state. The backend and settings are fixed for
/// the lifetime of the process.
pub fn create_app_state(
	settings: SearchSettings,
	backend: Arc<dyn SearchBackend>,
) -> Result<AppState, ServerError> {
	Ok(AppState {
		backend,
		settings: Arc::new(settings),
		templates: Arc::new(Templates::new()?),
	})
}

pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/", get(routes::search::search_page))
		.route("/api/search", get(routes::search::search_api))
		.route("/health", get(routes::health::health_check))
		.with_state(state)
}

#[cfg(test)]
mod tests {
	use super::*;
	use karaoke_common_config::SecretString;

	fn configured() -> SearchConfig {
		SearchConfig {
			app_id: Some("APPID".to_string()),
			api_key: Some(SecretString::new("key".to_string())),
			..SearchConfig::default()
		}
	}

	#[test]
	fn test_search_client_uses_default_host() {
		let client = create_search_client(&configured()).unwrap();
		assert_eq!(client.base_url(), "https://APPID-dsn.algolia.net");
	}

	#[test]
	fn test_search_client_base_url_override() {
		let config = SearchConfig {
			base_url: Some("http://127.0.0.1:7700".to_string()),
			..configured()
		};
		let client = create_search_client(&config).unwrap();
		assert_eq!(client.base_url(), "http://127.0.0.1:7700");
	}

	#[test]
	fn test_search_client_requires_credentials() {
		assert!(matches!(
			create_search_client(&SearchConfig::default()),
			Err(ServerError::Internal(_))
		));
	}

	#[test]
	fn test_settings_from_config() {
		let settings = SearchSettings::from(&configured());
		assert_eq!(settings.index_name, "touhou_karaoke");
		assert_eq!(settings.hits_per_page, 20);
		assert_eq!(settings.max_values_per_facet, 10);
	}
}
