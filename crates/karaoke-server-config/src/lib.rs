// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the karaoke search server.
//!
//! Three layers are merged, later ones winning: built-in defaults, the TOML
//! file (`/etc/touhou-karaoke/server.toml` unless another path is given) and
//! `KARAOKE_SERVER_*` environment variables. The merged layer is then
//! validated; search credentials have no default and must come from one of
//! the sources.
//!
//! ```ignore
//! let config = karaoke_server_config::load_config()?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Validated configuration with every default applied.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub search: SearchConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// `host:port` to bind the listener to.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Defaults, then the system config file, then the environment.
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Environment variables only; no config file is read.
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	finalize(EnvSource.load()?)
}

/// Like [`load_config`], with the config file at `config_path`.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let merged = sources
		.iter()
		.try_fold(ServerConfigLayer::default(), |mut merged, source| {
			debug!(source = source.name(), "merging configuration layer");
			merged.merge(source.load()?);
			Ok::<_, ConfigError>(merged)
		})?;

	finalize(merged)
}

/// Apply defaults to a merged layer and validate the result.
pub fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let config = ServerConfig {
		http: layer.http.unwrap_or_default().finalize(),
		search: layer.search.unwrap_or_default().finalize(),
		logging: layer.logging.unwrap_or_default().finalize(),
	};

	validate_search(&config.search)?;

	info!(
		addr = %config.socket_addr(),
		index = %config.search.index_name,
		hits_per_page = config.search.hits_per_page,
		custom_search_base_url = config.search.base_url.is_some(),
		log_level = %config.logging.level,
		"configuration resolved"
	);

	Ok(config)
}

/// Validate search settings that have no usable default.
fn validate_search(search: &SearchConfig) -> Result<(), ConfigError> {
	if !search.is_configured() {
		return Err(ConfigError::Validation(
			"search credentials are missing. Set KARAOKE_SERVER_ALGOLIA_APP_ID and \
			 KARAOKE_SERVER_ALGOLIA_API_KEY (or KARAOKE_SERVER_ALGOLIA_API_KEY_FILE), \
			 or the [search] section of the config file."
				.to_string(),
		));
	}

	if search.index_name.is_empty() {
		return Err(ConfigError::Validation(
			"search index name must not be empty".to_string(),
		));
	}

	if !(1..=1000).contains(&search.hits_per_page) {
		return Err(ConfigError::InvalidValue {
			key: "search.hits_per_page".to_string(),
			message: format!("{} is outside 1..=1000", search.hits_per_page),
		});
	}

	Ok(())
}
