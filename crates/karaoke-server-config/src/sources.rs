// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Where configuration layers come from: built-in defaults, a TOML file and
//! `KARAOKE_SERVER_*` environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use karaoke_common_config::load_secret_env;
use tracing::debug;

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{HttpConfigLayer, LogFormat, LoggingConfigLayer, SearchConfigLayer};

/// Merge order of sources; a later source overrides an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Produces one partial configuration layer.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Empty layer; defaults are applied when the merged layer is finalized.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		Ok(ServerConfigLayer::default())
	}
}

/// A TOML file with `[http]`, `[search]` and `[logging]` tables. A missing
/// file yields an empty layer.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/touhou-karaoke/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "no config file");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "reading config file");
		let content =
			std::fs::read_to_string(&self.path).map_err(|source| ConfigError::FileRead {
				path: self.path.clone(),
				source,
			})?;

		toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
			path: self.path.clone(),
			source,
		})
	}
}

/// `KARAOKE_SERVER_*` variables. The API key may also be read from the file
/// named by `KARAOKE_SERVER_ALGOLIA_API_KEY_FILE`.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("reading KARAOKE_SERVER_* environment");
		let http = http_from_env()?;
		let search = search_from_env()?;
		let logging = logging_from_env()?;
		Ok(ServerConfigLayer {
			http: Some(http),
			search: Some(search),
			logging: Some(logging),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Parse a non-empty variable, naming the variable and the expected type on
/// failure.
fn env_parse<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
	env_var(name)
		.map(|raw| {
			raw.parse().map_err(|_| ConfigError::InvalidValue {
				key: name.to_string(),
				message: format!(
					"'{raw}' is not a valid {}",
					std::any::type_name::<T>()
				),
			})
		})
		.transpose()
}

fn http_from_env() -> Result<HttpConfigLayer, ConfigError> {
	Ok(HttpConfigLayer {
		host: env_var("KARAOKE_SERVER_HOST"),
		port: env_parse("KARAOKE_SERVER_PORT")?,
		base_url: env_var("KARAOKE_SERVER_BASE_URL"),
	})
}

fn search_from_env() -> Result<SearchConfigLayer, ConfigError> {
	let api_key = load_secret_env("KARAOKE_SERVER_ALGOLIA_API_KEY")
		.map_err(|e| ConfigError::Secret(e.to_string()))?;

	Ok(SearchConfigLayer {
		app_id: env_var("KARAOKE_SERVER_ALGOLIA_APP_ID"),
		api_key,
		index_name: env_var("KARAOKE_SERVER_ALGOLIA_INDEX"),
		hits_per_page: env_parse("KARAOKE_SERVER_ALGOLIA_HITS_PER_PAGE")?,
		max_values_per_facet: env_parse("KARAOKE_SERVER_ALGOLIA_MAX_VALUES_PER_FACET")?,
		base_url: env_var("KARAOKE_SERVER_ALGOLIA_BASE_URL"),
		timeout_secs: env_parse("KARAOKE_SERVER_ALGOLIA_TIMEOUT_SECS")?,
	})
}

fn logging_from_env() -> Result<LoggingConfigLayer, ConfigError> {
	let format = match env_var("KARAOKE_SERVER_LOG_FORMAT") {
		Some(v) => Some(parse_log_format(&v).ok_or_else(|| ConfigError::InvalidValue {
			key: "KARAOKE_SERVER_LOG_FORMAT".to_string(),
			message: format!("expected 'pretty' or 'json', got '{v}'"),
		})?),
		None => None,
	};

	Ok(LoggingConfigLayer {
		level: env_var("KARAOKE_SERVER_LOG_LEVEL"),
		format,
	})
}

fn parse_log_format(value: &str) -> Option<LogFormat> {
	match value.to_ascii_lowercase().as_str() {
		"pretty" | "text" => Some(LogFormat::Pretty),
		"json" => Some(LogFormat::Json),
		_ => None,
	}
}
