// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Environment helpers for secrets.

use std::path::PathBuf;

use thiserror::Error;

use crate::secret::SecretString;

#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("both {name} and {name}_FILE are set; use only one")]
	Conflict { name: String },

	#[error("failed to read secret file {path} (from {name}_FILE): {source}")]
	FileRead {
		name: String,
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Load a secret from `NAME` or from the file named by `NAME_FILE`.
///
/// Empty values count as unset. Trailing newlines are trimmed from file
/// contents so secrets mounted by orchestrators work as-is.
pub fn load_secret_env(name: &str) -> Result<Option<SecretString>, SecretEnvError> {
	let file_var = format!("{name}_FILE");
	let direct = non_empty_var(name);
	let file = non_empty_var(&file_var);

	match (direct, file) {
		(Some(_), Some(_)) => Err(SecretEnvError::Conflict {
			name: name.to_string(),
		}),
		(Some(value), None) => Ok(Some(SecretString::new(value))),
		(None, Some(path)) => {
			let path = PathBuf::from(path);
			let content = std::fs::read_to_string(&path).map_err(|source| SecretEnvError::FileRead {
				name: name.to_string(),
				path: path.clone(),
				source,
			})?;
			let trimmed = content.trim_end_matches(['\n', '\r']);
			if trimmed.is_empty() {
				Ok(None)
			} else {
				Ok(Some(SecretString::new(trimmed.to_string())))
			}
		}
		(None, None) => Ok(None),
	}
}

fn non_empty_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}
