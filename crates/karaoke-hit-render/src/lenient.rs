// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Tolerant field decoders for hit documents.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Decode an optional string, treating `""` and `null` as absent.
/// Numbers are accepted and kept in their JSON text form.
pub(crate) fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Option::<Value>::deserialize(deserializer)?;
	Ok(match value {
		Some(Value::String(s)) if !s.is_empty() => Some(s),
		Some(Value::Number(n)) => Some(n.to_string()),
		_ => None,
	})
}

/// Decode a value, falling back to `T::default()` when it has the wrong shape.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned + Default,
{
	let value = Value::deserialize(deserializer)?;
	if value.is_null() {
		return Ok(T::default());
	}
	Ok(serde_json::from_value(value).unwrap_or_else(|error| {
		warn!(%error, "malformed field in hit, using default");
		T::default()
	}))
}

/// Decode a list, dropping entries that do not decode.
pub(crate) fn vec_skip_invalid<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	let items = match Value::deserialize(deserializer)? {
		Value::Array(items) => items,
		Value::Null => return Ok(Vec::new()),
		other => {
			warn!(found = %kind(&other), "expected a list in hit, using empty list");
			return Ok(Vec::new());
		}
	};

	Ok(items
		.into_iter()
		.enumerate()
		.filter_map(|(index, item)| match serde_json::from_value(item) {
			Ok(entry) => Some(entry),
			Err(error) => {
				warn!(index, %error, "dropping malformed entry in hit");
				None
			}
		})
		.collect())
}

fn kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
