// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP-facing error type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use karaoke_search_algolia::AlgoliaError;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	#[error("search failed: {0}")]
	Search(#[from] AlgoliaError),
	#[error("template error: {0}")]
	Template(#[from] minijinja::Error),
	#[error("internal error: {0}")]
	Internal(String),
}

impl ServerError {
	/// Search failures map to 502 regardless of the upstream status.
	pub fn status(&self) -> StatusCode {
		match self {
			ServerError::Search(_) => StatusCode::BAD_GATEWAY,
			ServerError::Template(_) | ServerError::Internal(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
	pub error: String,
	pub message: String,
}

impl ServerError {
	/// Error code and client-facing message. Upstream details stay in the
	/// logs.
	fn public_parts(&self) -> (&'static str, &'static str) {
		match self {
			ServerError::Search(_) => ("search_failed", "The search service is unavailable"),
			ServerError::Template(_) => ("template_error", "The page could not be rendered"),
			ServerError::Internal(_) => ("internal_error", "Internal server error"),
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let status = self.status();
		let (error, message) = self.public_parts();

		tracing::error!(error = %self, status = status.as_u16(), "Request failed");

		let body = ErrorBody {
			error: error.to_string(),
			message: message.to_string(),
		};
		(status, Json(body)).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_search_errors_are_bad_gateway() {
		assert_eq!(
			ServerError::Search(AlgoliaError::Unauthorized).status(),
			StatusCode::BAD_GATEWAY
		);
		assert_eq!(
			ServerError::Search(AlgoliaError::Timeout).status(),
			StatusCode::BAD_GATEWAY
		);
	}

	#[test]
	fn test_body_hides_upstream_details() {
		let error = ServerError::Search(AlgoliaError::InvalidBaseUrl {
			url: "http://internal.example:9000".to_string(),
			message: "cannot be a base".to_string(),
		});
		let (code, message) = error.public_parts();
		assert_eq!(code, "search_failed");
		assert!(!message.contains("internal.example"));
		assert!(!message.contains("cannot be a base"));
	}

	#[test]
	fn test_internal_is_500() {
		let response = ServerError::Internal("boom".to_string()).into_response();
		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}
}
