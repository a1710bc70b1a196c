// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Algolia API client.

use thiserror::Error;

/// Errors that can occur when interacting with the Algolia API.
#[derive(Debug, Error)]
pub enum AlgoliaError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Rate limit exceeded.
	#[error("Rate limit exceeded")]
	RateLimited,

	/// Invalid application id or API key.
	#[error("Invalid application id or API key")]
	Unauthorized,

	/// The index does not exist.
	#[error("Index not found: {0}")]
	IndexNotFound(String),

	/// Invalid or unparseable response from Algolia.
	#[error("Invalid response from Algolia: {0}")]
	InvalidResponse(String),

	/// Algolia returned an error status.
	#[error("Algolia API error: {status} - {message}")]
	ApiError { status: u16, message: String },

	/// The configured base URL cannot address the API.
	#[error("Invalid base URL {url}: {message}")]
	InvalidBaseUrl { url: String, message: String },
}
