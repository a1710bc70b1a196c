// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

const PRODUCT: &str = "touhou-karaoke-search";

/// Creates a new HTTP client builder with the standard User-Agent header.
///
/// # Example
/// ```ignore
/// let client = karaoke_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Creates a builder with the standard User-Agent and a request timeout.
pub fn builder_with_timeout(timeout: Duration) -> ClientBuilder {
	builder().timeout(timeout)
}

/// Returns the standard User-Agent string.
///
/// Format: `touhou-karaoke-search/{version}`
pub fn user_agent() -> String {
	format!("{PRODUCT}/{}", env!("CARGO_PKG_VERSION"))
}
