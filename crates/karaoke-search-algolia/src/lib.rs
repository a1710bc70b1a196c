// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Algolia search API client.
//!
//! This crate provides a typed Rust client for the Algolia search REST API,
//! encapsulating HTTP communication and response parsing. Hits are returned
//! as raw JSON documents; decoding them is the caller's business.

pub mod client;
pub mod error;
pub mod types;

pub use client::AlgoliaClient;
pub use error::AlgoliaError;
pub use types::{SearchRequest, SearchResponse};
