// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Touhou karaoke search server.
//!
//! Serves a search page over a hosted Algolia index. The URL query string
//! carries the search state; each request runs one search and renders every
//! hit as a card.

pub mod api;
pub mod error;
pub mod page;
pub mod pagination;
pub mod routes;
pub mod routing;
pub mod search;
pub mod version;

pub use api::{create_app_state, create_router, create_search_client, AppState};
pub use error::ServerError;
pub use karaoke_server_config::ServerConfig;
pub use routing::UiState;
pub use search::{run_search, SearchBackend, SearchResults, SearchSettings};
