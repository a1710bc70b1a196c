// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Route tests against a fake search backend.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
	body::Body,
	http::{Request, StatusCode},
	Router,
};
use karaoke_search_algolia::{AlgoliaError, SearchRequest, SearchResponse};
use karaoke_server::{create_app_state, create_router, SearchBackend, SearchSettings};
use serde_json::{json, Value};
use tower::ServiceExt;

struct FakeBackend {
	response: Option<Value>,
	requests: Mutex<Vec<SearchRequest>>,
}

#[async_trait]
impl SearchBackend for FakeBackend {
	async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, AlgoliaError> {
		self.requests.lock().unwrap().push(request.clone());
		match &self.response {
			Some(body) => Ok(serde_json::from_value(body.clone()).unwrap()),
			None => Err(AlgoliaError::ApiError {
				status: 500,
				message: "boom".to_string(),
			}),
		}
	}
}

fn app(response: Option<Value>) -> (Router, Arc<FakeBackend>) {
	let backend = Arc::new(FakeBackend {
		response,
		requests: Mutex::new(Vec::new()),
	});
	let settings = SearchSettings {
		index_name: "touhou_karaoke".to_string(),
		hits_per_page: 20,
		max_values_per_facet: 10,
	};
	let state = create_app_state(settings, backend.clone()).unwrap();
	(create_router(state), backend)
}

fn two_hits() -> Value {
	json!({
		"hits": [
			{
				"objectID": "42",
				"title": "ネイティブフェイス",
				"url": "https://example.com/songs/42",
				"song_number": "1234-56",
				"display_artist": { "name": "めらみぽっぷ", "reading_name": "めらみぽっぷ", "url": "https://example.com/a" },
				"circle": { "name": "IOSYS" },
				"karaoke_delivery_models": [{ "name": "LIVE DAM Ai", "karaoke_type": "DAM" }],
				"videos": [{ "type": "YouTube", "url": "https://youtu.be/abc", "id": "abc" }]
			},
			{ "objectID": "7", "title": "second" },
			{ "title": "missing id" }
		],
		"nbHits": 2,
		"page": 0,
		"nbPages": 3,
		"processingTimeMS": 2,
		"facets": { "circle.name": { "IOSYS": 12, "Alstroemeria Records": 4 } }
	})
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
	let response = app
		.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
		.await
		.unwrap();
	let status = response.status();
	let body = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	(status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_search_page_renders_hits_in_order() {
	let (app, backend) = app(Some(two_hits()));
	let (status, html) = get(
		app,
		"/?touhou_karaoke%5Bquery%5D=%E6%9D%B1%E6%96%B9&touhou_karaoke%5Bpage%5D=2",
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	let first = html.find(r#"data-object-id="42""#).unwrap();
	let second = html.find(r#"data-object-id="7""#).unwrap();
	assert!(first < second);
	assert!(html.contains("https://www.youtube.com/embed/abc"));
	assert!(html.contains("Alstroemeria Records"));
	assert!(!html.contains("missing id"));

	let requests = backend.requests.lock().unwrap();
	assert_eq!(requests.len(), 1);
	assert_eq!(requests[0].query, "東方");
	assert_eq!(requests[0].page, 1);
}

#[tokio::test]
async fn test_search_page_passes_refinements_as_facet_filters() {
	let (app, backend) = app(Some(two_hits()));
	let (status, _) = get(
		app,
		"/?touhou_karaoke%5BrefinementList%5D%5Bcircle.name%5D%5B0%5D=IOSYS\
		 &touhou_karaoke%5BrefinementList%5D%5Bkaraoke_type%5D%5B%5D=DAM",
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	let requests = backend.requests.lock().unwrap();
	assert_eq!(
		requests[0].facet_filters,
		vec![
			vec!["circle.name:IOSYS".to_string()],
			vec!["karaoke_type:DAM".to_string()]
		]
	);
}

#[tokio::test]
async fn test_search_page_no_results() {
	let (app, _) = app(Some(json!({ "hits": [], "nbHits": 0, "nbPages": 0 })));
	let (status, html) = get(app, "/?touhou_karaoke%5Bquery%5D=zzz").await;

	assert_eq!(status, StatusCode::OK);
	assert!(html.contains("「zzz」は見つかりませんでした。"));
}

#[tokio::test]
async fn test_page_past_the_last_keeps_pagination() {
	let (app, backend) = app(Some(json!({
		"hits": [],
		"nbHits": 42,
		"page": 9,
		"nbPages": 3,
		"processingTimeMS": 1
	})));
	let (status, html) = get(
		app,
		"/?touhou_karaoke%5Bquery%5D=q&touhou_karaoke%5Bpage%5D=10",
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert!(!html.contains("見つかりませんでした"));
	assert!(html.contains(r#"class="pagination""#));
	assert!(html.contains("%5Bpage%5D=3"));
	assert_eq!(backend.requests.lock().unwrap()[0].page, 9);
}

#[tokio::test]
async fn test_all_records_skipped_is_not_no_results() {
	let (app, _) = app(Some(json!({
		"hits": [{ "title": "missing id" }],
		"nbHits": 1,
		"page": 0,
		"nbPages": 1
	})));
	let (status, body) = get(app, "/api/search?touhou_karaoke%5Bquery%5D=q").await;

	assert_eq!(status, StatusCode::OK);
	let payload: Value = serde_json::from_str(&body).unwrap();
	assert_eq!(payload["skipped"], 1);
	assert_eq!(payload["hits"].as_array().map(Vec::len), Some(0));
	assert!(payload["no_results"].is_null());
}

#[tokio::test]
async fn test_search_page_failure_renders_notice_with_502() {
	let (app, _) = app(None);
	let (status, html) = get(app, "/?touhou_karaoke%5Bquery%5D=q").await;

	assert_eq!(status, StatusCode::BAD_GATEWAY);
	assert!(html.contains("検索中にエラーが発生しました"));
	assert!(html.contains(r#"role="search""#));
}

#[tokio::test]
async fn test_search_api_returns_cards_and_state() {
	let (app, _) = app(Some(two_hits()));
	let (status, body) = get(app, "/api/search?touhou_karaoke%5Bquery%5D=bad+apple").await;

	assert_eq!(status, StatusCode::OK);
	let payload: Value = serde_json::from_str(&body).unwrap();
	assert_eq!(payload["state"]["query"], "bad apple");
	assert_eq!(payload["href"], "/?touhou_karaoke%5Bquery%5D=bad+apple");
	assert_eq!(payload["skipped"], 1);
	assert_eq!(payload["hits"][0]["card"]["key"], "42");
	assert!(payload["hits"][0]["html"]
		.as_str()
		.unwrap()
		.starts_with("<article"));
	assert_eq!(payload["pagination"]["nb_pages"], 3);
	assert!(payload["no_results"].is_null());
}

#[tokio::test]
async fn test_search_api_failure_is_json_502() {
	let (app, _) = app(None);
	let (status, body) = get(app, "/api/search").await;

	assert_eq!(status, StatusCode::BAD_GATEWAY);
	let payload: Value = serde_json::from_str(&body).unwrap();
	assert_eq!(payload["error"], "search_failed");
	assert!(payload["message"].is_string());
	assert!(!body.contains("boom"));
	assert!(!body.contains("500"));
}

#[tokio::test]
async fn test_health_check() {
	let (app, backend) = app(None);
	let (status, body) = get(app, "/health").await;

	assert_eq!(status, StatusCode::OK);
	let health: Value = serde_json::from_str(&body).unwrap();
	assert_eq!(health["status"], "healthy");
	assert_eq!(health["index"], "touhou_karaoke");
	assert!(health.get("timestamp").is_some());
	assert!(health.get("version").is_some());
	assert!(backend.requests.lock().unwrap().is_empty());
}
