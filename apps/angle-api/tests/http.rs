use std::{path::Path, sync::Arc};

use axum::{
	Router,
	body::{self, Body},
	http::{Request, StatusCode},
};
use serde_json::{Map, Value};
use tower::util::ServiceExt;

use angle_api::{routes, state::AppState};
use angle_config::{
	CompletionProfile, Config, Generation, GenerationProviderConfig, Providers as ProviderConfigs,
	References, Search, Service,
};
use angle_domain::review::{ReviewSource, SearchHit};
use angle_service::{AngleService, BoxFuture, GenerationProvider, Providers, SearchProvider};

type Reply = fn() -> angle_providers::Result<Option<String>>;

struct StubGeneration(Reply);
impl GenerationProvider for StubGeneration {
	fn complete<'a>(
		&'a self,
		_: &'a GenerationProviderConfig,
		_: &'a str,
		_: &'a CompletionProfile,
		_: &'a [Value],
	) -> BoxFuture<'a, angle_providers::Result<Option<String>>> {
		let reply = (self.0)();

		Box::pin(async move { reply })
	}
}

struct OfflineSearch;
impl SearchProvider for OfflineSearch {
	fn search<'a>(
		&'a self,
		_: &'a Search,
		_: &'a str,
		_: ReviewSource,
	) -> BoxFuture<'a, angle_providers::Result<Vec<SearchHit>>> {
		Box::pin(async { Err(angle_providers::Error::Upstream { status: 503, body: String::new() }) })
	}
}

fn test_config(references_dir: &Path, api_key: Option<&str>) -> Config {
	Config {
		service: Service { http_bind: "127.0.0.1:0".to_string(), log_level: "info".to_string() },
		references: References { dir: references_dir.to_path_buf(), max_chars: 40_000 },
		search: Search::default(),
		providers: ProviderConfigs {
			generation: GenerationProviderConfig {
				provider_id: "stub".to_string(),
				api_base: "http://127.0.0.1:1".to_string(),
				path: "/chat/completions".to_string(),
				api_key: api_key.map(str::to_string),
				api_key_env: "ANGLE_API_TEST_UNSET_KEY".to_string(),
				timeout_ms: 1_000,
				default_headers: Map::new(),
			},
		},
		generation: Generation::default(),
	}
}

fn app(references_dir: &Path, api_key: Option<&str>, reply: Reply) -> Router {
	let providers = Providers::new(Arc::new(StubGeneration(reply)), Arc::new(OfflineSearch));
	let service = AngleService::with_providers(test_config(references_dir, api_key), providers);

	routes::router(AppState::with_service(service))
}

fn angles_reply() -> angle_providers::Result<Option<String>> {
	Ok(Some(
		"[{\"angle\":\"brain fog. Zentrex clears it.\",\"likelihood\":70},{\"angle\":\"low energy. Zentrex lifts it.\",\"likelihood\":92.6}]"
			.to_string(),
	))
}

fn script_reply() -> angle_providers::Result<Option<String>> {
	Ok(Some("00:00-00:04: Still tired after coffee?".to_string()))
}

fn garbage_reply() -> angle_providers::Result<Option<String>> {
	Ok(Some("not json".to_string()))
}

fn rate_limited_reply() -> angle_providers::Result<Option<String>> {
	Err(angle_providers::Error::Upstream {
		status: 429,
		body: "{\"error\":\"rate limited\"}".to_string(),
	})
}

fn transport_failure_reply() -> angle_providers::Result<Option<String>> {
	Err(angle_providers::Error::InvalidConfig { message: "connection refused".to_string() })
}

async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri(uri)
				.header("content-type", "application/json")
				.body(Body::from(body.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call endpoint.");
	let status = response.status();
	let bytes =
		body::to_bytes(response.into_body(), usize::MAX).await.expect("Failed to read body.");
	let json = serde_json::from_slice(&bytes).expect("Response body must be JSON.");

	(status, json)
}

#[tokio::test]
async fn health_ok() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");
	let response = app(dir.path(), Some("key"), script_reply)
		.oneshot(
			Request::builder()
				.uri("/health")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call health.");

	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn angles_are_sorted_and_scored() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");
	let (status, json) = post_json(
		app(dir.path(), Some("key"), angles_reply),
		"/api/angles",
		r#"{"brandName":"Acme","productName":"Zentrex","aggressiveness":4}"#,
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["angles"][0]["likelihood"], 93);
	assert_eq!(json["angles"][0]["angle"], "low energy. Zentrex lifts it.");
	assert_eq!(json["angles"][1]["likelihood"], 70);
}

#[tokio::test]
async fn missing_product_is_a_bad_request() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");
	let (status, json) =
		post_json(app(dir.path(), Some("key"), angles_reply), "/api/angles", r#"{"brandName":"Acme"}"#)
			.await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(json["error"], "Product name is required");
	assert!(json.get("details").is_none());
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");
	let (status, json) =
		post_json(app(dir.path(), Some("key"), script_reply), "/api/generate", "{not json").await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(json["error"], "Invalid request body");
}

#[tokio::test]
async fn missing_api_key_is_a_server_error() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");
	let (status, json) = post_json(
		app(dir.path(), None, script_reply),
		"/api/variation",
		r#"{"script":"00:00-00:04: Hello."}"#,
	)
	.await;

	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(json["error"], "API key not configured");
}

#[tokio::test]
async fn unparseable_angles_reply_returns_raw_text() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");
	let (status, json) = post_json(
		app(dir.path(), Some("key"), garbage_reply),
		"/api/angles",
		r#"{"brandName":"Acme","productName":"Zentrex"}"#,
	)
	.await;

	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(json["error"], "Failed to parse angles response");
	assert_eq!(json["details"], "not json");
}

#[tokio::test]
async fn upstream_status_and_body_pass_through() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");
	let (status, json) = post_json(
		app(dir.path(), Some("key"), rate_limited_reply),
		"/api/generate",
		r#"{"brandName":"Acme","benefit":"energy","angle":"fatigue"}"#,
	)
	.await;

	assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
	assert_eq!(json["error"], "Failed to generate script");
	assert_eq!(json["details"], "{\"error\":\"rate limited\"}");
}

#[tokio::test]
async fn transport_failure_is_an_internal_error() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");
	let (status, json) = post_json(
		app(dir.path(), Some("key"), transport_failure_reply),
		"/api/variation",
		r#"{"script":"00:00-00:04: Hello.","videoLength":1}"#,
	)
	.await;

	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(json["error"], "Internal server error");
	assert!(json["details"].as_str().is_some_and(|details| details.contains("connection refused")));
}

#[tokio::test]
async fn script_endpoint_returns_generated_text() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");
	let (status, json) = post_json(
		app(dir.path(), Some("key"), script_reply),
		"/api/generate",
		r#"{"brandName":"Acme","benefit":"energy","angle":"fatigue","videoLength":2.5,"aggressiveness":9}"#,
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json, serde_json::json!({ "script": "00:00-00:04: Still tired after coffee?" }));
}

#[tokio::test]
async fn numeric_string_aggressiveness_is_accepted() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir.");
	let (status, json) = post_json(
		app(dir.path(), Some("key"), angles_reply),
		"/api/angles",
		r#"{"brandName":"Acme","productName":"Zentrex","aggressiveness":"7"}"#,
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["angles"].as_array().map(Vec::len), Some(2));
}
