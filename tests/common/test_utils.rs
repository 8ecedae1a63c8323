use super::MockInferenceProvider;
use answer_service::server::{AppState, router, router_with_body_limit};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt; // for `oneshot`

/// Build the full router around a shared mock provider
pub fn create_test_app(provider: MockInferenceProvider) -> (Router, Arc<MockInferenceProvider>) {
    let provider = Arc::new(provider);
    let app = router(AppState::new(provider.clone()));
    (app, provider)
}

/// Same as [`create_test_app`] but with a custom request body limit
pub fn create_test_app_with_body_limit(
    provider: MockInferenceProvider,
    max_body_bytes: usize,
) -> (Router, Arc<MockInferenceProvider>) {
    let provider = Arc::new(provider);
    let app = router_with_body_limit(AppState::new(provider.clone()), max_body_bytes);
    (app, provider)
}

/// Build a `POST /answer` request with a JSON content type and the given raw body
pub fn answer_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/answer")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

/// Send a request and return the status with the decoded JSON body
pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write a config YAML file into `dir` and return its path
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    tokio::fs::write(&config_path, content).await.unwrap();
    config_path.to_string_lossy().to_string()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  max_body_bytes: 1048576
  logs:
    level: "debug"

inference:
  base_url: "http://localhost:8000"
  model: "deepset/roberta-base-squad2"
  api_key: "test-api-key"
  serialize_calls: true
"#;

/// Configuration that only overrides the port
pub const PARTIAL_CONFIG_YAML: &str = r#"
server:
  port: 9000
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: "not-a-number"
"#;

/// Configuration with an empty model name
pub const EMPTY_MODEL_CONFIG_YAML: &str = r#"
inference:
  model: ""
"#;
