use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use corgi_companion::{
    companion::Companion,
    config::{Config, LlmConfig, LogsConfig, Provider, ServerConfig},
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;

pub const LANDING_PAGE: &str = "<!DOCTYPE html><title>コーギー</title>";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir: "public".to_string(),
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            provider: Provider::Groq,
            api_key: "test-api-key".to_string(),
            ..LlmConfig::default()
        },
    }
}

/// Directory holding a minimal landing page.
pub fn create_static_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    std::fs::write(dir.path().join("index.html"), LANDING_PAGE).unwrap();
    dir
}

/// Router wired to `mock`; keep the returned directory alive for the test.
pub fn create_test_app(mock: Arc<MockLlmClient>) -> (Router, TempDir) {
    let static_dir = create_static_dir();
    let state = AppState {
        companion: Arc::new(Companion::new(mock)),
    };

    (server::router(state, static_dir.path()), static_dir)
}

pub fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn read_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 0
  logs:
    level: "debug"

llm:
  provider: "groq"
  model: "llama3-8b-8192"
"#;
