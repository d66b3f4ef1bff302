use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use ml_backend::{
    config::{Config, LogsConfig, ModelConfig, ServerConfig},
    model::{ModelRunner, build_runner},
    server::{handlers::AppState, router},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        model: ModelConfig::default(),
    }
}

/// Router backed by the runner the given config describes
pub fn create_test_app(config: &Config) -> Router {
    let model = build_runner(&config.model).unwrap();
    router(AppState::new(model))
}

/// Router backed by an arbitrary runner
pub fn create_app_with_runner(runner: Arc<dyn ModelRunner>) -> Router {
    router(AppState::new(runner))
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await.unwrap();
    config_path.to_string_lossy().to_string()
}

pub fn json_post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sample configuration with a linear model
pub const SAMPLE_LINEAR_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9000
  logs:
    level: "debug"

model:
  kind: linear
  weights:
    - [0.5, 0.5, 0.0]
    - [1.0, -1.0, 2.0]
  bias: [1.0, 0.0]
"#;

/// Sample configuration with a custom constant output
pub const SAMPLE_CONSTANT_CONFIG_YAML: &str = r#"
model:
  kind: constant
  output: [0.5, 7]
"#;

/// Linear model whose bias has the wrong length
pub const INVALID_LINEAR_CONFIG_YAML: &str = r#"
model:
  kind: linear
  weights:
    - [1.0, 2.0]
  bias: [1.0, 2.0, 3.0]
"#;
