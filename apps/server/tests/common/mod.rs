use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, Response},
    Router,
};
use goals_server::{
    api::app_router,
    build_state,
    config::{Config, LogFormat},
    AppState,
};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

/// Router backed by a fresh database; keep the `TempDir` alive for the test.
pub async fn test_app() -> (TempDir, Router) {
    test_app_with_state(|state| AppState {
        goal_service: Arc::clone(&state.goal_service),
        health_service: Arc::clone(&state.health_service),
        metrics: state.metrics.clone(),
    })
    .await
}

/// Like [`test_app`], but lets the test swap services in the built state.
pub async fn test_app_with_state<F>(customize: F) -> (TempDir, Router)
where
    F: FnOnce(&AppState) -> AppState,
{
    let tmp = tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        log_format: LogFormat::Text,
    };
    let state = build_state(&config).await.unwrap();
    let state = Arc::new(customize(&state));
    (tmp, app_router(state, &config))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
