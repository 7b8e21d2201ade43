use std::{net::SocketAddr, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, Response, StatusCode},
    routing::get,
    Router,
};
use goals_web::{
    api::web_router,
    build_state,
    config::{Config, LogFormat},
};
use serde_json::json;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

/// Starts the goals API on an ephemeral port.
async fn spawn_backend() -> (TempDir, SocketAddr) {
    let tmp = tempdir().unwrap();
    let config = goals_server::config::Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("backend.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        log_format: goals_server::config::LogFormat::Text,
    };
    let state = goals_server::build_state(&config).await.unwrap();
    let app = goals_server::api::app_router(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (tmp, addr)
}

/// Starts a goals API stand-in that answers only after `delay`.
async fn spawn_slow_backend(delay: Duration) -> SocketAddr {
    let app = Router::new().route(
        "/goals",
        get(move || async move {
            tokio::time::sleep(delay).await;
            "{\"goals\":[]}"
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn web_app(backend_url: String, static_dir: &TempDir) -> Router {
    web_app_with_timeout(backend_url, static_dir, Duration::from_secs(10))
}

fn web_app_with_timeout(backend_url: String, static_dir: &TempDir, timeout: Duration) -> Router {
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        backend_url,
        static_dir: static_dir.path().to_string_lossy().to_string(),
        request_timeout: timeout,
        log_format: LogFormat::Text,
    };
    let state = build_state(&config).unwrap();
    web_router(state, &config)
}

fn static_dir() -> TempDir {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>Goals</html>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('goals');").unwrap();
    dir
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> Response<Body> {
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

async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn create_list_and_delete_through_proxy() {
    let (_db, addr) = spawn_backend().await;
    let statics = static_dir();
    let app = web_app(format!("http://{}", addr), &statics);

    let response = send(&app, Method::POST, "/api/goals", Some(r#"{"goalName":"Hike"}"#)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["goalName"], "Hike");

    let response = send(&app, Method::GET, "/api/goals", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(body_json(response).await, json!({ "goals": [created.clone()] }));

    let uri = format!("/api/goals/{}", created["id"]);
    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let listing = body_json(send(&app, Method::GET, "/api/goals", None).await).await;
    assert_eq!(listing, json!({ "goals": [] }));
}

#[tokio::test]
async fn backend_errors_pass_through_unchanged() {
    let (_db, addr) = spawn_backend().await;
    let statics = static_dir();
    let app = web_app(format!("http://{}", addr), &statics);

    let response = send(&app, Method::DELETE, "/api/goals/4242", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], 404);

    let response = send(&app, Method::POST, "/api/goals", Some(r#"{"goalName":""}"#)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], 400);
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let statics = static_dir();
    let app = web_app(format!("http://{}", addr), &statics);

    let response = send(&app, Method::GET, "/api/goals", None).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["code"], 502);
}

#[tokio::test]
async fn slow_backend_is_bad_gateway() {
    let addr = spawn_slow_backend(Duration::from_secs(5)).await;
    let statics = static_dir();
    let app = web_app_with_timeout(
        format!("http://{}", addr),
        &statics,
        Duration::from_millis(300),
    );

    let response = send(&app, Method::GET, "/api/goals", None).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(body_json(response).await["code"], 502);
}

#[tokio::test]
async fn serves_static_files_with_index_fallback() {
    let statics = static_dir();
    let app = web_app("http://127.0.0.1:9".to_string(), &statics);

    let response = send(&app, Method::GET, "/app.js", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"console.log('goals');");

    let response = send(&app, Method::GET, "/goals/overview", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"<html>Goals</html>");
}

#[tokio::test]
async fn healthz_does_not_touch_backend() {
    let statics = static_dir();
    let app = web_app("http://127.0.0.1:9".to_string(), &statics);

    let response = send(&app, Method::GET, "/healthz", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"ok");
}
