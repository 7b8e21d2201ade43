use std::{path::PathBuf, sync::Arc, time::Duration};

use axum::{http::StatusCode, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, main_lib::AppState};

pub mod goals;

/// Added to the upstream budget for the whole-request deadline. The upstream
/// call must time out first so the caller gets a 502.
const UPSTREAM_TIMEOUT_MARGIN: Duration = Duration::from_secs(1);

pub async fn healthz() -> &'static str {
    "ok"
}

/// `/api/goals*` goes to the goals API; everything else is a static file,
/// with `index.html` as the fallback for client-side routes.
pub fn web_router(state: Arc<AppState>, config: &Config) -> Router {
    let static_dir = PathBuf::from(&config.static_dir);
    let index_file = static_dir.join("index.html");
    let static_service = ServeDir::new(static_dir).fallback(ServeFile::new(index_file));

    Router::new()
        .nest("/api", goals::router())
        .route("/healthz", get(healthz))
        .with_state(state)
        .fallback_service(static_service)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    config.request_timeout + UPSTREAM_TIMEOUT_MARGIN,
                )),
        )
}
