use std::sync::Arc;

use crate::{client::UpstreamResponse, error::ApiResult, main_lib::AppState};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, Method},
    routing::{delete, get},
    Router,
};

async fn list_goals(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<UpstreamResponse> {
    let upstream = state
        .backend
        .forward(Method::GET, "/goals", &headers, None)
        .await?;
    Ok(upstream)
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<UpstreamResponse> {
    let upstream = state
        .backend
        .forward(Method::POST, "/goals", &headers, Some(body))
        .await?;
    Ok(upstream)
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<UpstreamResponse> {
    // Re-encode so a decoded id cannot escape its path segment.
    let path = format!("/goals/{}", urlencoding::encode(&id));
    let upstream = state
        .backend
        .forward(Method::DELETE, &path, &headers, None)
        .await?;
    Ok(upstream)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(list_goals).post(create_goal))
        .route("/goals/{id}", delete(delete_goal))
}
