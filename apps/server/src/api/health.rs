use std::sync::Arc;

use crate::main_lib::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use goals_core::health::HealthStatus;

/// Reports whether the database connection is live.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Database reachable"),
        (status = 503, description = "Database unreachable")
    )
)]
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthStatus>) {
    let status = state.health_service.check().await;
    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
