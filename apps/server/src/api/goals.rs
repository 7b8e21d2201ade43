use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    metrics,
    models::{Goal, GoalsResponse, NewGoal},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use goals_core::goals::GoalId;

#[utoipa::path(get, path = "/goals", responses((status = 200, body = GoalsResponse)))]
pub async fn list_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<GoalsResponse>> {
    let goals = state.goal_service.get_goals()?;
    Ok(Json(GoalsResponse {
        goals: goals.into_iter().map(Goal::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/goals",
    request_body = NewGoal,
    responses((status = 201, body = Goal), (status = 400, body = ErrorBody))
)]
pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewGoal>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let goal = state.goal_service.create_goal(payload.into()).await?;
    metrics::record_goal_created();
    Ok((StatusCode::CREATED, Json(Goal::from(goal))))
}

#[utoipa::path(
    delete,
    path = "/goals/{id}",
    params(("id" = i32, Path, description = "Goal id")),
    responses((status = 204), (status = 404, body = ErrorBody))
)]
pub async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let goal_id: GoalId = id
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid goal id '{}'", id)))?;
    state.goal_service.delete_goal(goal_id).await?;
    metrics::record_goal_deleted();
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(list_goals).post(create_goal))
        .route("/goals/{id}", delete(delete_goal))
}
