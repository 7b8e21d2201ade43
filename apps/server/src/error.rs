use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use goals_core::errors::{DatabaseError, Error as CoreError};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) => match e {
                CoreError::Validation(_) => StatusCode::BAD_REQUEST,
                CoreError::Database(DatabaseError::NotFound(_)) => StatusCode::NOT_FOUND,
                CoreError::Database(DatabaseError::UniqueViolation(_)) => StatusCode::CONFLICT,
                CoreError::Database(_) | CoreError::Unexpected(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use goals_core::errors::ValidationError;

    #[test]
    fn core_errors_map_to_http_status() {
        let cases = [
            (
                ApiError::from(CoreError::Validation(ValidationError::MissingField(
                    "goalName".into(),
                ))),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(CoreError::Database(DatabaseError::NotFound("x".into()))),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(CoreError::Database(DatabaseError::UniqueViolation("x".into()))),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::from(CoreError::Database(DatabaseError::QueryFailed("x".into()))),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.status(), expected);
        }
    }
}
