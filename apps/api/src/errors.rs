use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::evaluation::EvaluationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Evaluation(EvaluationError::AggregateFailure(msg)) => {
                tracing::warn!("Evaluation incomplete: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EVALUATION_INCOMPLETE",
                    "The interview could not be evaluated. Please try again later.".to_string(),
                )
            }
            AppError::Evaluation(e) => {
                tracing::error!("Evaluation error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EVALUATION_ERROR",
                    "An evaluation error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_failure_maps_to_422() {
        let response =
            AppError::from(EvaluationError::AggregateFailure("no questions".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::Validation("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_task_failure_maps_to_500() {
        let response =
            AppError::from(EvaluationError::TaskFailed("panicked".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
