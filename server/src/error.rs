//! Translation of core failures into HTTP responses.
//!
//! `NotFound` and `BadIdentifier` answer with an empty body. Validation
//! failures carry a small JSON body naming the offending field. Store
//! failures are logged and answered with an empty 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use todo_core::{TodoError, ValidationError};

#[derive(Debug, Serialize)]
pub struct ValidationErrorBody {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Todo(#[from] TodoError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Todo(TodoError::NotFound(id)) => {
                tracing::debug!(%id, "todo not found");
                StatusCode::NOT_FOUND.into_response()
            }
            ApiError::Todo(TodoError::BadIdentifier { path_id, body_id }) => {
                tracing::warn!(%path_id, %body_id, "rejected update with mismatched ids");
                StatusCode::BAD_REQUEST.into_response()
            }
            ApiError::Todo(TodoError::Store(err)) => {
                tracing::error!(error = %err, "todo store failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            ApiError::Validation(err) => {
                tracing::debug!(error = %err, "rejected invalid todo");
                let body = ValidationErrorBody {
                    field: err.field(),
                    message: err.to_string(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}
