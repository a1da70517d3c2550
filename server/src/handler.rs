//! HTTP handlers for `/api/todo`.
//!
//! Each handler decodes the request, runs the length rules on bodies, calls
//! one orchestrator operation and encodes the result. Nothing else happens
//! here.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use todo_core::{validate, TodoRepresentation};

use crate::{error::ApiError, AppState};

#[tracing::instrument(skip_all)]
pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoRepresentation>>, ApiError> {
    Ok(Json(state.list()?))
}

#[tracing::instrument(skip(state))]
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TodoRepresentation>, ApiError> {
    Ok(Json(state.get_by_id(&id)?))
}

#[tracing::instrument(skip_all)]
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<TodoRepresentation>,
) -> Result<(StatusCode, Json<TodoRepresentation>), ApiError> {
    validate(&input)?;
    let created = state.create(input)?;
    tracing::info!(id = %created.id, "created todo");
    Ok((StatusCode::CREATED, Json(created)))
}

#[tracing::instrument(skip(state, input))]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<TodoRepresentation>,
) -> Result<Json<TodoRepresentation>, ApiError> {
    validate(&input)?;
    Ok(Json(state.update(&id, input)?))
}

#[tracing::instrument(skip(state))]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TodoRepresentation>, ApiError> {
    let removed = state.delete(&id)?;
    tracing::info!(id = %removed.id, "deleted todo");
    Ok(Json(removed))
}
