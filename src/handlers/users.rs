//! User CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::model::{DeleteAck, UserInput};
use crate::service::{validate_input, UserService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<UserInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    validate_input(&input)?;
    let user = UserService::create(&state.pool, &input).await?;
    Ok(Json(user))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let users = UserService::list(&state.pool).await?;
    Ok(Json(users))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let user = UserService::get_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("user not found".into()))?;
    Ok(Json(user))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UserInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    validate_input(&input)?;
    let user = UserService::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("user not found".into()))?;
    Ok(Json(user))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if !UserService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("user not found".into()));
    }
    Ok(Json(DeleteAck::user_deleted()))
}
