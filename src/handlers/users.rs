//! User CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::AppJson;
use crate::models::{Confirmation, CreateUser, UpdateUser};
use crate::service::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::list(&state.pool).await?;
    Ok(Json(users))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::get(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
    Ok(Json(user))
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateUser>,
) -> Result<impl IntoResponse, AppError> {
    let new = body.into_new()?;
    let user = UserService::create(&state.pool, new).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<UpdateUser>,
) -> Result<impl IntoResponse, AppError> {
    let changes = body.into_changes()?;
    let affected = UserService::update(&state.pool, &id, changes).await?;
    if affected == 0 {
        return Err(AppError::NotFound(format!("user {}", id)));
    }
    Ok(Json(Confirmation {
        message: "User updated successfully",
    }))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let affected = UserService::delete(&state.pool, &id).await?;
    if affected == 0 {
        return Err(AppError::NotFound(format!("user {}", id)));
    }
    Ok(Json(Confirmation {
        message: "User deleted successfully",
    }))
}
