//! Chat CRUD handlers: list (joined with users), create, update, delete.

use crate::error::AppError;
use crate::extractors::AppJson;
use crate::models::{Confirmation, CreateChat, UpdateChat};
use crate::service::ChatService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let chats = ChatService::list_with_users(&state.pool).await?;
    Ok(Json(chats))
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateChat>,
) -> Result<impl IntoResponse, AppError> {
    let new = body.into_new()?;
    let created = ChatService::create(&state.pool, new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<UpdateChat>,
) -> Result<impl IntoResponse, AppError> {
    let message = body.into_message()?;
    let affected = ChatService::update_message(&state.pool, &id, &message).await?;
    if affected == 0 {
        return Err(AppError::NotFound(format!("chat {}", id)));
    }
    Ok(Json(Confirmation {
        message: "Chat message updated successfully",
    }))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let affected = ChatService::delete(&state.pool, &id).await?;
    if affected == 0 {
        return Err(AppError::NotFound(format!("chat {}", id)));
    }
    Ok(Json(Confirmation {
        message: "Chat message deleted successfully",
    }))
}
