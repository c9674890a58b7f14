//! Todo CRUD handlers.
//!
//! Thin adapters from HTTP onto `TodoService`. The service does the
//! validation and logging; handlers only extract inputs and shape responses.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use todos_core::todo::{CreateTodoRequest, TodoItem, UpdateTodoRequest};

use crate::{context::UserId, handlers::ApiError, state::AppState};

#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub items: Vec<TodoItem>,
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub item: TodoItem,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    pub upload_url: String,
}

/// List the caller's items (GET /api/todos).
pub async fn list_todos(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<TodoListResponse>, ApiError> {
    let items = state.service.get_todos_for_user(&user_id).await?;

    Ok(Json(TodoListResponse { items }))
}

/// Create an item (POST /api/todos).
pub async fn create_todo(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let item = state.service.create_todo(&request, &user_id).await?;

    Ok((StatusCode::CREATED, Json(TodoResponse { item })))
}

/// Replace the mutable fields of an item (PATCH /api/todos/{todo_id}).
pub async fn update_todo(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(todo_id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<TodoResponse>, ApiError> {
    let Json(request) = payload?;

    let item = state
        .service
        .update_todo(&request, &todo_id, &user_id)
        .await?;

    Ok(Json(TodoResponse { item }))
}

/// Delete an item (DELETE /api/todos/{todo_id}).
pub async fn delete_todo(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(todo_id): Path<String>,
) -> Result<Json<TodoResponse>, ApiError> {
    let item = state.service.delete_todo(&todo_id, &user_id).await?;

    Ok(Json(TodoResponse { item }))
}

/// Issue an upload URL for a new attachment and link it to the item
/// (POST /api/todos/{todo_id}/attachment).
///
/// The stored `attachmentUrl` is signed separately from the returned
/// `uploadUrl`. Both name the same object but their `expires` may differ.
pub async fn create_attachment_url(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(todo_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let attachment_id = Uuid::new_v4().to_string();

    let upload_url = state.service.generate_signed_url(&attachment_id).await?;
    state
        .service
        .update_attachment_url(&user_id, &todo_id, &attachment_id)
        .await?;

    Ok((StatusCode::CREATED, Json(UploadUrlResponse { upload_url })))
}
