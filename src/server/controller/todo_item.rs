use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::Span;

use crate::{
    model::{
        api::ErrorDto,
        todo_item::{CreateTodoItemDto, TodoItemDto, UpdateTodoItemDto},
    },
    server::{
        error::AppError,
        model::todo_item::{CreateTodoItemParams, TodoItem, UpdateTodoItemParams},
        service::todo_item::TodoItemService,
        state::AppState,
        util::{json::ValidatedJson, path::PathParam, validate::require_positive_id},
    },
};

/// Tag for grouping to-do endpoints in OpenAPI documentation
pub static TODO_TAG: &str = "todo";

/// Get all to-do items.
///
/// # Returns
/// - `200 OK` - JSON array of every to-do item
/// - `204 No Content` - No to-do items exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/v1/todo/all",
    tag = TODO_TAG,
    responses(
        (status = 200, description = "Successfully retrieved to-do items", body = Vec<TodoItemDto>),
        (status = 204, description = "No to-do items exist"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_todo_items(State(state): State<AppState>) -> Result<Response, AppError> {
    let span = Span::current();
    let service = TodoItemService::new(&state.db, &span);

    let items = service.get_all().await?;

    if items.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let items: Vec<TodoItemDto> = items.into_iter().map(TodoItem::into_dto).collect();

    Ok((StatusCode::OK, Json(items)).into_response())
}

/// Get a specific to-do item by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - To-do item ID, must be greater than zero
///
/// # Returns
/// - `200 OK` - To-do item details
/// - `400 Bad Request` - ID is not a number, or is zero or negative
/// - `404 Not Found` - No to-do item with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/v1/todo/{id}",
    tag = TODO_TAG,
    params(
        ("id" = i32, Path, description = "To-do item ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved to-do item", body = TodoItemDto),
        (status = 400, description = "Invalid to-do item ID", body = ErrorDto),
        (status = 404, description = "To-do item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_todo_item_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_positive_id(id)?;

    let span = Span::current();
    let service = TodoItemService::new(&state.db, &span);

    match service.get_by_id(id).await? {
        Some(item) => Ok((StatusCode::OK, Json(item.into_dto()))),
        None => Err(AppError::NotFound("To-do item not found".to_string())),
    }
}

/// Create a new to-do item.
///
/// The item always starts out incomplete regardless of the request body.
///
/// # Returns
/// - `200 OK` - Successfully created to-do item
/// - `400 Bad Request` - Malformed body, title length outside 3-100 characters or blank title
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/v1/todo",
    tag = TODO_TAG,
    request_body = CreateTodoItemDto,
    responses(
        (status = 200, description = "Successfully created to-do item"),
        (status = 400, description = "Invalid to-do item data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_todo_item(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTodoItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let span = Span::current();
    let service = TodoItemService::new(&state.db, &span);

    let params = CreateTodoItemParams::from_dto(payload);

    if service.create(params).await? {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::BadRequest(
            "To-do item could not be created".to_string(),
        ))
    }
}

/// Update an existing to-do item.
///
/// Setting `isCompleted` to true stamps the item's completion date with the
/// current server time.
///
/// # Returns
/// - `200 OK` - Successfully updated to-do item
/// - `400 Bad Request` - Malformed body, invalid ID or invalid title
/// - `404 Not Found` - No to-do item with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/v1/todo",
    tag = TODO_TAG,
    request_body = UpdateTodoItemDto,
    responses(
        (status = 200, description = "Successfully updated to-do item"),
        (status = 400, description = "Invalid to-do item data", body = ErrorDto),
        (status = 404, description = "To-do item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_todo_item(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateTodoItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let span = Span::current();
    let service = TodoItemService::new(&state.db, &span);

    let params = UpdateTodoItemParams::from_dto(payload);

    if service.update(params).await? {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::NotFound("To-do item not found".to_string()))
    }
}

/// Delete a to-do item by ID.
///
/// # Returns
/// - `200 OK` - Successfully deleted to-do item
/// - `400 Bad Request` - ID is not a number, or is zero or negative
/// - `404 Not Found` - No to-do item with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/v1/todo/{id}",
    tag = TODO_TAG,
    params(
        ("id" = i32, Path, description = "To-do item ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted to-do item"),
        (status = 400, description = "Invalid to-do item ID", body = ErrorDto),
        (status = 404, description = "To-do item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_todo_item(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let id = require_positive_id(id)?;

    let span = Span::current();
    let service = TodoItemService::new(&state.db, &span);

    if service.delete_by_id(id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::NotFound("To-do item not found".to_string()))
    }
}
