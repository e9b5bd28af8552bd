use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::date::deserialize_utc;

/// A to-do item as returned by the API.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemDto {
    pub id: i32,
    pub title: String,
    pub is_completed: Option<bool>,
    pub created_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub completed_date: Option<DateTime<Utc>>,
}

/// Request body for creating a to-do item.
///
/// Completion state is always server-assigned; an `isCompleted` field in the
/// body is ignored.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoItemDto {
    #[validate(length(min = 3, max = 100))]
    pub title: String,
    #[serde(deserialize_with = "deserialize_utc")]
    pub due_date: DateTime<Utc>,
}

/// Request body for updating an existing to-do item.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoItemDto {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(length(min = 3, max = 100))]
    pub title: String,
    #[serde(deserialize_with = "deserialize_utc")]
    pub due_date: DateTime<Utc>,
    pub is_completed: bool,
}
