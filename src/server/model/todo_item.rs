//! Domain & parameter models for to-do item operations
//!
//! Defines the to-do item domain model, the create/update parameter models,
//! and provides methods to convert the domain model from entity and into Dtos.

use chrono::{DateTime, Utc};

use crate::model::todo_item::{CreateTodoItemDto, TodoItemDto, UpdateTodoItemDto};

/// The to-do item domain model
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub id: i32,
    pub title: String,
    pub is_completed: Option<bool>,
    pub created_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    /// Time of the most recent update that marked the item completed.
    pub completed_date: Option<DateTime<Utc>>,
}

impl TodoItem {
    /// Converts an entity model to the to-do item domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `TodoItem` - The converted domain model
    pub fn from_entity(entity: entity::todo_item::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            is_completed: entity.is_completed,
            created_date: entity.created_date,
            due_date: entity.due_date,
            completed_date: entity.completed_date,
        }
    }

    /// Converts the domain model into the DTO returned by the API.
    pub fn into_dto(self) -> TodoItemDto {
        TodoItemDto {
            id: self.id,
            title: self.title,
            is_completed: self.is_completed,
            created_date: self.created_date,
            due_date: self.due_date,
            completed_date: self.completed_date,
        }
    }
}

/// Parameters for creating a new to-do item
///
/// Only user-supplied fields are carried; the ID, creation date and completion
/// state are assigned by the server.
#[derive(Debug, Clone)]
pub struct CreateTodoItemParams {
    pub title: String,
    pub due_date: DateTime<Utc>,
}

impl CreateTodoItemParams {
    pub fn from_dto(dto: CreateTodoItemDto) -> Self {
        Self {
            title: dto.title,
            due_date: dto.due_date,
        }
    }
}

/// Parameters for updating an existing to-do item
#[derive(Debug, Clone)]
pub struct UpdateTodoItemParams {
    pub id: i32,
    pub title: String,
    pub due_date: DateTime<Utc>,
    pub is_completed: bool,
}

impl UpdateTodoItemParams {
    pub fn from_dto(dto: UpdateTodoItemDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            due_date: dto.due_date,
            is_completed: dto.is_completed,
        }
    }
}
