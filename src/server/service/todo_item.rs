use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection};
use tracing::Span;

use crate::server::{
    data::todo_item::TodoItemRepository,
    error::AppError,
    model::todo_item::{CreateTodoItemParams, TodoItem, UpdateTodoItemParams},
    util::validate::{require_non_blank, require_positive_id},
};

pub struct TodoItemService<'a> {
    db: &'a DatabaseConnection,
    span: &'a Span,
}

impl<'a> TodoItemService<'a> {
    pub fn new(db: &'a DatabaseConnection, span: &'a Span) -> Self {
        Self { db, span }
    }

    /// Gets every to-do item
    ///
    /// An empty table is not an error; it yields an empty vector and a warning.
    pub async fn get_all(&self) -> Result<Vec<TodoItem>, AppError> {
        let repo = TodoItemRepository::new(self.db, self.span);

        let items = repo.get_all().await.inspect_err(|e| {
            tracing::error!(parent: self.span, "Error retrieving all to-do items: {}", e)
        })?;

        if items.is_empty() {
            tracing::warn!(parent: self.span, "No to-do items found in repository");
            return Ok(Vec::new());
        }

        Ok(items.into_iter().map(TodoItem::from_entity).collect())
    }

    /// Gets a to-do item by ID
    ///
    /// # Returns
    /// - `Ok(Some(TodoItem))` - The item exists
    /// - `Ok(None)` - No item with that ID exists
    /// - `Err(AppError::InvalidArgument)` - The ID is zero or negative
    pub async fn get_by_id(&self, id: i32) -> Result<Option<TodoItem>, AppError> {
        require_positive_id(id)?;

        let repo = TodoItemRepository::new(self.db, self.span);

        let item = repo.get_by_id(id).await.inspect_err(|e| {
            tracing::error!(parent: self.span, id, "Error retrieving to-do item: {}", e)
        })?;

        Ok(item.map(TodoItem::from_entity))
    }

    /// Creates a new to-do item
    ///
    /// New items always start out incomplete. Store failures propagate as errors;
    /// `false` is never returned for them.
    ///
    /// # Returns
    /// - `Ok(true)` - The item was stored
    /// - `Err(AppError::InvalidArgument)` - The title is blank
    pub async fn create(&self, params: CreateTodoItemParams) -> Result<bool, AppError> {
        require_non_blank(&params.title, "title")?;

        let repo = TodoItemRepository::new(self.db, self.span);

        let item = entity::todo_item::ActiveModel {
            title: ActiveValue::Set(params.title),
            due_date: ActiveValue::Set(params.due_date),
            is_completed: ActiveValue::Set(Some(false)),
            completed_date: ActiveValue::Set(None),
            ..Default::default()
        };

        let created = repo.create(item).await.inspect_err(|e| {
            tracing::error!(parent: self.span, "Error creating new to-do item: {}", e)
        })?;

        tracing::info!(parent: self.span, id = created.id, "Created to-do item");

        Ok(true)
    }

    /// Updates the title, due date and completion state of an existing to-do item
    ///
    /// Marking the item completed stamps `completed_date` with the current time.
    /// Marking it incomplete leaves any previous `completed_date` in place.
    ///
    /// # Returns
    /// - `Ok(true)` - The item was updated
    /// - `Ok(false)` - No item with that ID exists
    /// - `Err(AppError::InvalidArgument)` - The ID is zero or negative, or the title is blank
    pub async fn update(&self, params: UpdateTodoItemParams) -> Result<bool, AppError> {
        let id = require_positive_id(params.id)?;
        require_non_blank(&params.title, "title")?;

        let repo = TodoItemRepository::new(self.db, self.span);

        let existing = repo.get_by_id(id).await.inspect_err(|e| {
            tracing::error!(parent: self.span, id, "Error updating to-do item: {}", e)
        })?;

        let Some(mut item) = existing else {
            tracing::warn!(parent: self.span, id, "To-do item {} not found", id);
            return Ok(false);
        };

        item.title = params.title;
        item.due_date = params.due_date;
        item.is_completed = Some(params.is_completed);
        if params.is_completed {
            item.completed_date = Some(Utc::now());
        }

        repo.update(item).await.inspect_err(|e| {
            tracing::error!(parent: self.span, id, "Error updating to-do item: {}", e)
        })?;

        Ok(true)
    }

    /// Deletes a to-do item by ID
    ///
    /// # Returns
    /// - `Ok(true)` - The item was deleted
    /// - `Ok(false)` - No item with that ID exists
    /// - `Err(AppError::InvalidArgument)` - The ID is zero or negative
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, AppError> {
        require_positive_id(id)?;

        let repo = TodoItemRepository::new(self.db, self.span);

        let existing = repo.get_by_id(id).await.inspect_err(|e| {
            tracing::error!(parent: self.span, id, "Error deleting to-do item: {}", e)
        })?;

        let Some(item) = existing else {
            tracing::warn!(parent: self.span, id, "To-do item {} not found", id);
            return Ok(false);
        };

        repo.delete(item).await.inspect_err(|e| {
            tracing::error!(parent: self.span, id, "Error deleting to-do item: {}", e)
        })?;

        Ok(true)
    }
}
