//! To-do item data repository for database operations
//!
//! Provides the `TodoItemRepository` for reading and writing `todo_item` rows. Every
//! store failure is logged against the injected span and returned to the caller
//! unchanged as `AppError::DbErr`.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};
use tracing::Span;

use crate::server::{error::AppError, util::validate::require_positive_id};

/// Repository providing database operations for to-do item management.
pub struct TodoItemRepository<'a> {
    db: &'a DatabaseConnection,
    span: &'a Span,
}

impl<'a> TodoItemRepository<'a> {
    /// Creates a new TodoItemRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `span` - Span that all events emitted by the repository are attached to
    pub fn new(db: &'a DatabaseConnection, span: &'a Span) -> Self {
        Self { db, span }
    }

    /// Gets every to-do item in the table
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - All stored items in no particular order, empty if none exist
    /// - `Err(AppError::DbErr)` - Database error during select
    pub async fn get_all(&self) -> Result<Vec<entity::todo_item::Model>, AppError> {
        let items = entity::prelude::TodoItem::find()
            .all(self.db)
            .await
            .inspect_err(|e| {
                tracing::error!(parent: self.span, "Failed to retrieve to-do items: {}", e)
            })?;

        Ok(items)
    }

    /// Finds a to-do item by ID
    ///
    /// # Arguments
    /// - `id` - ID of the to-do item to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The requested to-do item if found
    /// - `Ok(None)` - No to-do item with that ID exists
    /// - `Err(AppError::InvalidArgument)` - The ID is zero or negative
    /// - `Err(AppError::DbErr)` - Database error during select
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::todo_item::Model>, AppError> {
        require_positive_id(id)?;

        let item = entity::prelude::TodoItem::find_by_id(id)
            .one(self.db)
            .await
            .inspect_err(|e| {
                tracing::error!(parent: self.span, id, "Failed to retrieve to-do item: {}", e)
            })?;

        if item.is_none() {
            tracing::warn!(parent: self.span, id, "No to-do item with ID {} found", id);
        }

        Ok(item)
    }

    /// Inserts a new to-do item
    ///
    /// The creation date is always assigned here from the server clock, overwriting
    /// whatever the caller provided.
    ///
    /// # Arguments
    /// - `item` - Active model of the new row; its ID must be unset or zero
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted row including its store-assigned ID
    /// - `Err(AppError::InvalidState)` - The active model already carries an ID
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(
        &self,
        mut item: entity::todo_item::ActiveModel,
    ) -> Result<entity::todo_item::Model, AppError> {
        match item.id {
            ActiveValue::Set(id) | ActiveValue::Unchanged(id) if id != 0 => {
                tracing::error!(parent: self.span, id, "Refusing to insert existing to-do item");
                return Err(AppError::InvalidState(format!(
                    "To-do item {} appears to already exist",
                    id
                )));
            }
            _ => {}
        }

        item.id = ActiveValue::NotSet;
        item.created_date = ActiveValue::Set(Utc::now());

        let created = item.insert(self.db).await.inspect_err(|e| {
            tracing::error!(parent: self.span, "Failed to insert to-do item: {}", e)
        })?;

        Ok(created)
    }

    /// Writes the mutable fields of an existing to-do item
    ///
    /// The creation date is never rewritten.
    ///
    /// # Arguments
    /// - `item` - Entity previously fetched from the store with its fields modified
    ///
    /// # Returns
    /// - `Ok(Model)` - The row as stored after the update
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(
        &self,
        item: entity::todo_item::Model,
    ) -> Result<entity::todo_item::Model, AppError> {
        let id = item.id;

        let updated = entity::todo_item::ActiveModel {
            id: ActiveValue::Unchanged(item.id),
            title: ActiveValue::Set(item.title),
            is_completed: ActiveValue::Set(item.is_completed),
            created_date: ActiveValue::Unchanged(item.created_date),
            due_date: ActiveValue::Set(item.due_date),
            completed_date: ActiveValue::Set(item.completed_date),
        }
        .update(self.db)
            .await
            .inspect_err(|e| {
                tracing::error!(parent: self.span, id, "Failed to update to-do item: {}", e)
            })?;

        Ok(updated)
    }

    /// Deletes an existing to-do item
    ///
    /// # Arguments
    /// - `item` - Entity previously fetched from the store
    ///
    /// # Returns
    /// - `Ok(())` - The row was deleted
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, item: entity::todo_item::Model) -> Result<(), AppError> {
        let id = item.id;

        entity::prelude::TodoItem::delete_by_id(id)
            .exec(self.db)
            .await
            .inspect_err(|e| {
                tracing::error!(parent: self.span, id, "Failed to delete to-do item: {}", e)
            })?;

        Ok(())
    }
}
