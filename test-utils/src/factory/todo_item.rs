//! To-do item factory for creating test to-do item entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test to-do items with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::todo_item::TodoItemFactory;
///
/// let item = TodoItemFactory::new(&db)
///     .title("Buy milk")
///     .is_completed(Some(false))
///     .build()
///     .await?;
/// ```
pub struct TodoItemFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    is_completed: Option<bool>,
    created_date: DateTime<Utc>,
    due_date: DateTime<Utc>,
    completed_date: Option<DateTime<Utc>>,
}

impl<'a> TodoItemFactory<'a> {
    /// Creates a new TodoItemFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Todo {id}"` where id is auto-incremented
    /// - is_completed: `Some(false)`
    /// - created_date: now
    /// - due_date: one day from now
    /// - completed_date: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            title: format!("Todo {}", id),
            is_completed: Some(false),
            created_date: now,
            due_date: now + Duration::days(1),
            completed_date: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn is_completed(mut self, is_completed: Option<bool>) -> Self {
        self.is_completed = is_completed;
        self
    }

    pub fn created_date(mut self, created_date: DateTime<Utc>) -> Self {
        self.created_date = created_date;
        self
    }

    pub fn due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Marks the item as completed at the provided time.
    pub fn completed_at(mut self, completed_date: DateTime<Utc>) -> Self {
        self.is_completed = Some(true);
        self.completed_date = Some(completed_date);
        self
    }

    /// Builds and inserts the to-do item entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::todo_item::Model)` - Created to-do item entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::todo_item::Model, DbErr> {
        entity::todo_item::ActiveModel {
            title: ActiveValue::Set(self.title),
            is_completed: ActiveValue::Set(self.is_completed),
            created_date: ActiveValue::Set(self.created_date),
            due_date: ActiveValue::Set(self.due_date),
            completed_date: ActiveValue::Set(self.completed_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a to-do item with default values.
///
/// Shorthand for `TodoItemFactory::new(db).build().await`.
///
/// # Returns
/// - `Ok(entity::todo_item::Model)` - Created to-do item entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_todo_item(db: &DatabaseConnection) -> Result<entity::todo_item::Model, DbErr> {
    TodoItemFactory::new(db).build().await
}
