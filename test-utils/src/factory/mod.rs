//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Rows are inserted directly through SeaORM, bypassing the
//! repository and service layers under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let item = factory::todo_item::create_todo_item(&db).await?;
//!
//!     // Customize with the builder
//!     let done = factory::todo_item::TodoItemFactory::new(&db)
//!         .title("Water plants")
//!         .completed_at(chrono::Utc::now())
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod helpers;
pub mod todo_item;

pub use todo_item::create_todo_item;
