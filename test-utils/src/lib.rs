//! Todo API Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the todo API.
//! This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories for inserting to-do items with sensible defaults.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting entities straight into the database
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::TodoItem;
//!
//! #[tokio::test]
//! async fn test_todo_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(TodoItem)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
