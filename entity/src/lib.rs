//! SeaORM entity definitions for the todo database schema.

pub mod prelude;

pub mod todo_item;
