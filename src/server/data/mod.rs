//! Database repository layer.
//!
//! Repositories perform the database operations (CRUD) for each table and work on
//! SeaORM entity models directly. Mapping to domain models happens in the service layer.

pub mod todo_item;
