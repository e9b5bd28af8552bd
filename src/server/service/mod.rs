//! Business logic services.
//!
//! Services sit between controllers and repositories. They enforce business rules,
//! apply defaults and server-assigned timestamps, and convert entity models returned
//! by repositories into domain models for the controller layer.

pub mod todo_item;
